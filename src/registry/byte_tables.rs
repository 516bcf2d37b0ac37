//! Fixed 256-entry wiring tables for the byte-mode components.
//!
//! The rotor tables are permutations of `0..=255`; the reflector pairs all
//! 256 values into 128 swaps with no fixed point. They are frozen: changing
//! any entry changes every byte-mode ciphertext.

#[rustfmt::skip]
pub(crate) static BYTE_ROTOR_I: [u8; 256] = [
    0x5E, 0x18, 0x7F, 0xAA, 0x02, 0xD4, 0x60, 0x43, 0x73, 0xF5, 0xFD, 0x50, 0x0A, 0x75, 0x39, 0x84,
    0x9E, 0x8D, 0xBF, 0xBA, 0x5C, 0x93, 0xEA, 0xCA, 0x2C, 0x45, 0x36, 0x9F, 0x80, 0x2D, 0xAF, 0x1A,
    0x65, 0xF8, 0xAD, 0x14, 0xA3, 0x3E, 0x9B, 0x71, 0x3B, 0xA1, 0xB5, 0x22, 0xC0, 0x77, 0xBE, 0x7D,
    0xEE, 0x91, 0x04, 0x47, 0x41, 0xA0, 0x51, 0x53, 0x94, 0xCF, 0xB2, 0x03, 0x00, 0x31, 0x59, 0x6B,
    0x76, 0x0E, 0x3A, 0x70, 0x61, 0xE7, 0x8B, 0x6D, 0x0F, 0xD6, 0xFA, 0xD3, 0xF9, 0xB8, 0xDF, 0xA2,
    0x85, 0xE5, 0xE9, 0xC8, 0xF4, 0x06, 0x72, 0x9D, 0x54, 0xD2, 0x1D, 0xF1, 0x89, 0x1C, 0x30, 0xC3,
    0x44, 0x49, 0x7A, 0x3D, 0x37, 0x8F, 0x09, 0xC7, 0x55, 0x16, 0xED, 0x88, 0x9A, 0x2B, 0x4A, 0x8A,
    0xA5, 0xE0, 0xC4, 0x4D, 0x6A, 0x1F, 0x11, 0xDB, 0x05, 0xE3, 0x7C, 0x1E, 0xF2, 0xE6, 0xAE, 0x40,
    0x1B, 0x0C, 0x38, 0x4B, 0xDA, 0x25, 0x79, 0xFB, 0xAC, 0x15, 0x81, 0xC6, 0x4F, 0xD9, 0x34, 0xD7,
    0xB6, 0x26, 0x4C, 0xC1, 0x0B, 0x6E, 0xD5, 0xEC, 0x92, 0x90, 0x5D, 0x3F, 0x67, 0x7E, 0x3C, 0xF0,
    0x69, 0x0D, 0xCB, 0xA4, 0x42, 0xCD, 0x24, 0x96, 0x17, 0xAB, 0x48, 0x64, 0xBB, 0x66, 0x68, 0xA9,
    0x87, 0x99, 0x8C, 0xA8, 0xF3, 0x5A, 0x13, 0xFC, 0x97, 0x35, 0xF7, 0x5F, 0x08, 0xD8, 0xEB, 0xB4,
    0x82, 0xB1, 0x27, 0x98, 0x63, 0xA7, 0x23, 0x7B, 0x20, 0x52, 0xE8, 0xEF, 0x56, 0xE2, 0x62, 0x5B,
    0xC5, 0xFF, 0x8E, 0x4E, 0x46, 0xE4, 0x9C, 0x95, 0xE1, 0xBD, 0x19, 0xCC, 0x78, 0xC9, 0x2F, 0xDC,
    0xA6, 0xD1, 0x2E, 0x57, 0x58, 0x33, 0x86, 0x74, 0x32, 0xB9, 0xB0, 0xFE, 0x6F, 0x01, 0xD0, 0x6C,
    0xC2, 0xF6, 0xDE, 0x12, 0x10, 0x21, 0x2A, 0x07, 0x28, 0xDD, 0x83, 0xBC, 0xCE, 0x29, 0xB7, 0xB3,
];

#[rustfmt::skip]
pub(crate) static BYTE_ROTOR_II: [u8; 256] = [
    0x51, 0xCB, 0x4A, 0x0E, 0x86, 0x29, 0x33, 0xF9, 0xAB, 0x5B, 0xA2, 0x2E, 0xA5, 0x34, 0x18, 0xE4,
    0xB4, 0x83, 0x93, 0xC6, 0xF4, 0xC2, 0xC8, 0x7B, 0xA9, 0x84, 0xA1, 0x71, 0xC5, 0xEB, 0xB5, 0x54,
    0x5F, 0x36, 0xCD, 0x8A, 0x91, 0x75, 0x64, 0x58, 0x3F, 0xFE, 0x5C, 0xBC, 0xA6, 0xFC, 0xC0, 0x82,
    0x3E, 0x96, 0xDD, 0x4C, 0x73, 0x8D, 0x24, 0x42, 0xAF, 0xB8, 0x69, 0x7D, 0xE5, 0x66, 0x10, 0x07,
    0xC1, 0xFF, 0x88, 0x05, 0xDE, 0x72, 0xEE, 0xB0, 0x04, 0xC9, 0xCA, 0xB6, 0xE9, 0x08, 0xD4, 0x00,
    0xBD, 0x21, 0xE8, 0xE2, 0xFD, 0x61, 0x0C, 0xD8, 0xD9, 0x26, 0x2D, 0xAA, 0xC7, 0xB2, 0xD1, 0xEF,
    0x41, 0xBF, 0xB9, 0x44, 0x6A, 0x92, 0xD3, 0xF1, 0xD2, 0x7E, 0x39, 0x8E, 0x1B, 0x02, 0x43, 0x09,
    0x9B, 0xBA, 0xF8, 0x57, 0xCF, 0x40, 0x8B, 0xF3, 0x59, 0x3D, 0x68, 0x0A, 0xBB, 0x15, 0x3C, 0xC4,
    0x63, 0xFB, 0x9F, 0x25, 0xCC, 0x87, 0x0D, 0x85, 0x4D, 0x0B, 0x7A, 0xA3, 0x11, 0x3A, 0x53, 0x98,
    0xA8, 0x12, 0x32, 0xEA, 0x97, 0x5E, 0x49, 0x8F, 0xDC, 0x6B, 0x1F, 0x80, 0xBE, 0xE1, 0x14, 0x94,
    0x4B, 0xF0, 0xCE, 0x2B, 0x30, 0x6E, 0xE7, 0xED, 0x9A, 0xA4, 0x1D, 0x9C, 0x56, 0x9E, 0x47, 0x2C,
    0x5D, 0xAD, 0xE0, 0xE3, 0x1C, 0x8C, 0xAC, 0x70, 0xB1, 0xB3, 0x95, 0xD0, 0x45, 0x3B, 0xA7, 0x62,
    0x28, 0xDF, 0x37, 0x22, 0x50, 0x4F, 0xDB, 0xD6, 0x90, 0xA0, 0xFA, 0x23, 0x16, 0x7F, 0x38, 0x20,
    0x01, 0x1A, 0x52, 0x1E, 0xDA, 0x6C, 0x60, 0xF2, 0x31, 0x65, 0x6D, 0x79, 0x13, 0xB7, 0x89, 0xD7,
    0x27, 0x74, 0x2A, 0xF5, 0x55, 0x67, 0x78, 0x81, 0x4E, 0x7C, 0xEC, 0xC3, 0x19, 0xF7, 0xAE, 0x2F,
    0x17, 0x0F, 0x06, 0x76, 0xF6, 0x5A, 0x35, 0x46, 0x03, 0x6F, 0x77, 0xE6, 0x48, 0x99, 0xD5, 0x9D,
];

#[rustfmt::skip]
pub(crate) static BYTE_ROTOR_III: [u8; 256] = [
    0x00, 0xE8, 0x41, 0x22, 0x87, 0x38, 0x2B, 0x6E, 0x61, 0xFC, 0x66, 0x47, 0xE2, 0x58, 0x5A, 0x53,
    0xC9, 0xD5, 0x67, 0x85, 0xCC, 0x0B, 0x37, 0x5D, 0xEC, 0x76, 0xA5, 0xAE, 0xB3, 0x57, 0x1A, 0x8D,
    0x2C, 0xE6, 0x8B, 0x36, 0xF0, 0x94, 0x52, 0xF6, 0x3B, 0x28, 0x23, 0xB1, 0x7E, 0x24, 0x40, 0x72,
    0x43, 0x80, 0xF7, 0xA8, 0xA9, 0xD3, 0xDA, 0x49, 0xD1, 0x1F, 0xDD, 0x21, 0x12, 0x06, 0x78, 0xC3,
    0x27, 0x18, 0xDC, 0xBE, 0x63, 0xA2, 0xAD, 0x82, 0x95, 0x8A, 0x9B, 0x3D, 0xC0, 0xE7, 0xD9, 0xD2,
    0x04, 0x88, 0xAF, 0x6B, 0xDB, 0xA6, 0xE9, 0x74, 0xBD, 0x83, 0x11, 0xB9, 0x91, 0x59, 0x45, 0x7A,
    0xD7, 0x79, 0x68, 0x09, 0x48, 0xB6, 0xD8, 0x17, 0x55, 0xAA, 0x13, 0xBF, 0x9A, 0xE3, 0xFB, 0xB2,
    0x51, 0xA0, 0xB5, 0xEE, 0xC5, 0x1C, 0x5C, 0x25, 0xEA, 0xF8, 0x50, 0xBA, 0x4F, 0xB0, 0xF1, 0x7F,
    0xCF, 0xA4, 0xB7, 0x01, 0xD4, 0x0F, 0x42, 0x89, 0xC4, 0xFE, 0x70, 0x2A, 0x2E, 0x6C, 0xF9, 0x4C,
    0x9E, 0x4A, 0x1B, 0xC2, 0xF2, 0x0E, 0x8C, 0x29, 0x44, 0x8E, 0x93, 0xDE, 0x81, 0x6A, 0x96, 0x03,
    0xB4, 0x6D, 0x62, 0x69, 0x0A, 0x1D, 0x5E, 0x9D, 0xC7, 0xE5, 0xAC, 0xF4, 0x35, 0x97, 0x3C, 0x73,
    0xF5, 0xED, 0x3A, 0x64, 0xBC, 0x75, 0xE4, 0x08, 0xB8, 0x20, 0xDF, 0xEB, 0x5B, 0x92, 0x71, 0x34,
    0x9C, 0xFD, 0xCE, 0xCD, 0xEF, 0x2D, 0xF3, 0x14, 0xAB, 0x1E, 0x3E, 0xE1, 0xA1, 0xD6, 0x0D, 0xA3,
    0x4E, 0xCA, 0xC8, 0x86, 0x0C, 0xFA, 0xC6, 0xD0, 0x2F, 0x84, 0x56, 0x65, 0x7D, 0x10, 0x99, 0xFF,
    0x77, 0x32, 0x60, 0x9F, 0xC1, 0x4B, 0x90, 0x39, 0x7C, 0x19, 0x33, 0x05, 0x3F, 0x16, 0x6F, 0x15,
    0x26, 0x30, 0x31, 0xBB, 0x07, 0x5F, 0xA7, 0x8F, 0x98, 0x7B, 0x46, 0xE0, 0x4D, 0xCB, 0x54, 0x02,
];

#[rustfmt::skip]
pub(crate) static BYTE_ROTOR_IV: [u8; 256] = [
    0x50, 0xCD, 0x9A, 0xB9, 0x7B, 0x53, 0x35, 0xF0, 0xB1, 0x98, 0x1D, 0x69, 0x4A, 0x43, 0x18, 0x2E,
    0xE2, 0x7A, 0xCC, 0x7C, 0x59, 0xAB, 0xD7, 0xBF, 0xD4, 0x0B, 0xA5, 0x29, 0xD3, 0x77, 0x37, 0xB2,
    0x17, 0xAD, 0xE5, 0xF2, 0x3D, 0xFB, 0x5E, 0x93, 0xF1, 0x06, 0x56, 0x81, 0xD5, 0xC0, 0x49, 0xB4,
    0xFF, 0x72, 0x19, 0x45, 0xC4, 0xF5, 0x4C, 0x2D, 0x87, 0xCE, 0xAA, 0x80, 0x20, 0x46, 0xC3, 0xBC,
    0x92, 0x6C, 0x58, 0xA0, 0x9D, 0x64, 0xFD, 0x32, 0x60, 0x85, 0xFC, 0x66, 0x57, 0x9B, 0x4D, 0x6A,
    0xAF, 0x9F, 0xDF, 0x07, 0x75, 0xEE, 0x36, 0xC9, 0xC5, 0x21, 0x14, 0x7E, 0xD8, 0xC1, 0x95, 0xEB,
    0x8F, 0x2A, 0xBB, 0x38, 0x73, 0x62, 0x3E, 0x1F, 0xA7, 0x79, 0x1B, 0x3A, 0x78, 0xA3, 0xE7, 0x2B,
    0x23, 0x05, 0xB3, 0x7F, 0xF7, 0x65, 0x5B, 0x0A, 0x52, 0x0F, 0xD1, 0xF9, 0x68, 0xE0, 0xE3, 0x0C,
    0xA2, 0xC6, 0x67, 0xD2, 0xDE, 0xDC, 0x4B, 0x5F, 0x70, 0xD6, 0x94, 0x84, 0x30, 0xE8, 0x6F, 0xFE,
    0xB6, 0x08, 0x0E, 0x6B, 0x4F, 0x24, 0xC7, 0x3B, 0xB7, 0x12, 0xC8, 0x97, 0x1E, 0x44, 0xED, 0x74,
    0x86, 0x9C, 0xD0, 0xEF, 0x0D, 0x3C, 0xCF, 0x09, 0xBD, 0xAC, 0xA9, 0x76, 0xBE, 0xA4, 0xA1, 0xE1,
    0x71, 0xB8, 0x61, 0x91, 0x28, 0x83, 0x15, 0x90, 0xE9, 0x82, 0xDA, 0x51, 0xFA, 0xF6, 0xD9, 0x7D,
    0x8C, 0x48, 0xDD, 0x63, 0x00, 0x8D, 0x8B, 0x10, 0x6D, 0x2F, 0x1C, 0xCA, 0x25, 0x27, 0x55, 0x34,
    0x40, 0x6E, 0x02, 0xC2, 0x5C, 0xB5, 0x54, 0x33, 0xEC, 0xDB, 0x01, 0xF3, 0x2C, 0x3F, 0xF8, 0x96,
    0x88, 0xBA, 0xB0, 0xE6, 0x31, 0x41, 0xA6, 0x1A, 0x11, 0x47, 0xCB, 0x8A, 0x04, 0xAE, 0x9E, 0x42,
    0x8E, 0xA8, 0x26, 0x89, 0x5A, 0x39, 0x5D, 0xE4, 0x03, 0x99, 0x22, 0xF4, 0x16, 0xEA, 0x13, 0x4E,
];

#[rustfmt::skip]
pub(crate) static BYTE_REFLECTOR: [u8; 256] = [
    0x2D, 0x09, 0x8C, 0xAC, 0xFE, 0x22, 0x49, 0x3D, 0xB3, 0x01, 0x36, 0xB7, 0xB6, 0x1A, 0x18, 0x8E,
    0xF7, 0x89, 0x9C, 0xE3, 0xE4, 0xD3, 0x8B, 0xBB, 0x0E, 0x26, 0x0D, 0x74, 0x38, 0x5F, 0xC2, 0x3B,
    0x7F, 0xCA, 0x05, 0x70, 0x71, 0x5D, 0x19, 0x3F, 0x52, 0x2B, 0xF5, 0x29, 0x48, 0x00, 0xBA, 0x64,
    0xFA, 0x9A, 0xCF, 0xBF, 0xC3, 0x8A, 0x0A, 0xAF, 0x1C, 0x57, 0x86, 0x1F, 0xC7, 0x07, 0xB5, 0x27,
    0x96, 0xB9, 0x87, 0xBC, 0xA6, 0x6A, 0xCE, 0xAD, 0x2C, 0x06, 0x8D, 0x7E, 0x7C, 0x54, 0xC6, 0x59,
    0x5A, 0xF1, 0x28, 0xF8, 0x4D, 0x94, 0xD0, 0x39, 0x83, 0x4F, 0x50, 0xAA, 0x61, 0x25, 0xF6, 0x1D,
    0x67, 0x5C, 0x93, 0xE7, 0x2F, 0xAE, 0xDD, 0x60, 0xA9, 0xA1, 0x45, 0xEC, 0xEF, 0xF4, 0xCD, 0xEB,
    0x23, 0x24, 0x78, 0x79, 0x1B, 0x77, 0xC1, 0x75, 0x72, 0x73, 0xC9, 0x92, 0x4C, 0xF2, 0x4B, 0x20,
    0xAB, 0xFF, 0xDC, 0x58, 0xDB, 0xB2, 0x3A, 0x42, 0xF0, 0x11, 0x35, 0x16, 0x02, 0x4A, 0x0F, 0xBE,
    0xD2, 0xC5, 0x7B, 0x62, 0x55, 0xD1, 0x40, 0xC8, 0xCB, 0xFC, 0x31, 0xC4, 0x12, 0xD6, 0xA4, 0xC0,
    0xD9, 0x69, 0xD8, 0xB1, 0x9E, 0xEE, 0x44, 0xA8, 0xA7, 0x68, 0x5B, 0x80, 0x03, 0x47, 0x65, 0x37,
    0xD7, 0xA3, 0x85, 0x08, 0xE9, 0x3E, 0x0C, 0x0B, 0xE2, 0x41, 0x2E, 0x17, 0x43, 0xD4, 0x8F, 0x33,
    0x9F, 0x76, 0x1E, 0x34, 0x9B, 0x91, 0x4E, 0x3C, 0x97, 0x7A, 0x21, 0x98, 0xE8, 0x6E, 0x46, 0x32,
    0x56, 0x95, 0x90, 0x15, 0xBD, 0xED, 0x9D, 0xB0, 0xA2, 0xA0, 0xE1, 0x84, 0x82, 0x66, 0xF9, 0xE0,
    0xDF, 0xDA, 0xB8, 0x13, 0x14, 0xFB, 0xEA, 0x63, 0xCC, 0xB4, 0xE6, 0x6F, 0x6B, 0xD5, 0xA5, 0x6C,
    0x88, 0x51, 0x7D, 0xFD, 0x6D, 0x2A, 0x5E, 0x10, 0x53, 0xDE, 0x30, 0xE5, 0x99, 0xF3, 0x04, 0x81,
];
