//! Chunked translation of byte streams with progress reporting.

use std::io::{self, Read, Seek, SeekFrom, Write};

use tracing::debug;

use crate::config::StreamConfig;
use crate::error::EnigmaError;
use crate::machine::Machine;

/// Bytes read per chunk unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 128;

/// Byte counts of a finished stream translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamReport {
    /// Bytes read from the input.
    pub bytes_in: u64,
    /// Bytes written to the output, grouping spaces included.
    pub bytes_out: u64,
}

/// Drives a [`Machine`] over a reader, chunk by chunk.
///
/// Each chunk goes through [`Machine::translate_chunk`], so mode rules and
/// rotor stepping are exactly those of the in-memory path. The machine keeps
/// its state afterwards; translating a second stream continues where the
/// first left off.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use enigma_machine::{Machine, Mode, StreamTranslator};
///
/// let mut machine = Machine::from_specs(Mode::Classic, &["AB", "CD"], &["enig3:B", "enig2:A", "enig1:A"], "ref-b").unwrap();
/// let mut output = Vec::new();
/// let mut calls = Vec::new();
/// let mut progress = |done: u64, total: u64| calls.push((done, total));
///
/// StreamTranslator::new(&mut machine)
///     .with_chunk_size(4).unwrap()
///     .with_grouping(5).unwrap()
///     .translate(Cursor::new("HELLO WORLD"), &mut output, Some(&mut progress))
///     .unwrap();
///
/// assert_eq!(output, b"ILACB BMTBE ");
/// assert_eq!(calls, vec![(0, 11), (4, 11), (8, 11), (11, 11)]);
/// ```
pub struct StreamTranslator<'m> {
    machine: &'m mut Machine,
    chunk_size: usize,
    group: Option<usize>,
}

impl<'m> StreamTranslator<'m> {
    /// Wraps a machine with the default chunk size and no grouping.
    pub fn new(machine: &'m mut Machine) -> Self {
        StreamTranslator {
            machine,
            chunk_size: DEFAULT_CHUNK_SIZE,
            group: None,
        }
    }

    /// Wraps a machine with the options of a [`StreamConfig`].
    ///
    /// # Errors
    /// As [`with_chunk_size`](Self::with_chunk_size) and
    /// [`with_grouping`](Self::with_grouping).
    pub fn from_config(
        machine: &'m mut Machine,
        config: &StreamConfig,
    ) -> Result<Self, EnigmaError> {
        let translator = Self::new(machine).with_chunk_size(config.chunk_size)?;
        match config.group {
            Some(group) => translator.with_grouping(group),
            None => Ok(translator),
        }
    }

    /// Sets the number of bytes read per chunk.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] for a zero size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Result<Self, EnigmaError> {
        if chunk_size == 0 {
            return Err(EnigmaError::Configuration(
                "chunk size must be at least 1".to_string(),
            ));
        }
        self.chunk_size = chunk_size;
        Ok(self)
    }

    /// Inserts a space after every `group` emitted letters.
    ///
    /// # Errors
    /// - [`EnigmaError::Configuration`] for a zero group size.
    /// - [`EnigmaError::ModeMismatch`] unless the machine runs a mode whose
    ///   output is letters only.
    pub fn with_grouping(mut self, group: usize) -> Result<Self, EnigmaError> {
        if group == 0 {
            return Err(EnigmaError::Configuration(
                "group size must be at least 1".to_string(),
            ));
        }
        let mode = self.machine.mode();
        if !mode.is_letters_only() {
            return Err(EnigmaError::ModeMismatch(format!(
                "output grouping needs letter-only output, not {} mode",
                mode
            )));
        }
        self.group = Some(group);
        Ok(self)
    }

    /// Translates a seekable input, measuring its length first.
    ///
    /// The total passed to `progress` is the number of bytes from the
    /// reader's current position to its end. `progress` is called once with
    /// zero before reading, then after every chunk with the cumulative count.
    ///
    /// # Errors
    /// - [`EnigmaError::Io`] for read, seek or write failures.
    /// - [`EnigmaError::InvalidSymbol`] in strict mode; output of earlier
    ///   chunks has already been written.
    pub fn translate<R: Read + Seek, W: Write>(
        &mut self,
        mut input: R,
        output: W,
        progress: Option<&mut dyn FnMut(u64, u64)>,
    ) -> Result<StreamReport, EnigmaError> {
        let start = input.stream_position()?;
        let end = input.seek(SeekFrom::End(0))?;
        input.seek(SeekFrom::Start(start))?;
        self.translate_sized(input, output, end.saturating_sub(start), progress)
    }

    /// Translates an input whose length the caller already knows.
    ///
    /// `total` is only reported to `progress`; reading always runs to end
    /// of input.
    ///
    /// # Errors
    /// As [`translate`](Self::translate).
    pub fn translate_sized<R: Read, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        total: u64,
        mut progress: Option<&mut dyn FnMut(u64, u64)>,
    ) -> Result<StreamReport, EnigmaError> {
        let mut buffer = vec![0u8; self.chunk_size];
        let mut report = StreamReport::default();
        let mut emitted = 0usize;

        if let Some(report_progress) = progress.as_mut() {
            report_progress(0, total);
        }

        loop {
            let filled = read_chunk(&mut input, &mut buffer)?;
            if filled == 0 {
                break;
            }
            let translated = self.machine.translate_chunk(&buffer[..filled])?;
            let written = match self.group {
                Some(group) => {
                    let grouped = insert_spaces(&translated, group, &mut emitted);
                    output.write_all(&grouped)?;
                    grouped.len()
                }
                None => {
                    output.write_all(&translated)?;
                    translated.len()
                }
            };
            report.bytes_in += filled as u64;
            report.bytes_out += written as u64;

            if let Some(report_progress) = progress.as_mut() {
                report_progress(report.bytes_in, total);
            }
        }
        output.flush()?;

        debug!(
            bytes_in = report.bytes_in,
            bytes_out = report.bytes_out,
            chunk_size = self.chunk_size,
            "stream translated"
        );
        Ok(report)
    }
}

/// Fills `buffer` as far as the reader allows.
///
/// Short reads are retried until the buffer is full or the reader reports
/// end of input.
fn read_chunk<R: Read>(input: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match input.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Copies `letters`, adding a space after every `group` of them.
///
/// `emitted` carries the count across chunk boundaries.
fn insert_spaces(letters: &[u8], group: usize, emitted: &mut usize) -> Vec<u8> {
    let mut grouped = Vec::with_capacity(letters.len() + letters.len() / group + 1);
    for &letter in letters {
        grouped.push(letter);
        *emitted += 1;
        if *emitted % group == 0 {
            grouped.push(b' ');
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;
    use std::io::Cursor;

    const NO_PLUGS: [&str; 0] = [];

    fn machine(mode: Mode) -> Machine {
        Machine::from_specs(mode, &NO_PLUGS, &["com1", "com2", "com3"], "ref-b").unwrap()
    }

    /// Reader that hands out at most three bytes per call and is
    /// interrupted once.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        interrupted: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            let n = buf.len().min(3).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn test_matches_in_memory_translation() {
        let text = b"THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG".repeat(9);
        let expected = machine(Mode::Classic).translate_chunk(&text).unwrap();

        let mut m = machine(Mode::Classic);
        let mut output = Vec::new();
        let report = StreamTranslator::new(&mut m)
            .with_chunk_size(7)
            .unwrap()
            .translate(Cursor::new(&text), &mut output, None)
            .unwrap();
        assert_eq!(output, expected);
        assert_eq!(report.bytes_in, text.len() as u64);
        assert_eq!(report.bytes_out, expected.len() as u64);
    }

    #[test]
    fn test_progress_reports_consumed_bytes() {
        let mut m = machine(Mode::Modern);
        let mut calls = Vec::new();
        let mut progress = |done: u64, total: u64| calls.push((done, total));
        let input = Cursor::new(vec![b'A'; 300]);
        StreamTranslator::new(&mut m)
            .with_chunk_size(128)
            .unwrap()
            .translate(input, io::sink(), Some(&mut progress))
            .unwrap();
        assert_eq!(calls, vec![(0, 300), (128, 300), (256, 300), (300, 300)]);
    }

    #[test]
    fn test_total_counts_from_current_position() {
        let mut m = machine(Mode::Classic);
        let mut input = Cursor::new(b"XXXXXABCDE".to_vec());
        input.set_position(5);
        let mut totals = Vec::new();
        let mut progress = |_done: u64, total: u64| totals.push(total);
        let mut output = Vec::new();
        StreamTranslator::new(&mut m)
            .translate(&mut input, &mut output, Some(&mut progress))
            .unwrap();
        assert!(totals.iter().all(|&t| t == 5));
        assert_eq!(output.len(), 5);
    }

    #[test]
    fn test_empty_input() {
        let mut m = machine(Mode::Classic);
        let mut calls = Vec::new();
        let mut progress = |done: u64, total: u64| calls.push((done, total));
        let input = Cursor::new(Vec::<u8>::new());
        let report = StreamTranslator::new(&mut m)
            .translate(input, io::sink(), Some(&mut progress))
            .unwrap();
        assert_eq!(report, StreamReport::default());
        assert_eq!(calls, vec![(0, 0)]);
    }

    #[test]
    fn test_short_reads_and_interrupts() {
        let text = b"ATTACKATDAWNATTACKATDAWN".to_vec();
        let expected = machine(Mode::Classic).translate_chunk(&text).unwrap();

        let mut m = machine(Mode::Classic);
        let mut output = Vec::new();
        let reader = Trickle {
            data: text.clone(),
            pos: 0,
            interrupted: false,
        };
        StreamTranslator::new(&mut m)
            .with_chunk_size(10)
            .unwrap()
            .translate_sized(reader, &mut output, text.len() as u64, None)
            .unwrap();
        assert_eq!(output, expected);
    }

    #[test]
    fn test_grouping_spans_chunks() {
        let mut m = machine(Mode::Classic);
        let mut output = Vec::new();
        StreamTranslator::new(&mut m)
            .with_chunk_size(3)
            .unwrap()
            .with_grouping(4)
            .unwrap()
            .translate(Cursor::new("AAAAAAAAAA"), &mut output, None)
            .unwrap();
        let text = String::from_utf8(output).unwrap();
        let lengths: Vec<usize> = text.split(' ').map(str::len).collect();
        assert_eq!(lengths, vec![4, 4, 2]);
    }

    #[test]
    fn test_grouping_restarts_per_stream() {
        let mut m = machine(Mode::Classic);
        let mut translator = StreamTranslator::new(&mut m).with_grouping(5).unwrap();
        let mut first = Vec::new();
        let mut second = Vec::new();
        translator
            .translate(Cursor::new("AAA"), &mut first, None)
            .unwrap();
        translator
            .translate(Cursor::new("AAAAA"), &mut second, None)
            .unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 6);
        assert_eq!(second[5], b' ');
    }

    #[test]
    fn test_grouping_rejected_for_modern_and_byte() {
        for mode in [Mode::Modern, Mode::Byte] {
            let mut m = if mode == Mode::Byte {
                Machine::from_specs(mode, &NO_PLUGS, &["byte1"], "byte-ref").unwrap()
            } else {
                machine(mode)
            };
            assert!(matches!(
                StreamTranslator::new(&mut m).with_grouping(5),
                Err(EnigmaError::ModeMismatch(_))
            ));
        }
    }

    #[test]
    fn test_zero_sizes_rejected() {
        let mut m = machine(Mode::Classic);
        assert!(matches!(
            StreamTranslator::new(&mut m).with_chunk_size(0),
            Err(EnigmaError::Configuration(_))
        ));
        assert!(matches!(
            StreamTranslator::new(&mut m).with_grouping(0),
            Err(EnigmaError::Configuration(_))
        ));
    }

    #[test]
    fn test_strict_mode_stops_at_bad_chunk() {
        let mut m = machine(Mode::Strict);
        let mut output = Vec::new();
        let err = StreamTranslator::new(&mut m)
            .with_chunk_size(4)
            .unwrap()
            .translate(Cursor::new("ABCDEF1H"), &mut output, None)
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid symbol 0x31 at position 2");
        assert_eq!(output.len(), 4);
        assert_eq!(m.positions()[0], 4);
    }

    #[test]
    fn test_from_config() {
        let mut m = machine(Mode::Classic);
        let config = StreamConfig {
            chunk_size: 2,
            group: Some(2),
        };
        let mut output = Vec::new();
        StreamTranslator::from_config(&mut m, &config)
            .unwrap()
            .translate(Cursor::new("AAAA"), &mut output, None)
            .unwrap();
        assert_eq!(output.len(), 6);
    }
}
