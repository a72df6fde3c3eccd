use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use anyhow::{Result, Context};
use log::debug;

use crate::text_normalizer;

// @module: SRT line classification and single-pass processing

/// Structural kind of a single SRT line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A timing line containing the `-->` separator
    Timing,
    /// A bare cue sequence number
    SequenceNumber,
    /// Subtitle text or a blank separator line
    Content,
}

/// Classify one line of an SRT file.
///
/// The timing check runs first, so a line containing `-->` is `Timing`
/// regardless of what else it holds. A line whose trimmed form is non-empty
/// and all ASCII digits is a `SequenceNumber`. Everything else, blank lines
/// included, is `Content`. The line may or may not carry its terminator;
/// trimming makes the result independent of that.
pub fn classify(line: &str) -> LineKind {
    if line.contains("-->") {
        return LineKind::Timing;
    }

    let stripped = line.trim();
    if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
        LineKind::SequenceNumber
    } else {
        LineKind::Content
    }
}

/// Iterator over the lines of a string, each yielded with its terminator
/// intact (`\n` or `\r\n`), so the output pass can reproduce the input's
/// line-ending convention byte for byte.
#[allow(dead_code)]
pub struct LinesWithTerminator<'a> {
    rest: &'a str,
}

/// Split content into lines without discarding terminators - used by the
/// in-memory pass, tests, and benches
#[allow(dead_code)]
pub fn lines_with_terminator(content: &str) -> LinesWithTerminator<'_> {
    LinesWithTerminator { rest: content }
}

impl<'a> Iterator for LinesWithTerminator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find('\n') {
            Some(idx) => {
                let (line, rest) = self.rest.split_at(idx + 1);
                self.rest = rest;
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Process one line: structural lines pass through untouched, content
/// lines go through the normalizer.
pub fn process_line(line: &str) -> String {
    match classify(line) {
        LineKind::Timing | LineKind::SequenceNumber => line.to_string(),
        LineKind::Content => text_normalizer::normalize(line),
    }
}

/// Process a complete SRT document held in memory - used by tests and
/// benches; the file path streams instead
#[allow(dead_code)]
pub fn process_srt_string(content: &str) -> String {
    let mut output = String::with_capacity(content.len());
    for line in lines_with_terminator(content) {
        output.push_str(&process_line(line));
    }
    output
}

/// Stream an SRT document from a reader to a writer, one line at a time.
///
/// Lines are read with their terminators, classified, and written in the
/// original order; only content lines are altered. Any read, decode, or
/// write failure aborts the pass and propagates to the caller.
pub fn process_reader<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<()> {
    let mut line = String::new();
    let mut line_count = 0usize;

    loop {
        line.clear();
        let bytes = reader.read_line(&mut line)
            .context("Failed to read input line")?;
        if bytes == 0 {
            break;
        }
        line_count += 1;

        writer.write_all(process_line(&line).as_bytes())
            .context("Failed to write output line")?;
    }

    writer.flush().context("Failed to flush output")?;
    debug!("Processed {} lines", line_count);
    Ok(())
}

/// Process an SRT file on disk into a new output file.
///
/// Both handles are scoped to this call: the input reader and the output
/// writer are released when the pass completes or fails. On failure,
/// whatever was already written stays on disk; there is no rollback.
pub fn process_file<P1: AsRef<Path>, P2: AsRef<Path>>(input: P1, output: P2) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let reader = BufReader::new(File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?);
    let writer = BufWriter::new(File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?);

    process_reader(reader, writer)
        .with_context(|| format!("Failed while processing: {}", input.display()))
}
