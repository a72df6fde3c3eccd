// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use log::{error, info, warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum};

use crate::app_controller::{Controller, FilePicker, NotificationSink};
use crate::file_utils::FileManager;

mod app_controller;
mod errors;
mod file_utils;
mod subtitle_processor;
mod text_normalizer;

/// CLI wrapper for log level to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// srtstrip - strip accents and punctuation from SRT subtitle text
///
/// Removes diacritical marks, commas, and periods from the subtitle text
/// lines of an SRT file while leaving sequence numbers and timing lines
/// byte-for-byte untouched. The result is written next to the input as
/// `<name>_processed.<ext>`.
#[derive(Parser, Debug)]
#[command(name = "srtstrip")]
#[command(version = "1.0.0")]
#[command(about = "Strip accents and punctuation from SRT subtitle text")]
#[command(long_about = "srtstrip removes diacritical marks, commas, and periods from the
subtitle text lines of an SRT file. Timing lines and sequence numbers are
copied through unchanged, so playback timing is never affected.

EXAMPLES:
    srtstrip movie.srt          # Process a specific file
    srtstrip                    # Pick a file interactively
    srtstrip -l debug movie.srt # Process with debug logging")]
struct CommandLineOptions {
    /// Input subtitle file; when omitted, an interactive picker is shown
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    // Filter against the global max level so later calls to
    // log::set_max_level take effect
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Picker that returns a path supplied up front on the command line
struct FixedPathPicker {
    path: PathBuf,
}

impl FilePicker for FixedPathPicker {
    fn pick_subtitle_file(&self) -> Result<Option<PathBuf>> {
        Ok(Some(self.path.clone()))
    }
}

/// Interactive terminal picker.
///
/// Offers the `.srt` files found under the working directory as numbered
/// suggestions, and falls back to free-form path entry so any file can be
/// chosen. An empty answer dismisses the picker without a selection.
struct TerminalFilePicker;

/// Collect `.srt` suggestions under a directory, degrading to an empty
/// list (free-form entry only) if discovery fails.
fn discover_srt_suggestions(dir: &Path) -> Vec<PathBuf> {
    match FileManager::find_files(dir, "srt") {
        Ok(files) => files,
        Err(e) => {
            warn!("Failed to scan {} for subtitle files: {}", dir.display(), e);
            Vec::new()
        }
    }
}

impl FilePicker for TerminalFilePicker {
    fn pick_subtitle_file(&self) -> Result<Option<PathBuf>> {
        let suggestions = discover_srt_suggestions(Path::new("."));

        let mut stdout = std::io::stdout();
        writeln!(stdout, "Select an SRT file:")?;
        for (i, path) in suggestions.iter().enumerate() {
            writeln!(stdout, "  [{}] {}", i + 1, path.display())?;
        }
        write!(stdout, "Enter a number or a path (empty to cancel): ")?;
        stdout.flush()?;

        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;
        let answer = answer.trim();

        if answer.is_empty() {
            return Ok(None);
        }

        if let Ok(index) = answer.parse::<usize>() {
            if index >= 1 && index <= suggestions.len() {
                return Ok(Some(suggestions[index - 1].clone()));
            }
        }

        Ok(Some(PathBuf::from(answer)))
    }
}

/// Notification sink backed by the application logger
struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify_success(&self, message: &str) {
        info!("{}", message);
    }

    fn notify_error(&self, message: &str) {
        error!("{}", message);
    }
}

fn main() -> Result<()> {
    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Initialize the logger once, at the level requested on the command
    // line (info by default)
    let log_level = cli
        .log_level
        .clone()
        .map(LevelFilter::from)
        .unwrap_or(LevelFilter::Info);
    CustomLogger::init(log_level)?;

    let picker: Box<dyn FilePicker> = match cli.input_path {
        Some(path) => Box::new(FixedPathPicker { path }),
        None => Box::new(TerminalFilePicker),
    };

    let mut controller = Controller::new(picker, Box::new(LogNotificationSink));

    // The two user actions, in sequence: select, then process-and-save.
    controller.on_select()?;
    controller.on_process();

    Ok(())
}
