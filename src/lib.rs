/*!
 * # srtstrip
 *
 * A Rust utility that strips diacritical marks and sentence punctuation
 * from the text lines of SRT subtitle files, leaving timing and
 * sequence-number lines untouched.
 *
 * ## Features
 *
 * - Per-line classification of SRT structure (timing, sequence number, text)
 * - Unicode-correct accent stripping via canonical decomposition (NFD)
 * - Removal of `,` and `.` from subtitle text
 * - Single-pass streaming that preserves line order and terminators
 * - Interactive file selection with a fixed-path fallback
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: Line classification and the processing pass
 * - `text_normalizer`: The per-character normalization transform
 * - `file_utils`: File system operations and output-path derivation
 * - `app_controller`: Controller wiring the picker and notification sink
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod subtitle_processor;
pub mod text_normalizer;
pub mod file_utils;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use subtitle_processor::{classify, LineKind};
pub use text_normalizer::normalize;
pub use app_controller::{Controller, FilePicker, NotificationSink};
pub use errors::AppError;
