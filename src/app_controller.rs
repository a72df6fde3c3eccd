use anyhow::Result;
use log::{info, debug};
use std::path::PathBuf;

use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::subtitle_processor;

// @module: Application controller wiring the picker and sink to the core

/// Modal file-selection boundary. Yields the chosen path, or `None` when
/// the user dismisses the dialog without picking anything.
pub trait FilePicker {
    fn pick_subtitle_file(&self) -> Result<Option<PathBuf>>;
}

/// User-facing notification boundary for aggregate success/failure
/// messages.
pub trait NotificationSink {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

/// Main application controller.
///
/// Holds the single piece of mutable state, the currently selected path,
/// and exposes the two user actions: `on_select` and `on_process`.
pub struct Controller {
    picker: Box<dyn FilePicker>,
    sink: Box<dyn NotificationSink>,
    selected: Option<PathBuf>,
}

impl Controller {
    // @creates: Controller with the given collaborators and no selection
    pub fn new(picker: Box<dyn FilePicker>, sink: Box<dyn NotificationSink>) -> Self {
        Controller {
            picker,
            sink,
            selected: None,
        }
    }

    /// Currently selected input path, if any - used by tests and external
    /// consumers
    #[allow(dead_code)]
    pub fn selected_path(&self) -> Option<&PathBuf> {
        self.selected.as_ref()
    }

    /// Run the file-selection action. A dismissed dialog leaves the prior
    /// selection unchanged; a failure of the picker itself propagates.
    pub fn on_select(&mut self) -> Result<()> {
        match self.picker.pick_subtitle_file()? {
            Some(path) => {
                info!("Selected subtitle file: {}", path.display());
                self.selected = Some(path);
            }
            None => {
                debug!("File selection dismissed, keeping previous selection");
            }
        }
        Ok(())
    }

    /// Run the process-and-save action.
    ///
    /// All failures, from a missing selection to any I/O or encoding error
    /// during the pass, are caught here and reported through the sink as a
    /// single aggregate message. Nothing is retried.
    pub fn on_process(&self) {
        match self.process_selected() {
            Ok(output) => {
                self.sink.notify_success(&format!(
                    "File processed successfully. Saved as: {}",
                    output.display()
                ));
            }
            Err(e) => {
                self.sink.notify_error(&format!("An error occurred: {}", e));
            }
        }
    }

    // @processes: The selected file into its derived output path
    fn process_selected(&self) -> Result<PathBuf, AppError> {
        let input = self.selected.as_ref().ok_or(AppError::NoSelection)?;

        if !FileManager::file_exists(input) {
            return Err(AppError::InputNotFound(input.clone()));
        }

        let output = FileManager::derive_output_path(input);
        debug!("Processing {} -> {}", input.display(), output.display());

        subtitle_processor::process_file(input, &output)?;
        Ok(output)
    }
}
