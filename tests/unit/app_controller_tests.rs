/*!
 * Tests for the controller and its collaborator boundaries
 */

use anyhow::Result;
use srtstrip::app_controller::Controller;
use crate::common;
use crate::common::mock_collaborators::{
    FailingFilePicker, MockFilePicker, Notification, RecordingSink,
};

/// Selecting a file records it as the current selection
#[test]
fn test_on_select_withPickedFile_shouldUpdateSelection() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_subtitle(&dir, "movie.srt")?;

    let sink = RecordingSink::new();
    let mut controller = Controller::new(
        Box::new(MockFilePicker::returning(input.clone())),
        Box::new(sink),
    );

    controller.on_select()?;
    assert_eq!(controller.selected_path(), Some(&input));
    Ok(())
}

/// A dismissed picker leaves the prior selection unchanged
#[test]
fn test_on_select_withDismissedPicker_shouldKeepPriorSelection() -> Result<()> {
    let sink = RecordingSink::new();
    let mut controller = Controller::new(Box::new(MockFilePicker::dismissed()), Box::new(sink));

    controller.on_select()?;
    assert_eq!(controller.selected_path(), None);
    Ok(())
}

/// A picker failure propagates instead of being swallowed
#[test]
fn test_on_select_withFailingPicker_shouldPropagateError() {
    let sink = RecordingSink::new();
    let mut controller = Controller::new(Box::new(FailingFilePicker), Box::new(sink));

    assert!(controller.on_select().is_err());
}

/// Processing without a selection reports one error and touches nothing
#[test]
fn test_on_process_withNoSelection_shouldNotifyError() {
    let sink = RecordingSink::new();
    let controller = Controller::new(Box::new(MockFilePicker::dismissed()), Box::new(sink.clone()));

    controller.on_process();

    let notifications = sink.notifications();
    assert_eq!(notifications.len(), 1);
    match &notifications[0] {
        Notification::Error(msg) => assert!(msg.contains("No subtitle file selected")),
        other => panic!("expected error notification, got {:?}", other),
    }
}

/// Processing a selection that vanished reports an error before any I/O
#[test]
fn test_on_process_withVanishedSelection_shouldNotifyError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_subtitle(&dir, "movie.srt")?;

    let sink = RecordingSink::new();
    let mut controller = Controller::new(
        Box::new(MockFilePicker::returning(input.clone())),
        Box::new(sink.clone()),
    );
    controller.on_select()?;

    // Remove the file between selection and processing
    std::fs::remove_file(&input)?;
    controller.on_process();

    let notifications = sink.notifications();
    assert_eq!(notifications.len(), 1);
    assert!(matches!(notifications[0], Notification::Error(_)));
    // No partial output was created
    assert!(!dir.join("movie_processed.srt").exists());
    Ok(())
}

/// The happy path writes the output file and reports success naming it
#[test]
fn test_on_process_withValidSelection_shouldWriteOutputAndNotifySuccess() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_subtitle(&dir, "movie.srt")?;
    let expected_output = dir.join("movie_processed.srt");

    let sink = RecordingSink::new();
    let mut controller = Controller::new(
        Box::new(MockFilePicker::returning(input)),
        Box::new(sink.clone()),
    );

    controller.on_select()?;
    controller.on_process();

    let notifications = sink.notifications();
    assert_eq!(notifications.len(), 1);
    match &notifications[0] {
        Notification::Success(msg) => {
            assert!(msg.contains(&expected_output.display().to_string()));
        }
        other => panic!("expected success notification, got {:?}", other),
    }

    let processed = std::fs::read_to_string(&expected_output)?;
    assert!(processed.contains("Καλημερα κοσμε\n"));
    assert!(processed.contains("00:00:05,000 --> 00:00:09,000\n"));
    Ok(())
}

/// Re-running the process action is independent of the previous run
#[test]
fn test_on_process_withRepeatedInvocation_shouldSucceedEachTime() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_subtitle(&dir, "movie.srt")?;

    let sink = RecordingSink::new();
    let mut controller = Controller::new(
        Box::new(MockFilePicker::returning(input)),
        Box::new(sink.clone()),
    );

    controller.on_select()?;
    controller.on_process();
    controller.on_process();

    let notifications = sink.notifications();
    assert_eq!(notifications.len(), 2);
    assert!(notifications
        .iter()
        .all(|n| matches!(n, Notification::Success(_))));
    Ok(())
}
