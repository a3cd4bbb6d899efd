// src/session.rs
//! The display surface state machine and the dialogs each action ends with.
//!
//! ```text
//! Empty ──import ok──▶ Spreadsheet ◀──import ok── Image
//! Empty ──attach ok──▶ Image       ◀──attach ok── Spreadsheet
//! ```
//! A failed or canceled action never changes the state.

use tracing::{debug, error, info, warn};

use crate::bridge::BridgeMessage;
use crate::data_types::{DisplayState, RenderedImage, RenderedSpreadsheet};
use crate::error::{Error, Result};

pub const EMPTY_PROMPT: &str = "Kindly upload spreadsheet or image attachment.";
pub const DEFAULT_EXPORT_LIMIT: usize = 1000;

/// Text shown after a previous display could not be drawn.
pub const DISPLAY_FAILURE: &str = "An error occurred while loading content.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ImportSpreadsheet,
    AddAttachment,
    ExportSpreadsheet,
}

impl Action {
    pub const ALL: [Action; 3] = [
        Action::ImportSpreadsheet,
        Action::AddAttachment,
        Action::ExportSpreadsheet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::ImportSpreadsheet => "Import Spreadsheet",
            Action::AddAttachment => "Add Attachment",
            Action::ExportSpreadsheet => "Export Spreadsheet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub body: String,
}

impl Dialog {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Dialog {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn display_failure() -> Self {
        Dialog::new("Display Error", DISPLAY_FAILURE)
    }
}

/// Truncated image data URI, or [`Error::NoDataAvailable`].
pub type ExportResult = Result<String>;

#[derive(Debug, Clone)]
pub struct Session {
    display: DisplayState,
    export_limit: usize,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(DEFAULT_EXPORT_LIMIT)
    }
}

impl Session {
    pub fn new(export_limit: usize) -> Self {
        Session {
            display: DisplayState::Empty,
            export_limit,
        }
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Prompt for the empty surface, `None` once something is shown.
    pub fn prompt(&self) -> Option<&'static str> {
        self.display.is_empty().then_some(EMPTY_PROMPT)
    }

    pub fn complete_import(&mut self, outcome: Result<RenderedSpreadsheet>) -> Option<Dialog> {
        match outcome {
            Ok(spreadsheet) => {
                info!(
                    sheet = %spreadsheet.sheet.name,
                    rows = spreadsheet.sheet.rows.len(),
                    "spreadsheet imported"
                );
                self.display.show_spreadsheet(spreadsheet);
                Some(Dialog::new("Success", "Spreadsheet imported successfully."))
            }
            Err(err) if err.is_canceled() => {
                debug!("user canceled spreadsheet picker");
                None
            }
            Err(err) => {
                error!(error = %err, "error importing spreadsheet");
                Some(Dialog::new("Error", "An error occurred while picking the file."))
            }
        }
    }

    pub fn complete_attachment(&mut self, outcome: Result<RenderedImage>) -> Option<Dialog> {
        match outcome {
            Ok(image) => {
                info!(
                    mime = image.mime().unwrap_or("unknown"),
                    len = image.data_uri.len(),
                    "image attachment added"
                );
                self.display.show_image(image);
                Some(Dialog::new("Success", "Image attachment added successfully."))
            }
            Err(err) if err.is_canceled() => {
                debug!("user canceled attachment picker");
                None
            }
            Err(err) => {
                error!(error = %err, "error adding attachment");
                Some(Dialog::new(
                    "Error",
                    "An error occurred while adding the attachment.",
                ))
            }
        }
    }

    /// Reads only the image slot. A shown spreadsheet is never exported.
    pub fn export_current(&self) -> ExportResult {
        let image = self.display.image().ok_or(Error::NoDataAvailable)?;
        Ok(image.data_uri.chars().take(self.export_limit).collect())
    }

    pub fn export_dialog(&self) -> Dialog {
        match self.export_current() {
            Ok(preview) => {
                info!(chars = preview.chars().count(), "export preview shown");
                Dialog::new(
                    "Export Success",
                    format!("Spreadsheet exported successfully.\n\nBase64 Data:\n{preview}"),
                )
            }
            Err(err) => {
                warn!("export requested with nothing to export");
                Dialog::new("Error", err.to_string())
            }
        }
    }

    /// Handles a message posted by the spreadsheet document. Never touches
    /// the display state.
    pub fn receive_bridge_message(&self, raw: &str) -> Result<BridgeMessage> {
        let message = BridgeMessage::parse(raw).map_err(|err| {
            error!(error = %err, "unreadable message from spreadsheet document");
            err
        })?;
        debug!(?message, "message from spreadsheet document");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::Sheet;
    use std::io;

    fn spreadsheet() -> RenderedSpreadsheet {
        RenderedSpreadsheet {
            document: "<html></html>".to_string(),
            sheet: Sheet::new("Sheet1", vec![vec!["Name".to_string()]]),
        }
    }

    fn image(len: usize) -> RenderedImage {
        RenderedImage::new("image/png", &"A".repeat(len))
    }

    #[test]
    fn starts_empty_with_prompt_and_three_actions() {
        let session = Session::default();
        assert!(session.display().is_empty());
        assert_eq!(session.prompt(), Some(EMPTY_PROMPT));
        let labels: Vec<_> = Action::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            ["Import Spreadsheet", "Add Attachment", "Export Spreadsheet"]
        );
    }

    #[test]
    fn import_replaces_image() {
        let mut session = Session::default();
        session.complete_attachment(Ok(image(10)));

        let dialog = session.complete_import(Ok(spreadsheet())).unwrap();
        assert_eq!(dialog.body, "Spreadsheet imported successfully.");
        assert!(session.display().spreadsheet().is_some());
        assert!(session.display().image().is_none());
        assert_eq!(session.prompt(), None);
    }

    #[test]
    fn attachment_replaces_spreadsheet() {
        let mut session = Session::default();
        session.complete_import(Ok(spreadsheet()));

        let dialog = session.complete_attachment(Ok(image(10))).unwrap();
        assert_eq!(dialog.body, "Image attachment added successfully.");
        assert!(session.display().image().is_some());
        assert!(session.display().spreadsheet().is_none());
    }

    #[test]
    fn cancel_is_silent_and_keeps_state() {
        let mut session = Session::default();
        session.complete_import(Ok(spreadsheet()));
        let before = session.display().clone();

        assert_eq!(session.complete_import(Err(Error::Canceled)), None);
        assert_eq!(session.complete_attachment(Err(Error::Canceled)), None);
        assert_eq!(session.display(), &before);
    }

    #[test]
    fn failure_shows_error_and_keeps_state() {
        let mut session = Session::default();
        session.complete_attachment(Ok(image(4)));
        let before = session.display().clone();

        let err = Error::io("book.xlsx", io::Error::from(io::ErrorKind::NotFound));
        let dialog = session.complete_import(Err(err)).unwrap();
        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.body, "An error occurred while picking the file.");

        let dialog = session
            .complete_attachment(Err(Error::Parse("bad".into())))
            .unwrap();
        assert_eq!(dialog.title, "Error");
        assert_eq!(session.display(), &before);
    }

    #[test]
    fn export_without_image_reports_no_data() {
        let session = Session::default();
        assert!(matches!(session.export_current(), Err(Error::NoDataAvailable)));
        let dialog = session.export_dialog();
        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.body, "No data available for export.");
    }

    #[test]
    fn export_ignores_a_shown_spreadsheet() {
        let mut session = Session::default();
        session.complete_import(Ok(spreadsheet()));
        assert!(matches!(session.export_current(), Err(Error::NoDataAvailable)));
    }

    #[test]
    fn export_truncates_to_limit() {
        let mut session = Session::default();
        session.complete_attachment(Ok(image(5000)));
        let exported = session.export_current().unwrap();
        assert_eq!(exported.len(), 1000);
        assert!(exported.starts_with("data:image/png;base64,AAAA"));

        let dialog = session.export_dialog();
        assert_eq!(dialog.title, "Export Success");
        assert!(dialog
            .body
            .starts_with("Spreadsheet exported successfully.\n\nBase64 Data:\ndata:image/png"));
    }

    #[test]
    fn export_limit_counts_characters() {
        let mut session = Session::new(10);
        session.complete_attachment(Ok(RenderedImage {
            data_uri: "é".repeat(13),
        }));
        let exported = session.export_current().unwrap();
        assert_eq!(exported, "é".repeat(10));
        assert_eq!(exported.len(), 20);
        assert!(session.export_dialog().body.ends_with(&exported));
    }

    #[test]
    fn short_export_is_unchanged() {
        let mut session = Session::default();
        let small = image(8);
        session.complete_attachment(Ok(small.clone()));
        assert_eq!(session.export_current().unwrap(), small.data_uri);
    }

    #[test]
    fn bridge_messages_do_not_touch_display() {
        let mut session = Session::default();
        session.complete_attachment(Ok(image(8)));
        let before = session.display().clone();

        assert_eq!(
            session.receive_bridge_message("SpreadJS initialized").unwrap(),
            BridgeMessage::Initialized
        );
        assert!(session.receive_bridge_message("export:!!").is_err());
        assert_eq!(session.display(), &before);
    }
}
