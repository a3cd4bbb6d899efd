// src/data_types.rs
use std::path::PathBuf;

use crate::decoder;
use crate::error::{Error, Result};

/// A file chosen through the platform picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub path: PathBuf,
    pub declared_type: String,
}

/// One tab of a workbook, as display text.
///
/// Rows cover the sheet's used range only and are rectangular. `origin` is
/// the zero-based `(row, column)` of the top-left cell in the source sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub origin: (u32, u32),
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Sheet::with_origin(name, (0, 0), rows)
    }

    pub fn with_origin(
        name: impl Into<String>,
        origin: (u32, u32),
        mut rows: Vec<Vec<String>>,
    ) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Sheet {
            name: name.into(),
            origin,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbook {
    /// Sheets in declaration order.
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn into_first_sheet(self) -> Result<Sheet> {
        self.sheets.into_iter().next().ok_or(Error::EmptyWorkbook)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSpreadsheet {
    /// Complete HTML document for the embedded browser.
    pub document: String,
    /// The sheet the document was built from.
    pub sheet: Sheet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub data_uri: String,
}

impl RenderedImage {
    pub fn new(mime: &str, base64_payload: &str) -> Self {
        RenderedImage {
            data_uri: decoder::data_uri(mime, base64_payload),
        }
    }

    pub fn mime(&self) -> Option<&str> {
        decoder::split_data_uri(&self.data_uri).map(|(mime, _)| mime)
    }

    /// Raw image bytes for widgets that cannot consume a data URI.
    pub fn payload_bytes(&self) -> Result<Vec<u8>> {
        let (_, payload) = decoder::split_data_uri(&self.data_uri)
            .ok_or_else(|| Error::Parse("not a base64 data URI".to_string()))?;
        decoder::decode(payload)
    }
}

/// What the display surface currently shows. Exactly one variant at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    Empty,
    Spreadsheet(RenderedSpreadsheet),
    Image(RenderedImage),
}

impl DisplayState {
    pub fn show_spreadsheet(&mut self, spreadsheet: RenderedSpreadsheet) {
        *self = DisplayState::Spreadsheet(spreadsheet);
    }

    pub fn show_image(&mut self, image: RenderedImage) {
        *self = DisplayState::Image(image);
    }

    pub fn spreadsheet(&self) -> Option<&RenderedSpreadsheet> {
        match self {
            DisplayState::Spreadsheet(spreadsheet) => Some(spreadsheet),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<&RenderedImage> {
        match self {
            DisplayState::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayState::Empty)
    }
}
