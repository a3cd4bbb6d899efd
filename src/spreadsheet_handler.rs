// src/spreadsheet_handler.rs
use std::path::Path;
use std::sync::Arc;

use tokio::task;

use crate::data_types::RenderedSpreadsheet;
use crate::decoder;
use crate::error::{Error, Result};
use crate::files::FileSource;
use crate::html::{bootstrap_document, sheet_to_html_table, TableOptions};
use crate::picker::{FilePicker, PickKind};
use crate::workbook::parse_workbook;

/// Pick → read → decode → parse → render.
#[derive(Clone)]
pub struct SpreadsheetHandler {
    picker: Arc<dyn FilePicker>,
    files: Arc<dyn FileSource>,
    options: TableOptions,
    widget_script_url: String,
}

impl SpreadsheetHandler {
    pub fn new(
        picker: Arc<dyn FilePicker>,
        files: Arc<dyn FileSource>,
        widget_script_url: impl Into<String>,
    ) -> Self {
        SpreadsheetHandler {
            picker,
            files,
            options: TableOptions::default(),
            widget_script_url: widget_script_url.into(),
        }
    }

    pub async fn import(&self) -> Result<RenderedSpreadsheet> {
        let picked = self
            .picker
            .pick_file(PickKind::Spreadsheet)
            .await?
            .ok_or(Error::Canceled)?;
        self.import_path(&picked.path).await
    }

    pub async fn import_path(&self, path: &Path) -> Result<RenderedSpreadsheet> {
        let encoded = self.files.read_base64(path).await?;
        let bytes = decoder::decode(&encoded)?;

        let options = self.options.clone();
        let url = self.widget_script_url.clone();
        task::spawn_blocking(move || render_workbook(bytes, &options, &url))
            .await
            .map_err(|e| Error::Parse(e.to_string()))?
    }
}

/// Renders the first sheet of a workbook into the embeddable document.
pub fn render_workbook(
    bytes: Vec<u8>,
    options: &TableOptions,
    widget_script_url: &str,
) -> Result<RenderedSpreadsheet> {
    let sheet = parse_workbook(bytes)?.into_first_sheet()?;
    let table = sheet_to_html_table(&sheet, options);
    Ok(RenderedSpreadsheet {
        document: bootstrap_document(&table, widget_script_url),
        sheet,
    })
}
