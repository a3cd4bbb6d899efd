// src/picker.rs
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rfd::FileDialog;
use tokio::task::{self, JoinError};

use crate::data_types::PickedFile;
use crate::error::{Error, Result};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLS_MIME: &str = "application/vnd.ms-excel";

/// Which type filter the picker is opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickKind {
    Spreadsheet,
    Image,
}

impl PickKind {
    pub fn label(self) -> &'static str {
        match self {
            PickKind::Spreadsheet => "Spreadsheets",
            PickKind::Image => "Images",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            PickKind::Spreadsheet => &["xlsx", "xls"],
            PickKind::Image => &["png", "jpg", "jpeg", "gif", "webp", "bmp"],
        }
    }
}

/// Lets the user choose one file. `Ok(None)` means the user canceled.
#[async_trait]
pub trait FilePicker: Send + Sync {
    async fn pick_file(&self, kind: PickKind) -> Result<Option<PickedFile>>;
}

/// Native file dialog.
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdPicker;

#[async_trait]
impl FilePicker for RfdPicker {
    async fn pick_file(&self, kind: PickKind) -> Result<Option<PickedFile>> {
        let chosen = task::spawn_blocking(move || {
            FileDialog::new()
                .add_filter(kind.label(), kind.extensions())
                .pick_file()
        })
        .await;
        picked(chosen)
    }
}

/// A dialog task that panicked or was aborted is a failure, not a cancel.
fn picked(chosen: std::result::Result<Option<PathBuf>, JoinError>) -> Result<Option<PickedFile>> {
    let path = chosen.map_err(|e| Error::Picker(e.to_string()))?;
    Ok(path.map(|path| PickedFile {
        declared_type: declared_type(&path),
        path,
    }))
}

/// MIME type implied by a file's extension.
pub fn declared_type(path: &Path) -> String {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" => XLSX_MIME,
        "xls" => XLS_MIME,
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_type_follows_extension() {
        assert_eq!(declared_type(Path::new("a/photo.JPG")), "image/jpeg");
        assert_eq!(declared_type(Path::new("book.xlsx")), XLSX_MIME);
        assert_eq!(declared_type(Path::new("README")), "application/octet-stream");
    }

    #[tokio::test]
    async fn dead_dialog_task_is_an_error() {
        let chosen = task::spawn_blocking(|| -> Option<PathBuf> { panic!("dialog crashed") }).await;
        let outcome = picked(chosen);
        assert!(matches!(outcome, Err(Error::Picker(_))));
        assert!(!outcome.unwrap_err().is_canceled());
    }

    #[tokio::test]
    async fn closed_dialog_is_a_cancel() {
        let chosen = task::spawn_blocking(|| None).await;
        assert_eq!(picked(chosen).unwrap(), None);

        let chosen = task::spawn_blocking(|| Some(PathBuf::from("shot.png"))).await;
        let file = picked(chosen).unwrap().unwrap();
        assert_eq!(file.declared_type, "image/png");
    }

    #[test]
    fn spreadsheet_filter_matches_accepted_types() {
        assert_eq!(PickKind::Spreadsheet.extensions(), &["xlsx", "xls"]);
        assert!(PickKind::Image.extensions().contains(&"png"));
    }
}
