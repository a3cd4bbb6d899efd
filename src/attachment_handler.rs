// src/attachment_handler.rs
use std::path::Path;
use std::sync::Arc;

use crate::data_types::RenderedImage;
use crate::error::{Error, Result};
use crate::files::FileSource;
use crate::picker::{FilePicker, PickKind};

/// Pick an image and turn it into a data URI. No size or format checks
/// beyond the picker's type filter.
#[derive(Clone)]
pub struct AttachmentHandler {
    picker: Arc<dyn FilePicker>,
    files: Arc<dyn FileSource>,
}

impl AttachmentHandler {
    pub fn new(picker: Arc<dyn FilePicker>, files: Arc<dyn FileSource>) -> Self {
        AttachmentHandler { picker, files }
    }

    pub async fn load(&self) -> Result<RenderedImage> {
        let picked = self
            .picker
            .pick_file(PickKind::Image)
            .await?
            .ok_or(Error::Canceled)?;
        self.load_path(&picked.path, &picked.declared_type).await
    }

    pub async fn load_path(&self, path: &Path, mime: &str) -> Result<RenderedImage> {
        let encoded = self.files.read_base64(path).await?;
        Ok(RenderedImage::new(mime, &encoded))
    }
}
