// src/files.rs
use std::path::Path;

use async_trait::async_trait;

use crate::decoder;
use crate::error::{Error, Result};

/// Reads whole files as base64 text.
#[async_trait]
pub trait FileSource: Send + Sync {
    async fn read_base64(&self, path: &Path) -> Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFiles;

#[async_trait]
impl FileSource for LocalFiles {
    async fn read_base64(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::io(path, e))?;
        Ok(decoder::encode(&bytes))
    }
}
