// src/bridge.rs
//! Messages posted by the bootstrap script inside the spreadsheet document.
//!
//! The channel only runs document → host. The host never calls
//! `exportSpreadsheet` or `importSpreadsheet`, so in practice only
//! `Initialized` arrives; the other variants are understood for completeness.

use serde_json::Value;

use crate::decoder;
use crate::error::{Error, Result};

const INITIALIZED: &str = "SpreadJS initialized";
const EXPORT_PREFIX: &str = "export:";
const IMPORT_DONE: &str = "import:done";
const IMPORT_ERROR: &str = "import:error";

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeMessage {
    Initialized,
    /// Grid contents serialized by the widget.
    Exported(Value),
    ImportDone,
    ImportFailed,
    Other(String),
}

impl BridgeMessage {
    pub fn parse(raw: &str) -> Result<Self> {
        let message = match raw {
            INITIALIZED => BridgeMessage::Initialized,
            IMPORT_DONE => BridgeMessage::ImportDone,
            IMPORT_ERROR => BridgeMessage::ImportFailed,
            _ => match raw.strip_prefix(EXPORT_PREFIX) {
                Some(payload) => BridgeMessage::Exported(decode_export(payload)?),
                None => BridgeMessage::Other(raw.to_string()),
            },
        };
        Ok(message)
    }
}

fn decode_export(payload: &str) -> Result<Value> {
    let bytes = decoder::decode(payload)?;
    let json = String::from_utf8(bytes)
        .map_err(|e| Error::Parse(format!("export payload is not UTF-8: {e}")))?;
    serde_json::from_str(&json).map_err(|e| Error::Parse(format!("export payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recognises_status_strings() {
        assert_eq!(
            BridgeMessage::parse("SpreadJS initialized").unwrap(),
            BridgeMessage::Initialized
        );
        assert_eq!(BridgeMessage::parse("import:done").unwrap(), BridgeMessage::ImportDone);
        assert_eq!(BridgeMessage::parse("import:error").unwrap(), BridgeMessage::ImportFailed);
        assert_eq!(
            BridgeMessage::parse("hello").unwrap(),
            BridgeMessage::Other("hello".to_string())
        );
    }

    #[test]
    fn decodes_exported_grid_json() {
        let grid = json!({ "version": "15.0.0", "sheetCount": 1 });
        let raw = format!("export:{}", decoder::encode(grid.to_string().as_bytes()));
        assert_eq!(BridgeMessage::parse(&raw).unwrap(), BridgeMessage::Exported(grid));
    }

    #[test]
    fn malformed_export_is_an_error() {
        let raw = format!("export:{}", decoder::encode(b"{not json"));
        assert!(matches!(BridgeMessage::parse(&raw), Err(Error::Parse(_))));
        assert!(matches!(BridgeMessage::parse("export:%%%"), Err(Error::Decode(_))));
    }
}
