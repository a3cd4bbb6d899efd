// src/decoder.rs
//! Base64 payloads to raw bytes and back.
//!
//! Decoding is byte exact: no character-set conversion is ever applied.
//! Input may contain ASCII whitespace and may omit padding.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::error::Result;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(LENIENT.decode(compact)?)
}

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn data_uri(mime: &str, base64_payload: &str) -> String {
    format!("data:{};base64,{}", mime, base64_payload)
}

/// Splits `data:<mime>;base64,<payload>` into `(mime, payload)`.
pub fn split_data_uri(uri: &str) -> Option<(&str, &str)> {
    let rest = uri.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    Some((mime, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn every_byte_value_survives_a_round_trip() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn round_trips_every_padding_length() {
        let mut seed = 0x2545_f491_u32;
        for len in 0..48 {
            let bytes: Vec<u8> = (0..len)
                .map(|_| {
                    seed ^= seed << 13;
                    seed ^= seed >> 17;
                    seed ^= seed << 5;
                    (seed >> 24) as u8
                })
                .collect();
            assert_eq!(decode(&encode(&bytes)).unwrap(), bytes, "length {len}");
        }
    }

    #[test]
    fn tolerates_line_breaks_and_missing_padding() {
        assert_eq!(decode("TmFt\nZQ").unwrap(), b"Name");
        assert_eq!(decode("TmFtZQ==").unwrap(), b"Name");
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        assert!(matches!(decode("no*base64"), Err(Error::Decode(_))));
    }

    #[test]
    fn splits_data_uris() {
        assert_eq!(
            split_data_uri("data:image/png;base64,iVBORw0KGgo="),
            Some(("image/png", "iVBORw0KGgo="))
        );
        assert_eq!(split_data_uri("data:text/plain,hello"), None);
        assert_eq!(split_data_uri("https://example.com/a.png"), None);
    }
}
