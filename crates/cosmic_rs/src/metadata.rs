//! Token metadata for minting a profile.
//!
//! The JSON shape is `{name, description, attributes: [{trait_type, value}]}`
//! and the token URI embeds it as `data:application/json;base64,<payload>`.
//! Only the dominant element and the sun sign are published as attributes;
//! the pillars themselves stay private.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cosmic_base::CosmicProfile;
use serde::{Deserialize, Serialize};

use crate::error::CosmicError;

pub const DATA_URI_PREFIX: &str = "data:application/json;base64,";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAttribute {
    pub trait_type: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    pub attributes: Vec<TokenAttribute>,
}

impl TokenMetadata {
    pub fn from_profile(profile: &CosmicProfile) -> Self {
        Self {
            name: profile.title.clone(),
            description: profile.description.clone(),
            attributes: vec![
                TokenAttribute {
                    trait_type: "Element".to_string(),
                    value: profile.element().to_string(),
                },
                TokenAttribute {
                    trait_type: "Zodiac".to_string(),
                    value: profile.zodiac.to_string(),
                },
            ],
        }
    }

    /// Compact JSON, fields in declaration order.
    pub fn to_json(&self) -> Result<String, CosmicError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Token URI carrying the JSON as standard base64 of its UTF-8 bytes.
    pub fn to_data_uri(&self) -> Result<String, CosmicError> {
        let json = self.to_json()?;
        Ok(format!("{DATA_URI_PREFIX}{}", STANDARD.encode(json.as_bytes())))
    }

    /// Inverse of [`TokenMetadata::to_data_uri`].
    pub fn from_data_uri(uri: &str) -> Result<Self, CosmicError> {
        let payload = uri.strip_prefix(DATA_URI_PREFIX).ok_or_else(|| {
            CosmicError::InvalidDataUri(format!("missing {DATA_URI_PREFIX:?} prefix"))
        })?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| CosmicError::InvalidDataUri(e.to_string()))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_base::{compose_profile, four_pillars, zodiac_sign};

    fn metadata() -> TokenMetadata {
        TokenMetadata::from_profile(&compose_profile(
            four_pillars(1990, 1, 1, 12),
            zodiac_sign(1, 1),
        ))
    }

    #[test]
    fn json_shape() {
        let json = metadata().to_json().unwrap();
        assert!(json.starts_with(r#"{"name":"Cosmic Fire Capricorn","description":"You are"#));
        assert!(json.ends_with(
            r#""attributes":[{"trait_type":"Element","value":"Fire"},{"trait_type":"Zodiac","value":"Capricorn"}]}"#
        ));
    }

    #[test]
    fn data_uri_prefix_and_decode() {
        let md = metadata();
        let uri = md.to_data_uri().unwrap();
        assert!(uri.starts_with("data:application/json;base64,eyJ"));
        assert_eq!(TokenMetadata::from_data_uri(&uri).unwrap(), md);
    }

    #[test]
    fn rejects_foreign_uris() {
        assert!(matches!(
            TokenMetadata::from_data_uri("https://example.com/1.json"),
            Err(CosmicError::InvalidDataUri(_))
        ));
        assert!(matches!(
            TokenMetadata::from_data_uri("data:application/json;base64,!!!"),
            Err(CosmicError::InvalidDataUri(_))
        ));
        let not_json = format!("{DATA_URI_PREFIX}{}", STANDARD.encode(b"[1,2"));
        assert!(matches!(
            TokenMetadata::from_data_uri(&not_json),
            Err(CosmicError::Serialization(_))
        ));
    }
}
