//! Compact, URL-safe encoding of an [`OptionList`].
//!
//! A token is the option labels as a MessagePack array of strings, base64
//! encoded with the URL-safe alphabet and no padding. Decoding is more
//! lenient than encoding: items may also be maps carrying `label` (or
//! `option`, the field name the page's own records use), and tokens written
//! by earlier builds carry a JSON array instead of MessagePack.

use std::io::Cursor;

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;

use crate::constants::MAX_TOKEN_LENGTH;
use crate::error::{Result, RouletteError};
use crate::option_list::{OptionList, WheelOption};

#[derive(Deserialize)]
#[serde(untagged)]
enum EncodedOption {
    Label(String),
    Object {
        label: Option<String>,
        option: Option<String>,
    },
}

impl EncodedOption {
    /// `label` wins when both keys are present.
    fn into_label(self) -> Option<String> {
        match self {
            Self::Label(label) => Some(label),
            Self::Object { label, option } => label.or(option),
        }
    }
}

pub fn encode(options: &OptionList) -> String {
    // Serializing a Vec<String> cannot fail.
    let packed = rmp_serde::to_vec(&options.labels()).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(packed)
}

/// Like [`encode`], but refuses tokens too long to share.
pub fn encode_checked(options: &OptionList) -> Result<String> {
    let token = encode(options);
    if token.len() > MAX_TOKEN_LENGTH {
        return Err(RouletteError::OversizeEncoding {
            length: token.len(),
            max: MAX_TOKEN_LENGTH,
        });
    }
    Ok(token)
}

fn unpack(bytes: &[u8]) -> Result<Vec<EncodedOption>> {
    // A MessagePack array never starts with '['
    if bytes.first() == Some(&b'[') {
        return serde_json::from_slice(bytes).map_err(RouletteError::malformed);
    }

    let mut cursor = Cursor::new(bytes);
    let items = rmp_serde::from_read(&mut cursor).map_err(RouletteError::malformed)?;
    if cursor.position() as usize != bytes.len() {
        return Err(RouletteError::malformed("trailing bytes after option list"));
    }
    Ok(items)
}

pub fn decode(token: &str) -> Result<OptionList> {
    let token = token.trim();
    let engine = if token.ends_with('=') { &URL_SAFE } else { &URL_SAFE_NO_PAD };
    let bytes = engine.decode(token).map_err(RouletteError::malformed)?;

    unpack(&bytes)?
        .into_iter()
        .map(|item| {
            item.into_label()
                .and_then(WheelOption::new)
                .ok_or_else(|| RouletteError::malformed("option without a label"))
        })
        .collect()
}
