//! Translation key resolution.
//!
//! The engine owns the string catalog; this side only ships a numeric key
//! plus named arguments and gets the rendered text back. Keys are formed as
//! `module * 1000 + index`, so the identity is stable regardless of what the
//! template says.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Offset multiplier separating module index from translation index.
pub const MODULE_KEY_MULTIPLIER: u32 = 1000;

/// Numeric identity of a localizable string template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslateKey(pub u32);

impl TranslateKey {
    pub fn from_parts(module: u32, translation: u32) -> Self {
        Self(module * MODULE_KEY_MULTIPLIER + translation)
    }
}

impl From<u32> for TranslateKey {
    fn from(key: u32) -> Self {
        Self(key)
    }
}

/// A named translation argument: text or a number, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslateArg {
    Text(String),
    Number(f64),
}

impl From<&str> for TranslateArg {
    fn from(v: &str) -> Self {
        TranslateArg::Text(v.to_string())
    }
}

impl From<String> for TranslateArg {
    fn from(v: String) -> Self {
        TranslateArg::Text(v)
    }
}

impl From<i64> for TranslateArg {
    fn from(v: i64) -> Self {
        TranslateArg::Number(v as f64)
    }
}

impl From<i32> for TranslateArg {
    fn from(v: i32) -> Self {
        TranslateArg::Number(v as f64)
    }
}

impl From<u32> for TranslateArg {
    fn from(v: u32) -> Self {
        TranslateArg::Number(v as f64)
    }
}

impl From<f64> for TranslateArg {
    fn from(v: f64) -> Self {
        TranslateArg::Number(v)
    }
}

/// Payload for the translation service call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub key: TranslateKey,
    pub args: BTreeMap<String, TranslateArg>,
}

impl TranslateRequest {
    pub fn new(key: TranslateKey, args: &[(&str, TranslateArg)]) -> Self {
        Self {
            key,
            args: args
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        }
    }
}
