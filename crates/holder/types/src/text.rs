//! Text Holder
use crate::capability::ValueProvider;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Holds a single piece of text.
///
/// The stored text is private and has no setter; it is fixed once the holder
/// is built. The default is the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextHolder {
    #[serde(rename = "value")]
    stored_value: String,
}

impl TextHolder {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            stored_value: value.into(),
        }
    }
}

impl ValueProvider<String> for TextHolder {
    fn value(&self) -> String {
        self.stored_value.clone()
    }
}

impl From<String> for TextHolder {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for TextHolder {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl FromStr for TextHolder {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for TextHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stored_value)
    }
}
