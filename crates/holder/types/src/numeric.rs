//! Numeric Holder
use crate::capability::ValueProvider;
use crate::errors::{HolderError, HolderResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Holds a single number.
///
/// `stored_value` is public: callers may overwrite it directly and the next
/// `value()` call reflects the write. Any `f64` is accepted, including NaN and
/// the infinities. The default is `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericHolder {
    #[serde(rename = "value", with = "number_repr")]
    pub stored_value: f64,
}

/// Finite values serialize as numbers; NaN and the infinities as the strings
/// `f64` prints and parses (`"NaN"`, `"inf"`, `"-inf"`).
mod number_repr {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.collect_str(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }

    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or one of \"NaN\", \"inf\", \"-inf\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            v.parse::<f64>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }
}

impl NumericHolder {
    pub fn new(value: f64) -> Self {
        Self {
            stored_value: value,
        }
    }

    /// Parse a holder from text, accepting anything `f64` parses
    /// (`"NaN"`, `"inf"` included). Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> HolderResult<Self> {
        match input.trim().parse::<f64>() {
            Ok(value) => Ok(Self::new(value)),
            Err(source) => {
                debug!(input, error = %source, "Rejected numeric holder input");
                Err(HolderError::InvalidNumber {
                    input: input.to_string(),
                    source,
                })
            }
        }
    }
}

impl ValueProvider<f64> for NumericHolder {
    #[inline]
    fn value(&self) -> f64 {
        self.stored_value
    }
}

impl From<f64> for NumericHolder {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl FromStr for NumericHolder {
    type Err = HolderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NumericHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stored_value)
    }
}
