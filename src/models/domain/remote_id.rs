use std::fmt;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// Identifier assigned by the quiz platform.
///
/// The platform hands out ids as JSON numbers or strings; the received
/// representation is kept so it can be echoed back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RemoteId {
    Number(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRemoteId {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for RemoteId {
    /// Integral floats such as `11.0` are the same id as `11`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawRemoteId::deserialize(deserializer)? {
            RawRemoteId::Integer(n) => Ok(RemoteId::Number(n)),
            RawRemoteId::Float(f)
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 =>
            {
                Ok(RemoteId::Number(f as i64))
            }
            RawRemoteId::Float(f) => Err(D::Error::custom(format!(
                "id {} is not an integer",
                f
            ))),
            RawRemoteId::Text(s) => Ok(RemoteId::Text(s)),
        }
    }
}

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteId::Number(n) => write!(f, "{}", n),
            RemoteId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RemoteId {
    fn from(value: i64) -> Self {
        RemoteId::Number(value)
    }
}

impl From<&str> for RemoteId {
    fn from(value: &str) -> Self {
        RemoteId::Text(value.to_string())
    }
}
