use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Bearer credential for the quiz platform.
///
/// Supplied with every solve request and passed down explicitly to each
/// upstream call. It is never stored in shared state.
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// Raw header value sent as `Authorization`.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}
