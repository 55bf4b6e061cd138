use serde::Deserialize;

/// Error body returned by the catalog backend.
///
/// Both fields are optional since failures may come from proxies or the
/// framework's default handler rather than the application itself.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    /// Application error message.
    #[serde(default)]
    pub message: Option<String>,
    /// Framework error reason (e.g. `Bad Request`).
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Returns the most specific non-empty message.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or(self.error.filter(|e| !e.trim().is_empty()))
    }
}
