/// All error types that can occur when talking to an Aurora controller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never reached the device (connection refused,
    /// timeout, DNS failure, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to serialize data to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// The auth token is not valid for this device (HTTP 401).
    #[error("not authorized; invalid token for this device")]
    NotAuthorized,

    /// The device rejected the request as malformed (HTTP 403).
    #[error("bad request")]
    BadRequest,

    /// The endpoint or resource does not exist (HTTP 404).
    #[error("resource not found")]
    NotFound,

    /// The device could not process the request body (HTTP 422).
    #[error("unprocessable entity")]
    UnprocessableEntity,

    /// The device hit an internal error (HTTP 500).
    #[error("internal device error")]
    DeviceInternal,

    /// A status code outside the documented set.
    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    /// The device answered with no body where a payload was expected.
    #[error("empty response from device")]
    EmptyResponse,

    /// A color argument failed client-side validation.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// No effect other than the active one is stored on the device.
    #[error("no alternate effect stored on the device")]
    NoAlternateEffect,
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
