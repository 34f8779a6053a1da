//! Error types for the API client and the status-code classifier.

/// Result alias used by every client operation.
pub type Result<T> = std::result::Result<T, Error>;

/// A failed exchange with the Undetectable API.
///
/// Every variant renders the message callers are expected to surface to
/// users; the `Display` output of each is stable.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server answered with a non-success status.
    #[error("API call failed ({status}): {explanation}")]
    Api {
        status: u16,
        explanation: &'static str,
        /// Truncated response body, kept for diagnostics.
        body: String,
    },
    /// The request went out but no response came back (connect failure,
    /// timeout, or the body could not be read).
    #[error("No response received from the server.")]
    NoResponse,
    /// The request could not be built before sending.
    #[error("Request setup error: {0}")]
    RequestSetup(String),
    /// The server answered with a success status but the body was not the
    /// expected JSON shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl Error {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16, body: String) -> Self {
        Error::Api {
            status,
            explanation: status_explanation(status),
            body,
        }
    }

    /// Classifies a transport-level failure reported by `reqwest`.
    ///
    /// Builder errors never left the process and count as setup failures;
    /// anything else happened after the request was handed to the network.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_builder() {
            Error::RequestSetup(err.to_string())
        } else {
            Error::NoResponse
        }
    }

    /// HTTP status of an [`Error::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Human-readable explanation for an HTTP status returned by the API.
pub fn status_explanation(status: u16) -> &'static str {
    match status {
        400 => "Bad Request -- Your request is invalid.",
        403 => "Forbidden -- The API key is invalid or there isn't sufficient credits (0.1 per word).",
        404 => "Not Found -- The specified resource does not exist.",
        405 => "Method Not Allowed -- You tried to access a resource with an invalid method.",
        406 => "Not Acceptable -- You requested a format that isn't JSON.",
        410 => "Gone -- The resource at this endpoint has been removed.",
        422 => "Invalid Request Body -- Your request body is formatted incorrectly or there are missing parameters.",
        429 => "Too Many Requests -- You're sending too many requests! Slow it down!",
        500 => "Internal Server Error -- We had a problem with our server. Try again later.",
        503 => "Service Unavailable -- We are temporarily offline for maintenance. Please try again later.",
        _ => "An unexpected error occurred.",
    }
}

/// A string did not name a member of one of the closed request enumerations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} '{value}', expected one of: {expected}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl ParseEnumError {
    pub(crate) fn new<'a>(
        kind: &'static str,
        value: &str,
        expected: impl Iterator<Item = &'a str>,
    ) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.collect::<Vec<_>>().join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_documented_status_has_its_explanation() {
        let table = [
            (400, "Bad Request -- Your request is invalid."),
            (404, "Not Found -- The specified resource does not exist."),
            (405, "Method Not Allowed -- You tried to access a resource with an invalid method."),
            (406, "Not Acceptable -- You requested a format that isn't JSON."),
            (410, "Gone -- The resource at this endpoint has been removed."),
            (
                422,
                "Invalid Request Body -- Your request body is formatted incorrectly or there are missing parameters.",
            ),
            (429, "Too Many Requests -- You're sending too many requests! Slow it down!"),
            (500, "Internal Server Error -- We had a problem with our server. Try again later."),
            (
                503,
                "Service Unavailable -- We are temporarily offline for maintenance. Please try again later.",
            ),
        ];
        for (status, expected) in table {
            assert_eq!(status_explanation(status), expected, "status {}", status);
        }
    }

    #[test]
    fn unknown_status_falls_back() {
        for status in [401, 409, 418, 502, 504, 599] {
            assert_eq!(status_explanation(status), "An unexpected error occurred.");
        }
    }

    #[test]
    fn forbidden_message() {
        insta::assert_snapshot!(
            Error::from_status(403, String::new()).to_string(),
            @"API call failed (403): Forbidden -- The API key is invalid or there isn't sufficient credits (0.1 per word)."
        );
    }

    #[test]
    fn unknown_status_message() {
        assert_eq!(
            Error::from_status(418, "teapot".to_string()).to_string(),
            "API call failed (418): An unexpected error occurred."
        );
    }

    #[test]
    fn no_response_message() {
        assert_eq!(
            Error::NoResponse.to_string(),
            "No response received from the server."
        );
    }

    #[test]
    fn setup_message_is_verbatim() {
        assert_eq!(
            Error::RequestSetup("relative URL without a base".to_string()).to_string(),
            "Request setup error: relative URL without a base"
        );
    }

    #[test]
    fn status_accessor() {
        assert_eq!(Error::from_status(429, String::new()).status(), Some(429));
        assert_eq!(Error::NoResponse.status(), None);
    }

    #[test]
    fn parse_enum_error_lists_choices() {
        let err = ParseEnumError::new("strength", "loud", ["Quality", "Balanced"].into_iter());
        assert_eq!(
            err.to_string(),
            "invalid strength 'loud', expected one of: Quality, Balanced"
        );
    }
}
