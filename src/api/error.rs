use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("authentication failed (status {status}): {body}")]
    Auth {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("token refresh failed (status {status}): {body}")]
    Refresh {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("no refresh token available")]
    NoRefreshToken,

    #[error("logout failed (status {status}): {body}")]
    Logout {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("request failed (status {status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl Error {
    /// Truncate a response body to avoid carrying excessive data in errors
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        // Back off to a char boundary so multi-byte bodies slice safely
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..end],
            body.len()
        )
    }

    pub fn auth(status: reqwest::StatusCode, body: &str) -> Self {
        Error::Auth {
            status,
            body: Self::truncate_body(body),
        }
    }

    pub fn refresh(status: reqwest::StatusCode, body: &str) -> Self {
        Error::Refresh {
            status,
            body: Self::truncate_body(body),
        }
    }

    pub fn logout(status: reqwest::StatusCode, body: &str) -> Self {
        Error::Logout {
            status,
            body: Self::truncate_body(body),
        }
    }

    pub fn api(status: reqwest::StatusCode, body: &str) -> Self {
        Error::Api {
            status,
            body: Self::truncate_body(body),
        }
    }
}
