//! Module defining the errors which are exposed to the users of the crate

/// Exit code signalling a missing credential.
const EXIT_CONFIG: u8 = 2;
/// Exit code signalling an upstream, parsing, or validation failure.
const EXIT_FAILURE: u8 = 3;

/// Upstream error bodies are truncated to this many characters in diagnostics.
const UPSTREAM_BODY_LIMIT: usize = 600;
/// Non-JSON completion content is quoted up to this many characters.
const CONTENT_PREFIX_LIMIT: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The required credential is absent from the environment
    #[error("FAIL: OPENAI_API_KEY is not set")]
    MissingApiKey,

    /// The HTTP round trip itself failed (connection, protocol, or body decode)
    #[error("ERROR OpenAI: request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("ERROR OpenAI: HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The completion carried no message content
    #[error("ERROR: No content returned from OpenAI")]
    EmptyCompletion,

    /// The completion content was not parseable as JSON
    #[error("ERROR: Model did not return JSON. Starts: {prefix}")]
    NotJson { prefix: String },

    /// The completion payload lacked a required string field
    #[error("ERROR: Response must include string fields metadata_json and sample_code_ts")]
    MalformedPayload,

    /// Writing the fixture files failed
    #[error("failed to write fixture files: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Maps the error onto the process exit-code contract: `2` for a missing
    /// credential, `3` for every upstream, parsing, or validation failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MissingApiKey => EXIT_CONFIG,
            _ => EXIT_FAILURE,
        }
    }
}

pub(crate) fn upstream_error(status: u16, body: impl AsRef<str>) -> Error {
    Error::Upstream {
        status,
        body: truncated(body.as_ref(), UPSTREAM_BODY_LIMIT),
    }
}

pub(crate) fn not_json_error(content: &str) -> Error {
    Error::NotJson {
        prefix: truncated(content, CONTENT_PREFIX_LIMIT),
    }
}

fn truncated(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
