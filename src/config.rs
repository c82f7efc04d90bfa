//! Module defining the environment contract of the generator.

use std::env;

use crate::error::Error;

const API_KEY_VAR: &str = "OPENAI_API_KEY";
const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Runtime configuration, read once at startup and handed to [`crate::generate`].
#[derive(Debug, Clone)]
pub struct Config {
    api_key: String,
    base_url: String,
}

impl Config {
    /// Builds a configuration from explicit values.
    ///
    /// Callers that do not own the process environment (e.g. tests pointing
    /// the generator at a local server) use this instead of [`Config::from_env`].
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            api_key: api_key.into(),
            base_url,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// `OPENAI_API_KEY` is required; an unset or empty value is a fatal
    /// precondition failure. `OPENAI_BASE_URL` optionally overrides the
    /// production endpoint.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)?;
        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(api_key, base_url))
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The full chat-completion endpoint URL.
    pub(crate) fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}
