mod client;
mod config;
mod error;
mod fixture;
mod protocol;
mod telemetry;

pub use config::Config;
pub use error::Error;
pub use telemetry::setup_logging;

use std::path::PathBuf;

use tracing::info;

use crate::client::CompletionClient;
use crate::fixture::FixturePair;
use crate::protocol::ChatRequest;

/// Generates a requirements-fixture pair via an OpenAI-compatible endpoint
/// and returns the path of the temporary directory holding it.
///
/// This is the single public entry point of the crate. It submits the fixed
/// prompt pair in one awaited request, validates that the reply carries the
/// two required string payloads, and writes them to
/// `<returned dir>/requirements/metadata.json` and
/// `<returned dir>/requirements/sample-code.ts`.
///
/// # Error handling
///
/// Every failure is terminal for the run: a missing payload field, a
/// non-success upstream status, or an unwritable output directory all
/// surface as an [`Error`] without retries and without partial output. The
/// returned directory is never created before the payload has been
/// validated.
///
/// # Example
///
/// ```no_run
/// use fixture_gen_rs::{Config, generate};
///
/// # async fn run() -> Result<(), fixture_gen_rs::Error> {
/// let config = Config::from_env()?;
/// let fixture_dir = generate(&config).await?;
/// println!("{}", fixture_dir.display());
/// # Ok(())
/// # }
/// ```
pub async fn generate(config: &Config) -> Result<PathBuf, Error> {
    let client = CompletionClient::new(config);
    let request = ChatRequest::fixture_request();

    let content = client.complete(&request).await?;
    let fixture = FixturePair::parse(&content)?;
    let base_dir = fixture.write()?;

    info!(path = %base_dir.display(), "fixture generation complete");
    Ok(base_dir)
}
