//! Module converting the model's reply into validated fixture artifacts and
//! persisting them to disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::error::{Error, not_json_error};


pub(crate) const OUTPUT_SUBDIR: &str = "requirements";
pub(crate) const METADATA_FILE: &str = "metadata.json";
pub(crate) const SAMPLE_CODE_FILE: &str = "sample-code.ts";
const TEMP_DIR_PREFIX: &str = "ccrb-openai-";

/// The validated pair of fixture payloads extracted from a completion.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FixturePair {
    metadata_json: String,
    sample_code_ts: String,
}

impl FixturePair {
    /// Parses completion content into the two required string fields.
    ///
    /// Only presence and string type are checked here; the deeper metadata
    /// schema is a prompt-side constraint left to the consuming tooling.
    pub(crate) fn parse(content: &str) -> Result<Self, Error> {
        let payload: Value = serde_json::from_str(content).map_err(|_| not_json_error(content))?;

        let metadata_json = string_field(&payload, "metadata_json")?;
        let sample_code_ts = string_field(&payload, "sample_code_ts")?;

        Ok(Self {
            metadata_json,
            sample_code_ts,
        })
    }

    /// Writes both artifacts into `requirements/` under a freshly created
    /// temporary directory and returns that directory's path.
    ///
    /// The directory is kept on disk: it is the product of the run, not
    /// scratch space.
    pub(crate) fn write(&self) -> Result<PathBuf, Error> {
        let base_dir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir()?
            .keep();
        self.write_into(&base_dir)?;

        info!(path = %base_dir.display(), "fixture files written");
        Ok(base_dir)
    }

    fn write_into(&self, base_dir: &Path) -> Result<(), Error> {
        let out_dir = base_dir.join(OUTPUT_SUBDIR);
        fs::create_dir_all(&out_dir)?;

        fs::write(out_dir.join(METADATA_FILE), &self.metadata_json)?;
        fs::write(out_dir.join(SAMPLE_CODE_FILE), &self.sample_code_ts)?;
        Ok(())
    }
}

fn string_field(payload: &Value, field: &str) -> Result<String, Error> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(Error::MalformedPayload)
}
