//! Module defining the wire format of the chat-completion endpoint and the
//! fixed prompt pair describing the fixture to the model.

use serde::{Deserialize, Serialize};


pub(crate) const MODEL: &str = "gpt-4.1-mini";

// The key schema below is a contract with the downstream requirements
// tooling; the generator itself never parses the metadata document.
const SYSTEM_PROMPT: &str = r#"You are generating ONLY file contents for a requirements output.
Return STRICT JSON with keys: metadata_json, sample_code_ts.

metadata_json MUST be a JSON STRING that matches EXACTLY this key schema:
{
  "_schema": "2.0",
  "request": <string>,
  "status": "complete",
  "phase": "complete",
  "started": <ISO-8601>,
  "lastUpdated": <ISO-8601>,
  "complexity": { "level": "moderate", "questionCounts": { "discovery": 5, "detail": 5 } },
  "progress": { "discovery": { "answered": 5, "total": 5 }, "detail": { "answered": 5, "total": 5 } },
  "validation": { "status": "passed", "score": 90, "blocking": 0, "warnings": 2 },
  "todos": { "status": "injected", "total": 3, "open": 2, "done": 1, "files": ["src/auth.ts","src/login.ts"] }
}

sample_code_ts MUST be a TypeScript string containing TODO comment lines that include:
- [P:N] where N is 1..3
- [ID:TODO-001] style IDs (zero-padded)
- include at least one [P:3] TODO line (1-line format).

Return STRICT JSON only. No markdown."#;

const USER_PROMPT: &str = r#"Set request to: "Add user authentication feature".
Use started and lastUpdated as ISO-8601 Zulu timestamps (ending in Z).
Ensure todos total=3 open=2 done=1 and open+done=total.
Return STRICT JSON only."#;

/// Request body of the chat-completion endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
    model: &'static str,
    temperature: f32,
    response_format: ResponseFormat,
    messages: Vec<Message>,
}

impl ChatRequest {
    /// Builds the fixed fixture request: deterministic output (temperature
    /// zero), JSON response mode, and the system/user prompt pair.
    pub(crate) fn fixture_request() -> Self {
        Self {
            model: MODEL,
            temperature: 0.0,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: USER_PROMPT,
                },
            ],
        }
    }
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: &'static str,
}

/// Response body of the chat-completion endpoint.
///
/// Only the fields the generator navigates are modelled; everything else in
/// the reply is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

impl ChatResponse {
    /// Returns the first completion's message content, if any.
    pub(crate) fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: ChoiceMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
