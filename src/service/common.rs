//! Common types shared by the webhook client and the site server

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Enhancement mode tag selecting which processing profile the webhook
/// applies. Opaque to this crate, interpreted only by the far end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhancementMode {
    Basic,
    Mid,
    High,
}

impl EnhancementMode {
    /// Wire value sent in the request body
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }

    /// Parse from a request string; unknown values are rejected
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "mid" => Some(Self::Mid),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Short description shown in the mode selector
    pub fn description(&self) -> &'static str {
        match self {
            Self::Basic => "Simple enhancements",
            Self::Mid => "Code & image tasks",
            Self::High => "Ultimate coding",
        }
    }
}

impl std::fmt::Display for EnhancementMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outbound request body. Field names and content are the wire contract:
/// the prompt goes out exactly as the caller supplied it.
#[derive(Debug, Serialize)]
pub struct EnhancementRequest<'a> {
    pub prompt: &'a str,
    pub mode: &'a str,
}

/// Canonical result of a successful enhancement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enhancement {
    #[serde(rename = "enhancedPrompt")]
    pub enhanced_prompt: String,
}

/// Classified failures surfaced to the page. Parse errors never appear
/// here: an unparseable body is folded into the raw-text success path.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// Transport never produced a response (refused connection, DNS,
    /// cross-origin blocking)
    #[error("Network error or CORS issue. Please ensure the webhook is configured to accept requests from this origin.")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx status; `body` is the response text read best-effort
    /// (empty string if unreadable)
    #[error("API Error: {status} - {}", display_body(.body))]
    Service { status: u16, body: String },

    /// 2xx status with an empty body - always a far-end misconfiguration,
    /// never a valid "no enhancement"
    #[error("The enhancement service returned an empty response. Please check the webhook workflow configuration.")]
    EmptyResponse,
}

fn display_body(body: &str) -> &str {
    if body.is_empty() {
        "Unknown server error"
    } else {
        body
    }
}
