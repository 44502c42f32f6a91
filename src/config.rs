//! Configuration module - CLI arguments and settings

use std::sync::Arc;

use anyhow::{anyhow, Result};

/// Production webhook endpoint, used when no override is given
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://n8n.srv915514.hstgr.cloud/webhook/prompt%20enhancer";

/// First port the site server tries to bind
pub const DEFAULT_LISTEN_PORT: u16 = 3000;

/// Upper bound on prompt length, in characters
pub const MAX_PROMPT_CHARS: usize = 2000;

/// Optional configuration parameters for Config::new()
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    pub listen_port: Option<u16>,
    pub max_prompt_chars: Option<usize>,
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub listen_port: u16,
    pub max_prompt_chars: usize,
}

impl Config {
    /// Create a new Config. A `webhook_url` of `None` selects the production
    /// endpoint. The scheme is kept as given so a plain-HTTP mock endpoint
    /// works in tests.
    pub fn new(webhook_url: Option<String>, options: ConfigOptions) -> Result<Arc<Self>> {
        let webhook_url = webhook_url.unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());

        // Remove surrounding whitespace and trailing slash
        let webhook_url = webhook_url.trim().trim_end_matches('/').to_string();

        if webhook_url.is_empty() {
            return Err(anyhow!("webhook URL cannot be empty"));
        }

        if !webhook_url.starts_with("http://") && !webhook_url.starts_with("https://") {
            return Err(anyhow!(
                "webhook URL must start with http:// or https://: {}",
                webhook_url
            ));
        }

        Ok(Arc::new(Self {
            webhook_url,
            listen_port: options.listen_port.unwrap_or(DEFAULT_LISTEN_PORT),
            max_prompt_chars: options.max_prompt_chars.unwrap_or(MAX_PROMPT_CHARS),
        }))
    }
}
