//! Webhook client - the single outbound call and reply normalization
//!
//! The webhook is an opaque automation backend that answers in several
//! shapes: the usual n8n array wrapper, a bare object, plain text, or
//! something else entirely. Everything a 2xx reply contains is turned into
//! one canonical result string.

use std::time::Instant;

use reqwest::Client;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::http_logger::{self, HttpRequestLog, HttpResponseLog};

use super::common::{EnhanceError, Enhancement, EnhancementMode, EnhancementRequest};

/// Reply shapes the webhook is known to produce, checked in declaration
/// order. `Unrecognized` keeps the parsed structure for fallback rendering.
#[derive(Debug)]
enum WebhookReply {
    /// `[{"json":{"enhancedPrompt":"..."}}]` - the n8n array wrapper
    ArrayWrapped(String),
    /// `{"enhancedPrompt":"..."}`
    Direct(String),
    /// `{"output":"..."}`
    Output(String),
    /// Valid JSON in none of the known shapes
    Unrecognized(Value),
}

impl WebhookReply {
    fn classify(value: Value) -> Self {
        if let Some(text) = value
            .as_array()
            .and_then(|items| items.first())
            .and_then(|first| first.get("json"))
            .and_then(|json| json.get("enhancedPrompt"))
            .and_then(Value::as_str)
        {
            return Self::ArrayWrapped(text.to_string());
        }

        if let Some(text) = value.get("enhancedPrompt").and_then(Value::as_str) {
            return Self::Direct(text.to_string());
        }

        if let Some(text) = value.get("output").and_then(Value::as_str) {
            return Self::Output(text.to_string());
        }

        Self::Unrecognized(value)
    }

    /// Resolve to the result string. An unrecognized shape is dumped
    /// pretty-printed so the user sees exactly what the far end returned.
    fn into_text(self) -> String {
        match self {
            Self::ArrayWrapped(text) | Self::Direct(text) | Self::Output(text) => text,
            Self::Unrecognized(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

/// Client for the prompt-enhancement webhook.
///
/// Stateless across calls: each `enhance` issues exactly one `POST` and
/// normalizes whatever comes back. No retries, no caching, and no request
/// timeout - a far end that never answers leaves the call pending.
/// Overlapping calls are fine; nothing is shared between invocations.
pub struct WebhookClient {
    client: Client,
    webhook_url: String,
}

impl WebhookClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // Built without a request timeout: this component does not bound
        // the call
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            webhook_url: config.webhook_url.clone(),
        })
    }

    /// Send `{prompt, mode}` and normalize the reply.
    ///
    /// The prompt goes out exactly as given. Trimming and length checks are
    /// the caller's responsibility.
    pub async fn enhance(
        &self,
        prompt: &str,
        mode: EnhancementMode,
    ) -> Result<Enhancement, EnhanceError> {
        let payload = EnhancementRequest {
            prompt,
            mode: mode.as_str(),
        };
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        let http_request_log = if http_logger::is_enabled() {
            Some(HttpRequestLog {
                method: "POST".to_string(),
                url: self.webhook_url.clone(),
                headers: vec![
                    ("Content-Type".to_string(), "application/json".to_string()),
                    ("x-request-id".to_string(), request_id.clone()),
                ],
                body: serde_json::to_string(&payload).ok(),
            })
        } else {
            None
        };

        info!("Calling enhancement webhook: {}", self.webhook_url);

        let response = self
            .client
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .header("x-request-id", &request_id)
            .json(&payload)
            .send()
            .await;

        let duration_ms = start_time.elapsed().as_millis() as u64;

        match response {
            Ok(resp) => {
                let status = resp.status().as_u16();
                let response_headers = if http_logger::is_enabled() {
                    http_logger::extract_response_headers(&resp)
                } else {
                    Vec::new()
                };
                // Best-effort: an unreadable body degrades to empty text
                let body_text = resp.text().await.unwrap_or_default();

                if let Some(ref req_log) = http_request_log {
                    let response_log = HttpResponseLog {
                        status,
                        headers: response_headers,
                        body: Some(body_text.clone()),
                    };
                    http_logger::log_request(None, req_log, Some(&response_log), duration_ms, None);
                }

                info!("Webhook call completed in {}ms", duration_ms);
                handle_response_text(status, &body_text)
            }
            Err(e) => {
                if let Some(ref req_log) = http_request_log {
                    http_logger::log_request(None, req_log, None, duration_ms, Some(&e.to_string()));
                }
                Err(EnhanceError::Network { source: e })
            }
        }
    }
}

/// Normalize a webhook reply into the canonical result or a classified error
fn handle_response_text(status: u16, body_text: &str) -> Result<Enhancement, EnhanceError> {
    if !(200..300).contains(&status) {
        return Err(EnhanceError::Service {
            status,
            body: body_text.to_string(),
        });
    }

    if body_text.is_empty() {
        return Err(EnhanceError::EmptyResponse);
    }

    let enhanced_prompt = match serde_json::from_str::<Value>(body_text) {
        // Not JSON: the raw text is the result
        Err(_) => body_text.to_string(),
        Ok(value) => WebhookReply::classify(value).into_text(),
    };

    Ok(Enhancement { enhanced_prompt })
}
