//! HTTP Request Logger
//!
//! Logs webhook requests to a file when enabled via environment variable.
//! Set `ENHANCER_HTTP_LOG=1` or `ENHANCER_HTTP_LOG=true` to enable.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use chrono::Local;
use tracing::warn;

/// Environment variable to control HTTP logging
const ENV_HTTP_LOG: &str = "ENHANCER_HTTP_LOG";

/// Directory the log file lives in
const LOG_DIR_NAME: &str = ".enhancer";

/// Log file name
const LOG_FILE_NAME: &str = "http_requests.log";

/// Maximum body size to log (10KB)
const MAX_BODY_SIZE: usize = 10000;

/// Sensitive headers that should be masked in logs
const SENSITIVE_HEADERS: &[&str] = &["set-cookie", "cookie"];

/// Global mutex for thread-safe log writing
static LOG_MUTEX: Mutex<()> = Mutex::new(());

/// Check if HTTP logging is enabled
pub fn is_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        std::env::var(ENV_HTTP_LOG)
            .map(|v| {
                let v = v.trim().to_lowercase();
                v == "1" || v == "true" || v == "yes" || v == "on"
            })
            .unwrap_or(false)
    })
}

/// Get log file path, rooted at `base_dir` (current directory if `None`)
fn get_log_file_path(base_dir: Option<&Path>) -> PathBuf {
    let log_dir = match base_dir {
        Some(base) => base.join(LOG_DIR_NAME),
        None => PathBuf::from(LOG_DIR_NAME),
    };
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            warn!("Failed to create {} directory: {}", LOG_DIR_NAME, e);
        }
    }
    log_dir.join(LOG_FILE_NAME)
}

/// HTTP request log entry
pub struct HttpRequestLog {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// HTTP response log entry
pub struct HttpResponseLog {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Log an HTTP request and response
pub fn log_request(
    base_dir: Option<&Path>,
    request: &HttpRequestLog,
    response: Option<&HttpResponseLog>,
    duration_ms: u64,
    error: Option<&str>,
) {
    if !is_enabled() {
        return;
    }
    write_entry(&get_log_file_path(base_dir), request, response, duration_ms, error);
}

/// Render and append one log entry. Split from `log_request` so tests can
/// target a temp directory without flipping the process-wide enable flag.
pub fn write_entry(
    log_path: &Path,
    request: &HttpRequestLog,
    response: Option<&HttpResponseLog>,
    duration_ms: u64,
    error: Option<&str>,
) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let separator = "=".repeat(80);

    let mut log_content = String::new();
    log_content.push_str(&format!(
        "\n{}\n[{}] {} {}\n{}\n",
        separator, timestamp, request.method, request.url, separator
    ));

    // Request headers
    log_content.push_str("\n--- Request Headers ---\n");
    for (name, value) in &request.headers {
        let display_value = mask_sensitive_header(name, value);
        log_content.push_str(&format!("{}: {}\n", name, display_value));
    }

    // Request body
    if let Some(body) = &request.body {
        log_content.push_str("\n--- Request Body ---\n");
        log_content.push_str(&format_body(body));
        log_content.push('\n');
    }

    // Response
    if let Some(resp) = response {
        log_content.push_str(&format!("\n--- Response ({}ms) ---\n", duration_ms));
        log_content.push_str(&format!("Status: {}\n", resp.status));

        log_content.push_str("\n--- Response Headers ---\n");
        for (name, value) in &resp.headers {
            let display_value = mask_sensitive_header(name, value);
            log_content.push_str(&format!("{}: {}\n", name, display_value));
        }

        if let Some(body) = &resp.body {
            log_content.push_str("\n--- Response Body ---\n");
            log_content.push_str(&format_body(body));
            log_content.push('\n');
        }
    }

    // Error
    if let Some(err) = error {
        log_content.push_str(&format!("\n--- Error ({}ms) ---\n", duration_ms));
        log_content.push_str(err);
        log_content.push('\n');
    }

    log_content.push_str(&format!("\n{}\n", "=".repeat(80)));

    if let Err(e) = write_log(log_path, &log_content) {
        warn!("Failed to write HTTP log: {}", e);
    }
}

/// Write log content to file (thread-safe)
fn write_log(path: &Path, content: &str) -> std::io::Result<()> {
    // Acquire lock to prevent interleaved writes from concurrent requests
    let _guard = LOG_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Check if a header is sensitive and should be masked
fn is_sensitive_header(name: &str) -> bool {
    let name_lower = name.to_lowercase();
    SENSITIVE_HEADERS.iter().any(|h| name_lower == *h)
}

/// Mask sensitive header values
fn mask_sensitive_header(name: &str, value: &str) -> String {
    if is_sensitive_header(name) {
        "****".to_string()
    } else {
        value.to_string()
    }
}

/// Format body for logging with truncation (UTF-8 safe)
fn format_body(body: &str) -> String {
    // Try to parse and pretty-print JSON
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let pretty = serde_json::to_string_pretty(&json).unwrap_or_else(|_| body.to_string());
        truncate_utf8_safe(&pretty, MAX_BODY_SIZE)
    } else {
        // Non-JSON body, truncate if needed
        truncate_utf8_safe(body, MAX_BODY_SIZE)
    }
}

/// Truncate string at UTF-8 character boundary (safe for multi-byte chars)
fn truncate_utf8_safe(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    // Find the last valid UTF-8 character boundary before max_len
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...\n[truncated, total {} bytes]", &s[..end], s.len())
}

/// Extract headers from a reqwest Response for logging
pub fn extract_response_headers(response: &reqwest::Response) -> Vec<(String, String)> {
    response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or("<binary>").to_string(),
            )
        })
        .collect()
}
