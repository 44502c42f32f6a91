//! enhancer-web library - single-page prompt enhancement site

pub mod config;
pub mod http_logger;
pub mod service;
pub mod site;

// Re-export commonly used types
pub use config::{Config, ConfigOptions, DEFAULT_WEBHOOK_URL};
pub use service::{EnhanceError, Enhancement, EnhancementMode, WebhookClient};
pub use site::SiteServer;
