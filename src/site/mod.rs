//! Site module - serves the single page and its enhancement API

pub mod server;
mod templates;

pub use server::SiteServer;
pub use templates::PAGE_HTML;
