//! HTTP request handlers, one module per resource.

use serde::Deserialize;

/// Query parameter carrying the session PIN, shared by the scoped lookups.
#[derive(Debug, Deserialize)]
pub struct PinParam {
    pub pin: String,
}

pub mod functions;
pub mod instagram_account;
pub mod project;
pub mod project_file;
pub mod session;
pub mod strategy;
pub mod studio;
