//! Command-line surface.

pub mod auth;

use std::path::PathBuf;

use clap::Parser;

use crate::auth::AuthError;
use crate::config::{OAuthConfig, DEFAULT_TENANT};

/// Obtain initial Outlook SMTP OAuth2 tokens through a browser consent.
#[derive(Parser, Debug)]
#[command(
    name = "outlook-tokens",
    version,
    about = "Obtain initial OAuth2 tokens for sending mail through Outlook"
)]
pub struct Cli {
    /// Directory tenant (consumers, organizations, common, or a tenant id)
    #[arg(long, default_value = DEFAULT_TENANT)]
    pub tenant: String,

    /// Application (client) ID registered with Microsoft
    #[arg(long = "client_id", visible_alias = "client-id", default_value = "")]
    pub client_id: String,

    /// Log request progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// File the initial tokens are written to
    pub output_token_file: PathBuf,
}

impl Cli {
    /// Validate the parsed options into a run configuration.
    pub fn to_config(&self) -> Result<OAuthConfig, AuthError> {
        OAuthConfig::new(self.tenant.as_str(), self.client_id.as_str())
    }
}
