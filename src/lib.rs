//! outlook-tokens
//!
//! One-shot OAuth2 authorization-code exchange against the Microsoft
//! identity platform. The operator consents in a browser, pastes the
//! redirect URL back, and the tool writes the initial access and refresh
//! tokens for an unattended SMTP client.
//!
//! # Example
//!
//! ```no_run
//! use outlook_tokens::config::OAuthConfig;
//!
//! # async fn example() -> Result<(), outlook_tokens::auth::AuthError> {
//! let config = OAuthConfig::new("consumers", "my-client-id")?;
//! let stdin = std::io::stdin();
//! outlook_tokens::cli::auth::run(
//!     &config,
//!     std::path::Path::new("tokens.json"),
//!     stdin.lock(),
//!     std::io::stdout(),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod cli;
pub mod config;
