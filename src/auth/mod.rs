//! OAuth2 authorization-code flow against the Microsoft identity platform.

pub mod authorize;
pub mod error;
pub mod exchange;
pub mod store;
pub mod token;

pub use authorize::{build_authorize_url, extract_code, prompt_for_code};
pub use error::{AuthError, ErrorKind};
pub use exchange::TokenExchanger;
pub use store::{read_token_file, write_token_file};
pub use token::TokenRecord;
