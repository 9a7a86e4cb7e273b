use std::fmt;

use serde::{Deserialize, Serialize};

/// Initial credentials handed to the mail-sending client.
///
/// `expiry` is always 0 so the consumer refreshes before first use.
///
/// # Example
/// ```
/// use outlook_tokens::auth::TokenRecord;
///
/// let record = TokenRecord::from_exchange("access", "refresh");
/// assert_eq!(record.expiry(), 0);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    access_token: String,
    refresh_token: String,
    expiry: i64,
}

impl TokenRecord {
    pub fn from_exchange(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expiry: 0,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn expiry(&self) -> i64 {
        self.expiry
    }
}

impl fmt::Debug for TokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRecord")
            .field("access_token", &"..")
            .field("refresh_token", &"..")
            .field("expiry", &self.expiry)
            .finish()
    }
}
