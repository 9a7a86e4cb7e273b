//! Authorization URL construction and manual redirect capture.
//!
//! No local listener is started: the operator copies the URL the browser
//! ends up on after consent and pastes it back on standard input.

use std::io::{BufRead, Write};

use reqwest::Url;

use crate::auth::error::AuthError;
use crate::config::{OAuthConfig, REDIRECT_URI, SCOPE};

/// Build the authorization endpoint URL the operator opens in a browser.
pub fn build_authorize_url(config: &OAuthConfig) -> Result<Url, AuthError> {
    let params = [
        ("client_id", config.client_id()),
        ("response_type", "code"),
        ("redirect_uri", REDIRECT_URI),
        ("response_mode", "query"),
        ("scope", SCOPE),
    ];
    Url::parse_with_params(&config.authorize_url(), &params).map_err(|err| {
        AuthError::Usage(format!(
            "cannot build authorization URL from tenant {:?}: {err}",
            config.tenant()
        ))
    })
}

/// Pull the authorization code out of the URL the browser was redirected to.
pub fn extract_code(input: &str) -> Result<String, AuthError> {
    let input = input.trim();
    if !input.contains(REDIRECT_URI) {
        return Err(AuthError::Input(format!(
            "resulting URL does not contain expected redirect prefix: {REDIRECT_URI}"
        )));
    }
    let url = Url::parse(input)
        .map_err(|err| AuthError::Input(format!("cannot parse resulting URL: {err}")))?;

    if let Some((_, code)) = url
        .query_pairs()
        .find(|(key, value)| key == "code" && !value.is_empty())
    {
        return Ok(code.into_owned());
    }

    let provider_error = url
        .query_pairs()
        .find(|(key, _)| key == "error_description")
        .or_else(|| url.query_pairs().find(|(key, _)| key == "error"))
        .map(|(_, value)| value.into_owned());
    match provider_error {
        Some(reason) => Err(AuthError::Input(format!(
            "missing authorization code, provider returned: {reason}"
        ))),
        None => Err(AuthError::Input(format!(
            "missing authorization code in result: {}",
            url.query().unwrap_or_default()
        ))),
    }
}

/// Print the authorization URL, wait for one pasted line and extract the code.
///
/// Blocks until the operator submits a line; there is no timeout.
pub fn prompt_for_code<R, W>(
    authorize_url: &Url,
    mut reader: R,
    mut writer: W,
) -> Result<String, AuthError>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        writer,
        "Please visit the following link in a web browser, then paste the resulting URL:\n\n{authorize_url}\n"
    )?;
    write!(writer, "Resulting URL: ")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(AuthError::Input("no URL was entered".to_string()));
    }
    extract_code(&line)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Cursor;

    use super::*;

    fn config() -> OAuthConfig {
        OAuthConfig::new("consumers", "client 123&x").unwrap()
    }

    #[test]
    fn authorize_url_has_exactly_five_params() {
        let url = build_authorize_url(&config()).unwrap();
        assert_eq!(url.host_str(), Some("login.microsoftonline.com"));
        assert_eq!(url.path(), "/consumers/oauth2/v2.0/authorize");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 5);
        let params: HashMap<_, _> = pairs.into_iter().collect();
        assert_eq!(params["client_id"], "client 123&x");
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["redirect_uri"], REDIRECT_URI);
        assert_eq!(params["response_mode"], "query");
        assert_eq!(params["scope"], SCOPE);
    }

    #[test]
    fn authorize_url_percent_encodes_values() {
        let url = build_authorize_url(&config()).unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("client_id=client+123%26x"));
        assert!(query.contains(
            "redirect_uri=https%3A%2F%2Flogin.microsoftonline.com%2Fcommon%2Foauth2%2Fnativeclient"
        ));
        assert!(!query.contains(' '));
    }

    #[test]
    fn extracts_code_from_redirect() {
        let code = extract_code(
            "https://login.microsoftonline.com/common/oauth2/nativeclient?code=ABC123&state=xyz",
        )
        .unwrap();
        assert_eq!(code, "ABC123");
    }

    #[test]
    fn first_code_value_wins_and_whitespace_is_trimmed() {
        let code = extract_code(
            "  https://login.microsoftonline.com/common/oauth2/nativeclient?code=first&code=second\n",
        )
        .unwrap();
        assert_eq!(code, "first");
    }

    #[test]
    fn rejects_foreign_redirect() {
        let err = extract_code("https://example.com/callback?code=ABC123").unwrap_err();
        assert!(matches!(err, AuthError::Input(ref msg) if msg.contains("redirect prefix")));
    }

    #[test]
    fn rejects_redirect_without_code() {
        let err =
            extract_code("https://login.microsoftonline.com/common/oauth2/nativeclient?state=xyz")
                .unwrap_err();
        assert!(
            matches!(err, AuthError::Input(ref msg) if msg.contains("missing authorization code"))
        );
    }

    #[test]
    fn blank_code_counts_as_missing() {
        let err = extract_code(
            "https://login.microsoftonline.com/common/oauth2/nativeclient?code=&state=xyz",
        )
        .unwrap_err();
        assert!(
            matches!(err, AuthError::Input(ref msg) if msg.contains("missing authorization code"))
        );
    }

    #[test]
    fn blank_code_is_skipped_for_later_value() {
        let code = extract_code(
            "https://login.microsoftonline.com/common/oauth2/nativeclient?code=&code=LATER",
        )
        .unwrap();
        assert_eq!(code, "LATER");
    }

    #[test]
    fn surfaces_provider_error_description() {
        let err = extract_code(
            "https://login.microsoftonline.com/common/oauth2/nativeclient?error=access_denied&error_description=User+declined",
        )
        .unwrap_err();
        assert!(matches!(err, AuthError::Input(ref msg) if msg.contains("User declined")));
    }

    #[test]
    fn prompt_writes_url_and_reads_one_line() {
        let url = build_authorize_url(&config()).unwrap();
        let input = Cursor::new(
            "https://login.microsoftonline.com/common/oauth2/nativeclient?code=XYZ\nignored\n",
        );
        let mut output = Vec::new();

        let code = prompt_for_code(&url, input, &mut output).unwrap();

        assert_eq!(code, "XYZ");
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with("Please visit the following link"));
        assert!(printed.contains(url.as_str()));
        assert!(printed.ends_with("Resulting URL: "));
    }

    #[test]
    fn prompt_on_closed_input_is_input_error() {
        let url = build_authorize_url(&config()).unwrap();
        let err = prompt_for_code(&url, Cursor::new(""), Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, AuthError::Input(ref msg) if msg == "no URL was entered"));
    }
}
