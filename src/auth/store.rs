use std::fs;
use std::path::Path;

use super::error::AuthError;
use super::token::TokenRecord;

/// Write the record as JSON, replacing whatever is at `path`.
pub fn write_token_file(path: &Path, record: &TokenRecord) -> Result<(), AuthError> {
    let serialized = serde_json::to_string(record)
        .map_err(|err| AuthError::Io(format!("cannot serialize tokens: {err}")))?;
    fs::write(path, serialized).map_err(|err| io_error("write", path, err))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|err| io_error("set permissions on", path, err))?;
    }
    Ok(())
}

/// Read a record previously written by [`write_token_file`].
pub fn read_token_file(path: &Path) -> Result<TokenRecord, AuthError> {
    let raw = fs::read_to_string(path).map_err(|err| io_error("read", path, err))?;
    serde_json::from_str(&raw)
        .map_err(|err| AuthError::Io(format!("cannot parse {}: {err}", path.display())))
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> AuthError {
    AuthError::Io(format!("cannot {action} {}: {err}", path.display()))
}
