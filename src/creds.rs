//! Credential storage with reversible encoding.
//!
//! The stored values are obscured, NOT encrypted: zlib-compressed at the
//! maximum level and URL-safe base64 encoded. Anyone holding the file can
//! recover the password; the transform only keeps it out of casual view.
//! `encode`/`decode` are the single seam to swap in real secret management.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::fmt;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::Error;

/// A username/password pair loaded from (or persisted to) the local store.
pub struct Credential {
    /// Login name for the controller.
    pub username: String,
    password: String,
}

impl Credential {
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep the password out of debug logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Compress and encode a value for storage.
pub fn encode(plain: &str) -> io::Result<String> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(plain.as_bytes())?;
    let compressed = encoder.finish()?;
    Ok(URL_SAFE.encode(compressed))
}

/// Decode and decompress a stored value.
pub fn decode(obscured: &str) -> Result<String, String> {
    let compressed = URL_SAFE
        .decode(obscured.trim())
        .map_err(|e| format!("invalid base64: {e}"))?;
    let mut decoder = ZlibDecoder::new(compressed.as_slice());
    let mut plain = String::new();
    decoder
        .read_to_string(&mut plain)
        .map_err(|e| format!("invalid zlib stream: {e}"))?;
    Ok(plain)
}

/// Load credentials from `path`: one encoded username line, one encoded
/// password line.
pub fn load(path: &str) -> Result<Credential, Error> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::CredentialFile {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let mut lines = content.lines();
    let username_line = lines.next().ok_or_else(|| Error::CredentialFile {
        path: path.to_string(),
        reason: "missing username line".to_string(),
    })?;
    let password_line = lines.next().ok_or_else(|| Error::CredentialFile {
        path: path.to_string(),
        reason: "missing password line".to_string(),
    })?;

    let username = decode(username_line).map_err(|reason| Error::CredentialFile {
        path: path.to_string(),
        reason: format!("username: {reason}"),
    })?;
    let password = decode(password_line).map_err(|reason| Error::CredentialFile {
        path: path.to_string(),
        reason: format!("password: {reason}"),
    })?;

    Ok(Credential { username, password })
}

/// Persist encoded credentials to `path`.
pub fn store(path: &str, username: &str, password: &str) -> Result<(), Error> {
    let file_error = |reason: String| Error::CredentialFile {
        path: path.to_string(),
        reason,
    };
    let encoded_username = encode(username).map_err(|e| file_error(e.to_string()))?;
    let encoded_password = encode(password).map_err(|e| file_error(e.to_string()))?;
    std::fs::write(path, format!("{encoded_username}\n{encoded_password}\n"))
        .map_err(|e| file_error(e.to_string()))
}

/// Load credentials from `path`, prompting for and persisting them first if
/// the file does not exist yet.
///
/// The re-load after storing doubles as a round-trip check of the encoding.
pub fn load_or_create(path: &str) -> Result<Credential, Error> {
    if Path::new(path).exists() {
        log::info!("Reading credentials from {path}");
        return load(path);
    }

    log::warn!("Credential file not found: {path}");
    let (username, password) = prompt().map_err(|e| Error::CredentialFile {
        path: path.to_string(),
        reason: format!("prompt failed: {e}"),
    })?;
    log::warn!("Writing credentials to {path}");
    store(path, &username, &password)?;
    load(path)
}

/// Ask the operator for a username (echoed) and password (not echoed).
fn prompt() -> io::Result<(String, String)> {
    print!("Enter your username: ");
    io::stdout().flush()?;
    let mut username = String::new();
    io::stdin().read_line(&mut username)?;

    let password = rpassword::prompt_password("Enter your password: ")?;

    Ok((username.trim().to_string(), password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_decode_round_trip() {
        let plain = "s3cret-P@ssw0rd!";
        let obscured = encode(plain).expect("Error encoding");
        assert_ne!(obscured, plain, "Encoded form must differ from the input");
        assert_eq!(decode(&obscured).expect("Error decoding"), plain);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode("not/base64!!");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("base64"));
    }

    #[test]
    fn test_decode_rejects_uncompressed_payload() {
        // Valid base64 of bytes that are not a zlib stream.
        let obscured = URL_SAFE.encode(b"plain text, no zlib header");
        let result = decode(&obscured);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("zlib"));
    }

    #[test]
    fn test_store_then_load_round_trip() {
        let dir = tempfile::tempdir().expect("Error creating temp dir");
        let path = dir.path().join("vManageCreds.txt");
        let path = path.to_str().expect("Bad temp path");

        store(path, "operator", "pa55word").expect("Error storing credentials");

        let first = load(path).expect("Error loading credentials");
        let second = load_or_create(path).expect("Error re-loading credentials");

        assert_eq!(first.username, "operator");
        assert_eq!(first.password(), "pa55word");
        assert_eq!(second.username, first.username);
        assert_eq!(second.password(), first.password());
    }

    #[test]
    fn test_load_missing_password_line() {
        let dir = tempfile::tempdir().expect("Error creating temp dir");
        let path = dir.path().join("truncated.txt");
        let encoded = encode("operator").expect("Error encoding");
        std::fs::write(&path, format!("{encoded}\n")).expect("Error writing file");

        let result = load(path.to_str().expect("Bad temp path"));
        assert!(matches!(result, Err(Error::CredentialFile { .. })));
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().expect("Error creating temp dir");
        let path = dir.path().join("corrupt.txt");
        std::fs::write(&path, "!!!!\n????\n").expect("Error writing file");

        let result = load(path.to_str().expect("Bad temp path"));
        assert!(matches!(result, Err(Error::CredentialFile { .. })));
    }

    #[test]
    fn test_debug_redacts_password() {
        let credential = Credential {
            username: "operator".to_string(),
            password: "pa55word".to_string(),
        };
        let debug = format!("{credential:?}");
        assert!(debug.contains("operator"));
        assert!(!debug.contains("pa55word"), "Password leaked into Debug");
    }
}
