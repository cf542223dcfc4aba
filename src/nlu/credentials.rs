use std::fs;
use std::path::Path;

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Service principal in the BLUEMIX JSON credential format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Load credentials from a BLUEMIX-format JSON file.
    /// Unknown fields in the file (service urls and the like) are ignored.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Loading credentials from file {:?}", path.as_ref());
        let raw = fs::read_to_string(path)?;
        let creds: Credentials = serde_json::from_str(&raw)?;
        Ok(creds)
    }

    /// `Authorization` header value for HTTP Basic auth
    pub fn basic_auth_header(&self) -> String {
        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_bluemix_format_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cred.json");
        fs::write(
            &path,
            r#"{"username": "scanner", "password": "hunter2", "url": "https://example.org"}"#,
        )
        .unwrap();

        let creds = Credentials::from_file(&path).unwrap();
        assert_eq!(creds.username, "scanner");
        assert_eq!(creds.password, "hunter2");
    }

    #[test]
    fn rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cred.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(Credentials::from_file(&path).is_err());
    }

    #[test]
    fn basic_auth_header_is_encoded() {
        let creds = Credentials {
            username: "user".to_string(),
            password: "pass".to_string(),
        };
        assert_eq!(creds.basic_auth_header(), "Basic dXNlcjpwYXNz");
    }
}
