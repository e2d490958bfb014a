use serde::{Deserialize, Serialize};

/// Build metadata reported by `GET /version`. Constructed once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub sha1: String,
    pub version: String,
}

impl Build {
    pub fn new(sha1: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            sha1: sha1.into(),
            version: version.into(),
        }
    }
}

impl Default for Build {
    fn default() -> Self {
        Self::new(
            option_env!("HASHBANG_SHA1").unwrap_or("dev"),
            env!("CARGO_PKG_VERSION"),
        )
    }
}
