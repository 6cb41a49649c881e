use serde::Serialize;

/// Display color handed to every anonymous identity.
pub const ANONYMOUS_COLOR: &str = "#6366f1";

const USERNAME_PREFIX: &str = "Anon_";
const SUFFIX_CHARS: usize = 4;

/// Display identity derived from a caller-held secret. Nothing is stored;
/// the same secret always yields the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnonymousIdentity {
    pub id: String,
    pub username: String,
    pub color: String,
}

impl AnonymousIdentity {
    pub fn from_secret(secret: &str) -> Self {
        let skip = secret.chars().count().saturating_sub(SUFFIX_CHARS);
        let suffix: String = secret.chars().skip(skip).collect();

        Self {
            id: secret.to_string(),
            username: format!("{}{}", USERNAME_PREFIX, suffix),
            color: ANONYMOUS_COLOR.to_string(),
        }
    }
}
