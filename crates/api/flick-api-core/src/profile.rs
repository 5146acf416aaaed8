//! Candidate profile data. Opaque to the swipe core beyond being the
//! payload of a committed swipe.

use serde::{Deserialize, Serialize};

/// Stable identifier for a profile.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

impl From<&str> for ProfileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A displayed candidate's data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub age: u8,
    /// Photo URL.
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Kilometers away, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
}
