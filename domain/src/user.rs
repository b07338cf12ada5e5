use std::fmt;

use in_memory_adapter::InMemoryRepo;
use serde::{Deserialize, Deserializer, Serialize};

use crate::portfolio::Portfolio;

/// Canonical user identifier.
///
/// Source data mixes JSON numbers and strings for ids, so both are normalized
/// to their trimmed textual form: `1` and `"1"` are the same user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(number) => Self::new(number.to_string()),
            RawId::Text(text) => Self::new(text),
        })
    }
}

/// Contact fields of a directory entry. Any of them may be missing in the
/// source data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
}

impl Profile {
    #[must_use]
    pub fn firstname(&self) -> &str {
        self.firstname.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn lastname(&self) -> &str {
        self.lastname.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    /// `lastname, firstname`, as shown in the user list.
    #[must_use]
    pub fn list_label(&self) -> String {
        format!("{}, {}", self.lastname(), self.firstname())
    }

    /// `firstname lastname`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname(), self.lastname())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(rename = "user", default)]
    pub profile: Profile,
    #[serde(default)]
    pub portfolio: Portfolio,
}

pub type UserRepo = InMemoryRepo<User, UserId>;

pub trait UserRepoExt {
    /// Finds a user by identifier.
    fn find_user(&self, id: &UserId) -> Option<&User>;

    /// Overwrites every editable profile field of the user.
    /// Returns `false` if no user has this identifier.
    fn update_profile(&mut self, id: &UserId, profile: Profile) -> bool;

    /// Removes the user, returning the removed record.
    fn delete_user(&mut self, id: &UserId) -> Option<User>;
}

impl UserRepoExt for UserRepo {
    fn find_user(&self, id: &UserId) -> Option<&User> {
        self.get(id)
    }

    fn update_profile(&mut self, id: &UserId, profile: Profile) -> bool {
        if let Some(user) = self.get_mut(id) {
            user.profile = profile;
            true
        } else {
            false
        }
    }

    fn delete_user(&mut self, id: &UserId) -> Option<User> {
        self.remove(id)
    }
}
