use serde::{Deserialize, Serialize};

use super::MissingFields;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Mutable fields of a user, as handed to the gateway on insert and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    pub fn from_input(name: Option<String>) -> Result<Self, MissingFields> {
        match name {
            Some(name) if !name.is_empty() => Ok(Self { name }),
            _ => Err(MissingFields(vec!["name"])),
        }
    }

    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
        }
    }
}
