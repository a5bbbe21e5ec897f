use serde::{Deserialize, Serialize};

use super::MissingFields;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub text: String,
    /// Author reference. Not checked against existing users.
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPost {
    pub text: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

impl NewPost {
    pub fn from_input(text: Option<String>, user_id: Option<i64>) -> Result<Self, MissingFields> {
        let mut missing = Vec::new();
        let text = text.filter(|t| !t.is_empty());
        if text.is_none() {
            missing.push("text");
        }
        if user_id.is_none() {
            missing.push("userId");
        }
        match (text, user_id) {
            (Some(text), Some(user_id)) => Ok(Self { text, user_id }),
            _ => Err(MissingFields(missing)),
        }
    }

    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            text: self.text,
            user_id: self.user_id,
        }
    }
}
