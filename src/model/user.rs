use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A registered user. The id is assigned by the user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl User {
    /// A user that has not been stored yet (id 0).
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Body of `POST /users`.
///
/// Missing fields decode to empty values and any `id` the client sends is
/// accepted but discarded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
}

impl From<NewUser> for User {
    fn from(input: NewUser) -> Self {
        User::new(input.name, input.email)
    }
}
