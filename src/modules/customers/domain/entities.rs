use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer record. Email is the dedup key, compared case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

impl Customer {
    pub fn new(name: String, phone: String, address: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            address,
            email,
        }
    }

    pub fn email_matches(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}
