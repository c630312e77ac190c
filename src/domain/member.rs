use serde::{Deserialize, Serialize};

use super::MemberId;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub paid: bool,
}

impl Member {
    pub fn new(id: MemberId, registration: Registration) -> Self {
        Self {
            id,
            name: registration.name,
            email: registration.email,
            phone: registration.phone,
            paid: false,
        }
    }
}

/// Contact fields captured from the registration form. The form is trusted
/// as-is: any string is accepted, empty strings included.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Registration {
    pub fn new(name: String, email: String, phone: String) -> Self {
        Self { name, email, phone }
    }
}
