#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// User role. Supplied by the caller at registration — there is no
/// enforcement beyond the enum itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Applicant,
    Recruiter,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Applicant => "applicant",
            Role::Recruiter => "recruiter",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

/// Registration form as submitted. `confirm_password` only exists to be
/// checked against `password`; neither is stored anywhere.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Partial user update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<Role>,
}

impl User {
    pub fn apply(&mut self, updates: UserUpdate) {
        if let Some(email) = updates.email {
            self.email = email;
        }
        if let Some(full_name) = updates.full_name {
            self.full_name = full_name;
        }
        if let Some(role) = updates.role {
            self.role = role;
        }
    }
}
