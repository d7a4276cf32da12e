//! Registration request and the validated user it produces

use serde::Deserialize;

use super::ValidationError;

/// Registration form as submitted by the client.
///
/// Missing fields decode as empty strings and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationRequest {
    /// Decode a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Check the password confirmation and drop it.
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(NewUser {
            name: self.name,
            email: self.email,
            username: self.username,
            password: self.password,
        })
    }
}

/// A user row ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
    username: String,
    password: String,
}

impl NewUser {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
