//! Contract models for contacts service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::NaiveDate;

/// A single address-book entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Store-assigned identifier, immutable once assigned
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthday: NaiveDate,
}

/// Data for creating a new contact (the store assigns the id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthday: NaiveDate,
}

/// Partial update data for a contact
///
/// `None` fields are left untouched by an update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl ContactPatch {
    /// True when the patch carries no field changes
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.birthday.is_none()
    }

    /// Apply present fields onto an existing contact, keeping the rest
    pub fn apply_to(&self, contact: &mut Contact) {
        if let Some(first_name) = &self.first_name {
            contact.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            contact.last_name = last_name.clone();
        }
        if let Some(email) = &self.email {
            contact.email = email.clone();
        }
        if let Some(birthday) = self.birthday {
            contact.birthday = birthday;
        }
    }
}
