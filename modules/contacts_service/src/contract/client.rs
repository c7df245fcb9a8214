//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the
//! contacts service. NO HTTP - direct function calls.

use super::{
    error::ContactsError,
    model::{Contact, ContactPatch, NewContact},
};
use async_trait::async_trait;

/// Contacts service API for inter-module communication
#[async_trait]
pub trait ContactsApi: Send + Sync {
    /// Create a contact; the store assigns its id
    async fn create_contact(&self, data: NewContact) -> Result<Contact, ContactsError>;

    /// Get a contact by id
    async fn get_contact(&self, id: i32) -> Result<Contact, ContactsError>;

    /// List contacts with offset/limit
    async fn list_contacts(&self, skip: u64, limit: u64) -> Result<Vec<Contact>, ContactsError>;

    /// Apply a partial update to a contact
    async fn update_contact(&self, id: i32, patch: ContactPatch)
        -> Result<Contact, ContactsError>;

    /// Delete a contact, returning its last value
    async fn delete_contact(&self, id: i32) -> Result<Contact, ContactsError>;

    /// Substring search across first name, last name and email
    async fn search_contacts(&self, query: &str) -> Result<Vec<Contact>, ContactsError>;

    /// Contacts whose birthday falls in the configured upcoming window
    async fn upcoming_birthdays(&self) -> Result<Vec<Contact>, ContactsError>;
}
