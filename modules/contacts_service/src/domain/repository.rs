//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use super::birthdays::BirthdayWindow;
use crate::contract::{Contact, ContactPatch, NewContact};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for contact records
///
/// Identifier-scoped lookups return `Ok(None)` for a missing id; absence is
/// a normal outcome, only store failures are errors.
#[async_trait]
pub trait ContactsRepository: Send + Sync {
    /// Insert a new row and return it with its assigned id
    async fn create(&self, data: &NewContact) -> Result<Contact>;

    /// Find a contact by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Contact>>;

    /// List contacts ordered by id with offset/limit
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Contact>>;

    /// Apply present patch fields; `None` if the id does not exist
    async fn update(&self, id: i32, patch: &ContactPatch) -> Result<Option<Contact>>;

    /// Remove a contact and return its last value; `None` if the id does not exist
    async fn delete(&self, id: i32) -> Result<Option<Contact>>;

    /// Contacts whose first name, last name or email contains `query`
    async fn search(&self, query: &str) -> Result<Vec<Contact>>;

    /// Contacts whose birthday falls inside `window`
    async fn upcoming_birthdays(&self, window: &BirthdayWindow) -> Result<Vec<Contact>>;
}
