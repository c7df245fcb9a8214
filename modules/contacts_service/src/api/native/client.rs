//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Contact, ContactPatch, ContactsApi, ContactsError, NewContact};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// Used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ContactsApi for NativeClient {
    async fn create_contact(&self, data: NewContact) -> Result<Contact, ContactsError> {
        self.service.create_contact(data).await
    }

    async fn get_contact(&self, id: i32) -> Result<Contact, ContactsError> {
        self.service.get_contact(id).await
    }

    async fn list_contacts(&self, skip: u64, limit: u64) -> Result<Vec<Contact>, ContactsError> {
        self.service.list_contacts(skip, Some(limit)).await
    }

    async fn update_contact(
        &self,
        id: i32,
        patch: ContactPatch,
    ) -> Result<Contact, ContactsError> {
        self.service.update_contact(id, patch).await
    }

    async fn delete_contact(&self, id: i32) -> Result<Contact, ContactsError> {
        self.service.delete_contact(id).await
    }

    async fn search_contacts(&self, query: &str) -> Result<Vec<Contact>, ContactsError> {
        self.service.search_contacts(query).await
    }

    async fn upcoming_birthdays(&self) -> Result<Vec<Contact>, ContactsError> {
        self.service.upcoming_birthdays().await
    }
}
