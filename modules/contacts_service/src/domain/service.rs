//! Domain service - turns repository outcomes into contract results

use super::birthdays::BirthdayWindow;
use super::repository::ContactsRepository;
use crate::config::Config;
use crate::contract::{Contact, ContactPatch, ContactsError, NewContact};
use chrono::NaiveDate;
use std::sync::Arc;

/// Domain service for contact management
pub struct Service {
    repo: Arc<dyn ContactsRepository>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn ContactsRepository>, config: Config) -> Self {
        Self { repo, config }
    }

    /// Create a contact
    pub async fn create_contact(&self, data: NewContact) -> Result<Contact, ContactsError> {
        let contact = self.repo.create(&data).await.map_err(storage_error)?;
        tracing::debug!(contact_id = contact.id, "Contact created");
        Ok(contact)
    }

    /// Get a contact by id
    pub async fn get_contact(&self, id: i32) -> Result<Contact, ContactsError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| ContactsError::not_found(id))
    }

    /// List contacts; `limit` is clamped to `max_list_limit`
    ///
    /// `skip` must fit a signed 64-bit offset, the widest the stores bind.
    pub async fn list_contacts(
        &self,
        skip: u64,
        limit: Option<u64>,
    ) -> Result<Vec<Contact>, ContactsError> {
        if i64::try_from(skip).is_err() {
            return Err(ContactsError::validation(format!(
                "skip must be at most {}",
                i64::MAX
            )));
        }

        let limit = limit
            .unwrap_or(self.config.default_list_limit)
            .min(self.config.max_list_limit);

        self.repo.list(skip, limit).await.map_err(storage_error)
    }

    /// Apply a partial update to a contact
    pub async fn update_contact(
        &self,
        id: i32,
        patch: ContactPatch,
    ) -> Result<Contact, ContactsError> {
        let contact = self
            .repo
            .update(id, &patch)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| ContactsError::not_found(id))?;

        tracing::debug!(contact_id = id, "Contact updated");
        Ok(contact)
    }

    /// Delete a contact and return the value it held before removal
    pub async fn delete_contact(&self, id: i32) -> Result<Contact, ContactsError> {
        let contact = self
            .repo
            .delete(id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| ContactsError::not_found(id))?;

        tracing::debug!(contact_id = id, "Contact deleted");
        Ok(contact)
    }

    /// Substring search across first name, last name and email
    pub async fn search_contacts(&self, query: &str) -> Result<Vec<Contact>, ContactsError> {
        self.repo.search(query).await.map_err(storage_error)
    }

    /// Contacts with a birthday in the window starting at the local date
    pub async fn upcoming_birthdays(&self) -> Result<Vec<Contact>, ContactsError> {
        let today = chrono::Local::now().date_naive();
        self.upcoming_birthdays_from(today).await
    }

    /// Contacts with a birthday in the window starting at `today`
    pub async fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<Contact>, ContactsError> {
        let window = BirthdayWindow::starting(
            today,
            self.config.birthday_window_days,
            self.config.birthday_match,
        );

        self.repo
            .upcoming_birthdays(&window)
            .await
            .map_err(storage_error)
    }
}

fn storage_error(error: anyhow::Error) -> ContactsError {
    tracing::error!("Contacts storage error: {:?}", error);
    ContactsError::from(error)
}
