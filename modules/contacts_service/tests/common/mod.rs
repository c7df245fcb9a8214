//! Common test utilities and shared contact fixtures
#![allow(dead_code)]

use chrono::NaiveDate;
use contacts_service::{ContactsServiceModule, NewContact};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn new_contact(first: &str, last: &str, email: &str, birthday: NaiveDate) -> NewContact {
    NewContact {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        birthday,
    }
}

/// Small address book used across suites
pub struct TestAddressBook {
    pub ann: NewContact,
    pub bob: NewContact,
    pub carl: NewContact,
}

impl TestAddressBook {
    pub fn new() -> Self {
        Self {
            ann: new_contact("Ann", "Lee", "ann@x.com", date(1990, 5, 1)),
            bob: new_contact("Bob", "Smith", "bob@y.com", date(1985, 12, 31)),
            carl: new_contact("Carl", "Diaz", "carl@z.org", date(2001, 1, 3)),
        }
    }

    pub fn all(&self) -> Vec<NewContact> {
        vec![self.ann.clone(), self.bob.clone(), self.carl.clone()]
    }
}

impl Default for TestAddressBook {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh in-memory SQLite database with the contacts schema in place
///
/// One pooled connection only: every SQLite `:memory:` connection is its own
/// database.
pub async fn sqlite_memory_db() -> Arc<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to open in-memory SQLite");
    ContactsServiceModule::default()
        .migrate(&db)
        .await
        .expect("Failed to run contacts migrations");

    Arc::new(db)
}
