//! Contacts Service Module
//!
//! Contact list management over a relational store: CRUD, substring search
//! and upcoming-birthday queries, exposed over REST and an in-process client.

// Public exports
pub mod contract;
pub use contract::{
    client::ContactsApi, error::ContactsError, Contact, ContactPatch, NewContact,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::ContactsServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
