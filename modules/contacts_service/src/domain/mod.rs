//! Domain layer - repository contract, birthday window and service

pub mod birthdays;
pub mod repository;
pub mod service;

pub use birthdays::{BirthdayMatch, BirthdayWindow};
pub use repository::ContactsRepository;
pub use service::Service;
