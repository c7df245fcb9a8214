//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

impl From<contract::Contact> for ContactDto {
    fn from(contact: contract::Contact) -> Self {
        Self {
            id: contact.id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            birthday: contact.birthday,
        }
    }
}

impl From<CreateContactRequest> for contract::NewContact {
    fn from(req: CreateContactRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            birthday: req.birthday,
        }
    }
}

impl From<UpdateContactRequest> for contract::ContactPatch {
    fn from(req: UpdateContactRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            birthday: req.birthday,
        }
    }
}

/// Convert a list of contract contacts into response DTOs
pub fn to_dtos(contacts: Vec<contract::Contact>) -> Vec<ContactDto> {
    contacts.into_iter().map(ContactDto::from).collect()
}
