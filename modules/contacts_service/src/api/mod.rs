//! API layer - REST transport and native in-process client

pub mod native;
pub mod rest;
