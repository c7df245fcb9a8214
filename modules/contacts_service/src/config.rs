//! Configuration for contacts service module

use crate::domain::birthdays::BirthdayMatch;
use serde::{Deserialize, Serialize};

/// Contacts service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page size used by list when the caller does not pass `limit`
    #[serde(default = "default_list_limit")]
    pub default_list_limit: u64,

    /// Upper bound applied to any requested `limit`
    #[serde(default = "default_max_list_limit")]
    pub max_list_limit: u64,

    /// Length of the upcoming-birthdays window in days (today inclusive)
    #[serde(default = "default_birthday_window_days")]
    pub birthday_window_days: u32,

    /// How stored birthdays are compared against the window
    #[serde(default)]
    pub birthday_match: BirthdayMatch,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_list_limit: default_list_limit(),
            max_list_limit: default_max_list_limit(),
            birthday_window_days: default_birthday_window_days(),
            birthday_match: BirthdayMatch::default(),
        }
    }
}

fn default_list_limit() -> u64 {
    100
}

fn default_max_list_limit() -> u64 {
    1000
}

fn default_birthday_window_days() -> u32 {
    7
}
