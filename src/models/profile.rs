//! `profile` payload.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,

    /// Short unique string identifying the person.
    pub username: String,

    pub gender: Gender,
}
