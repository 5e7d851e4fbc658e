use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub picture: String,
    pub age: u32,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub city: String,
    pub country: String,
    pub full_address: String,
}
