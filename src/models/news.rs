use serde::{Deserialize, Serialize};

pub const NO_DESCRIPTION: &str = "No description available.";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: Option<String>,
    pub image: Option<String>,
    pub description: String,
    pub url: Option<String>,
}
