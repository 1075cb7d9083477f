use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub code: String,
    pub codein: String,
    pub bid: String,
    pub create_date: String,
}
