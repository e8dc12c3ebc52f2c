use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Stock {
    pub stockid: i64,
    pub name: String,
    pub price: f64,
    pub company: String,
}
