use crate::model::Stock as StockModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockResponse {
    #[schema(example = 1)]
    pub stockid: i64,
    #[schema(example = "Acme")]
    pub name: String,
    #[schema(example = 12.5)]
    pub price: f64,
    #[schema(example = "Acme Corp")]
    pub company: String,
}

impl From<StockModel> for StockResponse {
    fn from(value: StockModel) -> Self {
        StockResponse {
            stockid: value.stockid,
            name: value.name,
            price: value.price,
            company: value.company,
        }
    }
}

/// Envelope returned by the mutating endpoints. Zero-valued fields are left
/// out of the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockMessageResponse {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl StockMessageResponse {
    pub fn created(id: i64) -> Self {
        Self {
            id,
            message: "Stock created successfully".into(),
        }
    }

    pub fn updated(id: i64, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "Stock updated successfully. Total rows/record affected {rows_affected}"
            ),
        }
    }

    pub fn deleted(id: i64, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "Stock deleted successfully. Total rows/record affected {rows_affected}"
            ),
        }
    }
}
