use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /stock`. Missing fields fall back to their zero value and a
/// client-supplied `stockid` is ignored; the database assigns the id. A `null`
/// body decodes to the zero-valued request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateStockRequest {
    #[schema(example = "Acme")]
    pub name: String,

    #[schema(example = 12.5)]
    pub price: f64,

    #[schema(example = "Acme Corp")]
    pub company: String,
}

/// Body of `PUT /stock/{id}`. All three fields overwrite the stored row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateStockRequest {
    #[serde(skip)]
    pub id: i64,

    #[schema(example = "Acme")]
    pub name: String,

    #[schema(example = 20.0)]
    pub price: f64,

    #[schema(example = "Acme Corp")]
    pub company: String,
}
