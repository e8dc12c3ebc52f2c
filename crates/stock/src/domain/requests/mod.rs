mod stock;

pub use self::stock::{CreateStockRequest, UpdateStockRequest};
