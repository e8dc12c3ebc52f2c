mod stock;

pub use self::stock::{StockMessageResponse, StockResponse};
