mod command;
mod query;

pub use self::command::{DynStockCommandRepository, StockCommandRepositoryTrait};
pub use self::query::{DynStockQueryRepository, StockQueryRepositoryTrait};
