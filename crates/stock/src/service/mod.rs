mod command;
mod query;

pub use self::command::StockCommandService;
pub use self::query::StockQueryService;
