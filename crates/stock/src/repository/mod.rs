mod command;
mod query;

pub use self::command::StockCommandRepository;
pub use self::query::StockQueryRepository;
