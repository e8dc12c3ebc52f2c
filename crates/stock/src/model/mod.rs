mod stock;

pub use self::stock::Stock;
