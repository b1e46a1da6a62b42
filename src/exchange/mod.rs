pub mod factory;
pub mod traits;
pub mod types;

pub mod symbols;

pub mod binance;
