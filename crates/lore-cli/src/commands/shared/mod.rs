pub mod found;
pub mod limit;
pub mod parse;
