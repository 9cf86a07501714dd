pub mod filter;
pub mod table;
