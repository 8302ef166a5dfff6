pub mod errors;
pub mod filter;
pub mod siop;
pub mod spectrum;
