pub mod filter;
pub mod labels;
