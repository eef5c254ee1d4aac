pub mod compdb;
pub mod filter;
