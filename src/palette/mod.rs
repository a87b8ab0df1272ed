pub mod cache;
pub mod extract;
