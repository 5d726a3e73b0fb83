pub mod editor;
pub mod filter;
pub mod log;
pub mod stats;
pub mod store;
