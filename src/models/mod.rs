pub mod board;
pub mod conditions;
pub mod mood;
pub mod session;
