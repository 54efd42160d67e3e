pub mod backend;
pub mod bag;
pub mod error;
