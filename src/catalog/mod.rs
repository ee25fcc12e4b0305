pub mod backend;
pub mod error;
pub mod fixtures;
pub mod interface;
pub mod models;
