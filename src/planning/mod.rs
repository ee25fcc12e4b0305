pub mod consts;
pub mod grouping;
pub mod handlers;
pub mod models;
pub mod radius;
pub mod requests;
pub mod responses;
