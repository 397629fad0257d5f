pub mod auth;
pub mod charts;
pub mod config;
pub mod db;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod live;
pub mod models;
pub mod panels;
pub mod stats;
pub mod store;
pub mod templates_structs;
