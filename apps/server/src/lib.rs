pub mod api;
pub mod config;
pub mod market;
pub mod upstream;
