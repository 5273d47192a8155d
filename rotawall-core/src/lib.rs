pub mod backend;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod resize;
pub mod sources;
pub mod writer;
