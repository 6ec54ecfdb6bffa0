pub mod config;
pub mod error;
pub mod fetch;
pub mod forecast;
pub mod infra;
pub mod output;
pub mod parser;
pub mod ranking;
pub mod services;
