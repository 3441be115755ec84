pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod markdown;
pub mod models;
pub mod prompt;
pub mod provider;
pub mod seed;
pub mod service;
