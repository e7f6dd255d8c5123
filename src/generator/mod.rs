// src/generator/mod.rs
pub mod client;
pub mod models;
pub mod prompt;
