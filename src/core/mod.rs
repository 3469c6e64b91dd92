// src/core/mod.rs

pub mod engine;
pub mod record;
pub mod store;
pub mod translator;
pub mod types;
