// src/config/mod.rs

pub mod algos_config;

pub use algos_config::AlgosConfig;
