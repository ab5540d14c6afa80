pub mod commands;
pub mod config;
pub mod dist;
pub mod runtime;
