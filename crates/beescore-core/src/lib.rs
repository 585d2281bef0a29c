//! Core beescore library (config, auth client, session storage).

pub mod auth;
pub mod config;
pub mod session;
