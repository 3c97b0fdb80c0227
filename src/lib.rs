//! Deployment settings for the coffee shop client, plus the drinks API client
//! and identity provider integration that consume them.

pub mod api;
pub mod auth;
pub mod config;
