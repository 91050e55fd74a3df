pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod health;
pub mod infra;
pub mod middleware;
pub mod rate_limit;
pub mod router;
pub mod state;
pub mod usecase;
