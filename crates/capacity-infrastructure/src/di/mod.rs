//! Dependency Injection
//!
//! Composition root: turns an [`AppConfig`](crate::config::AppConfig) into
//! wired providers and the capacity service.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app, init_test_app};
