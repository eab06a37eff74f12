//! Owlpeer client core
//!
//! The headless client layer for the Owlpeer video-learning platform: an
//! authenticated API client with an opt-in response cache, an endpoint
//! catalog, typed wire models, and one domain service per resource.
//!
//! Wiring happens once at process start: build a [`config::ClientConfig`],
//! construct the [`cache::CacheManager`] (failure here is fatal; nothing
//! works without a cache backend), hand it to an [`api::ApiClient`] behind
//! an `Arc`, spawn the expired-entry sweep, and construct the services.
//!
//! ```no_run
//! use std::sync::Arc;
//! use owlpeer::api::ApiClient;
//! use owlpeer::auth::StaticTokenProvider;
//! use owlpeer::cache::{spawn_sweep_task, CacheManager};
//! use owlpeer::config::ClientConfig;
//! use owlpeer::services::CourseService;
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default();
//! let cache = CacheManager::new(&config)?;
//! let sweep = spawn_sweep_task(cache.clone(), config.sweep_interval);
//! let api = Arc::new(ApiClient::new(&config, cache)?);
//! let tokens = Arc::new(StaticTokenProvider::new("jwt"));
//! let courses = CourseService::new(api.clone(), tokens);
//! let listing = courses.my_courses(false).await?;
//! # sweep.abort();
//! # let _ = listing;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod services;
