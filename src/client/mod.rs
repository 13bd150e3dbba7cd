//! # Upstream Recipe API Client
//!
//! HTTP client for the third-party recipe-search API, wrapping every call
//! in a bounded-retry transport.
//!
//! ## Modules
//!
//! - [`client`] - The client itself: payload construction and the retry loop
//! - [`error`] - Tagged failure kinds returned to the web handler
//! - [`retry`] - Retry budget and exponential backoff schedule
//! - [`types`] - Search input, result, and wire types
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_finder::client::{RecipeClient, RetryPolicy, SearchQuery};
//! use recipe_finder::config::UpstreamConfig;
//!
//! # async fn example() -> Result<(), recipe_finder::client::SearchError> {
//! let client = RecipeClient::new(&UpstreamConfig::default(), RetryPolicy::default());
//!
//! let query = SearchQuery {
//!     dish_name: "pasta".to_string(),
//!     ..Default::default()
//! };
//! let page = client.search(&query).await?;
//! println!("Found {} recipes", page.results.len());
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod error;
pub mod retry;
pub mod types;

pub use client::RecipeClient;
pub use error::SearchError;
pub use retry::RetryPolicy;
pub use types::*;
