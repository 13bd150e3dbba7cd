//! # Recipe Finder
//!
//! A small web front end for a third-party recipe-search API. It consists of
//! two components:
//!
//! ## Client Module
//!
//! The [`client`] module queries the upstream recipe-search endpoint through
//! a bounded-retry transport and maps the JSON response into a result list.
//!
//! ## Server Module
//!
//! The [`server`] module serves the landing page and the search results
//! page, delegating each search to the client and degrading to an empty
//! results page when the upstream is unreachable.
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_finder::{config::Config, server};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_env();
//! server::start_server(config).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod server;
pub mod views;

pub use client::RecipeClient;
pub use config::Config;
