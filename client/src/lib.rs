//! A typed client for the read side of the YouTube Data API v3.
//!
//! [`Client`] holds the credentials, the HTTP connection pool, and a cap on concurrent requests.
//! The accessors on it (see [`resources`]) take checked `*ListRequest`s and return decoded list
//! responses from [`models`]:
//!
//! ```no_run
//! use ytdata::resources::VideosListRequest;
//! use ytdata::{Authentication, Client, ClientConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::open(
//!     Authentication::ApiKey("...".into()),
//!     ClientConfig::default(),
//! )?;
//! let request = VideosListRequest::builder()
//!     .chart("mostPopular")
//!     .region_code("NZ")
//!     .part("snippet")
//!     .build()?;
//! for video in client.videos().list(&request).await?.items {
//!     println!("{:?}", video.snippet.and_then(|s| s.title));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Responses are decoded with [`codec`], which maps between records and JSON objects.

mod client;
mod error;
#[cfg(test)]
mod mock;
pub mod models;
pub mod params;
pub mod resources;

pub use client::{Authentication, Client, ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};
pub use error::{Error, ParamsError};
pub use params::{ListRequest, Query, Resource};

pub use ytdata_codec as codec;
pub use ytdata_codec::parse_duration;
