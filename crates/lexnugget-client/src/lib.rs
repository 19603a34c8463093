//! HTTP boundary to the nugget backend: case digests, bookmark toggling,
//! and paginated entity lists.

mod client;
mod endpoints;
mod error;

pub use client::{ApiClient, BearerToken};
pub use error::ClientError;
