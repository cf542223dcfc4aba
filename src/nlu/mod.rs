//! Service layer for the external sentiment analysis capability.
//! Provides the `credentials` loader and the blocking `client` for the
//! Natural Language Understanding HTTP endpoint.
pub mod client;
pub use client::{NluClient, NluError, SentimentScorer, ServiceConfig};

pub mod credentials;
pub use credentials::Credentials;
