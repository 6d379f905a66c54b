//! Stamp providers backed by the data science scoring service

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

/// ENS platform binding
pub mod ens;

/// Ethereum account analysis stamps
pub mod eth;

/// Scoring service client
pub mod model_api;

pub mod platform;
pub mod provider;
pub mod types;
