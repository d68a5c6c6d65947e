//! Core library functions for the protein network analyzer

pub mod centrality;
pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod inspect;
pub mod prediction;
pub mod server;
pub mod service;
pub mod storage;
pub mod viz;

pub use anyhow::{anyhow, Result};
pub use config::Config;
pub use error::AnalysisError;
pub use service::NetworkAnalyzer;
