//! Error types surfaced by the analysis operations

use thiserror::Error;

/// Errors returned to callers of the analysis operations.
///
/// Interactions that reference unknown proteins are not represented here:
/// the graph builder drops them without failing the request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The requested centrality metric does not exist
    #[error("Invalid metric: {0}")]
    InvalidMetric(String),

    /// The requested protein is not part of the network
    #[error("Protein not found: {0}")]
    ProteinNotFound(String),
}
