//! Configuration management for the protein network analyzer

/// Default configuration for the protein network analyzer
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum combined score for a predicted interaction to be reported
    pub prediction_threshold: f64,

    /// Maximum number of predictions returned
    pub max_predictions: usize,

    /// Weight of the Jaccard similarity in the prediction score
    pub jaccard_weight: f64,

    /// Weight of the normalized degree product in the prediction score
    pub degree_weight: f64,

    /// Number of hub proteins listed per community
    pub hub_proteins: usize,

    /// Socket address the HTTP server binds to
    pub bind_address: String,

    /// Origins allowed by the CORS layer
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prediction_threshold: 0.2,
            max_predictions: 20,
            jaccard_weight: 0.7,
            degree_weight: 0.3,
            hub_proteins: 5,
            bind_address: "0.0.0.0:8000".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:3001".to_string(),
                "http://localhost:5173".to_string(),
            ],
        }
    }
}

impl Config {
    /// Create a configuration with custom link prediction parameters
    pub fn new(prediction_threshold: f64, max_predictions: usize) -> Self {
        Self {
            prediction_threshold,
            max_predictions,
            ..Self::default()
        }
    }

    /// Override the address the HTTP server listens on
    pub fn with_bind_address(mut self, bind_address: impl Into<String>) -> Self {
        self.bind_address = bind_address.into();
        self
    }
}
