use super::error::ClusterError;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Granularity at which clustering is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterMethod {
    /// Each input point is one molecule; the thresholded distance matrix is
    /// used as the adjacency graph directly.
    #[default]
    Molecular,
    /// Input points are atoms within molecules; atom-level adjacency is
    /// escalated to molecule-level adjacency by counting atomic contacts.
    Atomic,
}

impl FromStr for ClusterMethod {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "molecular" => Ok(Self::Molecular),
            "atomic" => Ok(Self::Atomic),
            other => Err(ClusterError::UnknownMethod(other.to_string())),
        }
    }
}

/// Parameters controlling one frame's clustering pass.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Upper threshold on radial distance for two entities to be neighbours.
    pub r_thresh: f64,
    /// Lower threshold on neighbour count for a node to escape noise pruning.
    pub noise_thresh: usize,
    /// Lower threshold on component size for a cluster label to be assigned.
    pub cluster_thresh: usize,
    /// Label value denoting "not part of any qualifying cluster".
    pub background: i64,
    /// Clustering granularity.
    pub method: ClusterMethod,
    /// Minimum atomic contacts between two molecules for the molecules to be
    /// considered neighbours (atomic method only).
    pub atom_thresh: usize,
    /// Row-block size for the batched distance computation.
    pub batch_size: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            r_thresh: 1.5,
            noise_thresh: 1,
            cluster_thresh: 2,
            background: 0,
            method: ClusterMethod::Molecular,
            atom_thresh: 1,
            batch_size: 50,
        }
    }
}

impl ClusterConfig {
    pub fn builder() -> ClusterConfigBuilder {
        ClusterConfigBuilder::new()
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

#[derive(Default)]
pub struct ClusterConfigBuilder {
    r_thresh: Option<f64>,
    noise_thresh: Option<usize>,
    cluster_thresh: Option<usize>,
    background: Option<i64>,
    method: Option<ClusterMethod>,
    atom_thresh: Option<usize>,
    batch_size: Option<usize>,
}

impl ClusterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn r_thresh(mut self, r_thresh: f64) -> Self {
        self.r_thresh = Some(r_thresh);
        self
    }
    pub fn noise_thresh(mut self, noise_thresh: usize) -> Self {
        self.noise_thresh = Some(noise_thresh);
        self
    }
    pub fn cluster_thresh(mut self, cluster_thresh: usize) -> Self {
        self.cluster_thresh = Some(cluster_thresh);
        self
    }
    pub fn background(mut self, background: i64) -> Self {
        self.background = Some(background);
        self
    }
    pub fn method(mut self, method: ClusterMethod) -> Self {
        self.method = Some(method);
        self
    }
    pub fn atom_thresh(mut self, atom_thresh: usize) -> Self {
        self.atom_thresh = Some(atom_thresh);
        self
    }
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Builds the configuration. The neighbour radius carries the physical
    /// meaning of a clustering run, so it must be set explicitly; thresholds
    /// left unset fall back to the documented defaults.
    pub fn build(self) -> Result<ClusterConfig, ConfigError> {
        let defaults = ClusterConfig::default();

        Ok(ClusterConfig {
            r_thresh: self
                .r_thresh
                .ok_or(ConfigError::MissingParameter("r_thresh"))?,
            noise_thresh: self.noise_thresh.unwrap_or(defaults.noise_thresh),
            cluster_thresh: self.cluster_thresh.unwrap_or(defaults.cluster_thresh),
            background: self.background.unwrap_or(defaults.background),
            method: self.method.unwrap_or(defaults.method),
            atom_thresh: self.atom_thresh.unwrap_or(defaults.atom_thresh),
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
        })
    }
}

/// Parameters for the aggregation-number workflow.
///
/// Defaults are tuned for surfactant micelle detection and are deliberately
/// stricter than the per-frame [`ClusterConfig`] defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    pub r_thresh: f64,
    pub noise_thresh: usize,
    pub cluster_thresh: usize,
    pub method: ClusterMethod,
    pub atom_thresh: usize,
    pub batch_size: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            r_thresh: 1.25,
            noise_thresh: 5,
            cluster_thresh: 20,
            method: ClusterMethod::Molecular,
            atom_thresh: 5,
            batch_size: 50,
        }
    }
}

impl AggregationConfig {
    pub fn builder() -> AggregationConfigBuilder {
        AggregationConfigBuilder::new()
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// The per-frame clustering parameters implied by this workflow
    /// configuration (background label stays 0).
    pub fn cluster_config(&self) -> ClusterConfig {
        ClusterConfig {
            r_thresh: self.r_thresh,
            noise_thresh: self.noise_thresh,
            cluster_thresh: self.cluster_thresh,
            background: 0,
            method: self.method,
            atom_thresh: self.atom_thresh,
            batch_size: self.batch_size,
        }
    }
}

#[derive(Default)]
pub struct AggregationConfigBuilder {
    r_thresh: Option<f64>,
    noise_thresh: Option<usize>,
    cluster_thresh: Option<usize>,
    method: Option<ClusterMethod>,
    atom_thresh: Option<usize>,
    batch_size: Option<usize>,
}

impl AggregationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn r_thresh(mut self, r_thresh: f64) -> Self {
        self.r_thresh = Some(r_thresh);
        self
    }
    pub fn noise_thresh(mut self, noise_thresh: usize) -> Self {
        self.noise_thresh = Some(noise_thresh);
        self
    }
    pub fn cluster_thresh(mut self, cluster_thresh: usize) -> Self {
        self.cluster_thresh = Some(cluster_thresh);
        self
    }
    pub fn method(mut self, method: ClusterMethod) -> Self {
        self.method = Some(method);
        self
    }
    pub fn atom_thresh(mut self, atom_thresh: usize) -> Self {
        self.atom_thresh = Some(atom_thresh);
        self
    }
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    pub fn build(self) -> Result<AggregationConfig, ConfigError> {
        let defaults = AggregationConfig::default();

        Ok(AggregationConfig {
            r_thresh: self
                .r_thresh
                .ok_or(ConfigError::MissingParameter("r_thresh"))?,
            noise_thresh: self.noise_thresh.unwrap_or(defaults.noise_thresh),
            cluster_thresh: self.cluster_thresh.unwrap_or(defaults.cluster_thresh),
            method: self.method.unwrap_or(defaults.method),
            atom_thresh: self.atom_thresh.unwrap_or(defaults.atom_thresh),
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
        })
    }
}
