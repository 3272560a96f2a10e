use crate::core::geometry::GeometryError;
use crate::core::matrix::MatrixError;
use thiserror::Error;

/// Errors raised by the clustering engine.
///
/// All of these are precondition violations detected eagerly, before the
/// expensive distance and component passes begin; none of them is retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClusterError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("adjacency matrix side {n_entities} does not match {n_refs} molecule references")]
    RefMismatch { n_entities: usize, n_refs: usize },

    #[error("atomic clustering requires per-atom molecule references")]
    MissingMoleculeRefs,

    #[error("unknown clustering method '{0}', expected 'molecular' or 'atomic'")]
    UnknownMethod(String),

    #[error("distance or adjacency matrix contains non-finite entries")]
    UnsupportedMatrix,
}
