use thiserror::Error;


/// Errors raised around the routing engine
/// The engine itself reports an unreachable destination as `None`, never as an error
#[derive(Debug, Error)]
pub enum RouteError {
    /// Identifier or city name is not part of the network
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// Edge distance must be a non-negative finite number
    #[error("invalid distance {distance} on edge {from} - {to}")]
    InvalidDistance { from: String, to: String, distance: f64 },

    #[error("failed to read edge list: {0}")]
    EdgeList(#[from] csv::Error),

    /// Text generation collaborator failed, callers fall back to a default text
    #[error("annotation unavailable: {0}")]
    Annotation(String),
}

pub type Result<T> = std::result::Result<T, RouteError>;
