/// Errors that can occur while constructing or operating on vectors.
#[derive(Debug, thiserror::Error)]
pub enum VectorError {
    #[error("coordinates must be nonempty")]
    EmptyCoordinates,

    #[error("coordinate {position} is not a valid decimal: {value:?}")]
    InvalidCoordinate { value: String, position: usize },

    #[error("scalar is not representable as a decimal: {value}")]
    InvalidScalar { value: f64 },

    #[error("dimension mismatch: left operand has {left} coordinates, right operand has {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("cannot normalize the zero vector")]
    CannotNormalizeZeroVector,

    #[error("cannot compute an angle with the zero vector")]
    CannotComputeAngleWithZeroVector,
}

/// Convenience alias for results carrying a [`VectorError`].
pub type VectorResult<T> = Result<T, VectorError>;
