pub mod error;
pub mod numerics;

pub use error::{VectorError, VectorResult};
pub use numerics::types::angle::AngleUnit;
pub use numerics::types::vector::Vector;
