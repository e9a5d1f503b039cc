// src/numerics/types/vector.rs
// Arbitrary-dimension immutable vector over exact decimal coordinates.

use core::fmt;
use core::ops::{Mul, Neg};

use rust_decimal::prelude::{Decimal, FromPrimitive, ToPrimitive};
use tracing::trace;

use crate::error::{VectorError, VectorResult};
use crate::numerics::types::angle::AngleUnit;

/// An immutable ordered tuple of exact decimal numbers.
///
/// All operations are pure: they return a new `Vector` or a scalar and never
/// mutate an operand, so instances can be shared freely between threads.
///
/// Coordinates are stored as [`Decimal`] so that construction from decimal
/// strings and the element-wise arithmetic are exact; only [`magnitude`] and
/// the operations built on it go through floating point.
///
/// [`magnitude`]: Vector::magnitude
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vector {
    coordinates: Vec<Decimal>,
}

impl Vector {
    /// Construct from a sequence of decimal coordinates.
    ///
    /// Fails with [`VectorError::EmptyCoordinates`] when the sequence yields
    /// no elements.
    pub fn new(coordinates: impl IntoIterator<Item = Decimal>) -> VectorResult<Self> {
        let coordinates: Vec<Decimal> = coordinates.into_iter().collect();
        if coordinates.is_empty() {
            trace!("rejected construction from an empty coordinate sequence");
            return Err(VectorError::EmptyCoordinates);
        }
        Ok(Self { coordinates })
    }

    /// Construct by parsing each coordinate as an exact decimal.
    ///
    /// Fails with [`VectorError::InvalidCoordinate`] on the first element
    /// that does not parse, and [`VectorError::EmptyCoordinates`] when the
    /// sequence is empty.
    pub fn parse<I, S>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for (position, raw) in coordinates.into_iter().enumerate() {
            let raw = raw.as_ref();
            let value = raw.parse::<Decimal>().map_err(|_| {
                trace!(position, value = raw, "rejected unparseable coordinate");
                VectorError::InvalidCoordinate {
                    value: raw.to_string(),
                    position,
                }
            })?;
            parsed.push(value);
        }
        Self::new(parsed)
    }

    /// Construct from integer coordinates (lossless).
    pub fn from_integers(coordinates: impl IntoIterator<Item = i64>) -> VectorResult<Self> {
        Self::new(coordinates.into_iter().map(Decimal::from))
    }

    /// The all-zero vector of the given dimension.
    pub fn zero(dimension: usize) -> VectorResult<Self> {
        Self::new(vec![Decimal::ZERO; dimension])
    }

    /// Number of coordinates.
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// The coordinates as a slice.
    pub fn coordinates(&self) -> &[Decimal] {
        &self.coordinates
    }

    /// Coordinate at `index`, or `None` beyond the dimension.
    pub fn get(&self, index: usize) -> Option<&Decimal> {
        self.coordinates.get(index)
    }

    /// Exact test for the zero vector; never depends on float rounding.
    pub fn is_zero(&self) -> bool {
        self.coordinates.iter().all(|c| c.is_zero())
    }

    fn check_dimension(&self, other: &Vector) -> VectorResult<()> {
        let (left, right) = (self.dimension(), other.dimension());
        if left != right {
            trace!(left, right, "dimension mismatch in binary operation");
            return Err(VectorError::DimensionMismatch { left, right });
        }
        Ok(())
    }

    /// Element-wise sum.
    ///
    /// Fails with [`VectorError::DimensionMismatch`] when the operands have
    /// different dimensions.
    pub fn plus(&self, other: &Vector) -> VectorResult<Vector> {
        self.check_dimension(other)?;
        Ok(Self {
            coordinates: self
                .coordinates
                .iter()
                .zip(&other.coordinates)
                .map(|(x, y)| x + y)
                .collect(),
        })
    }

    /// Element-wise difference.
    ///
    /// Fails with [`VectorError::DimensionMismatch`] when the operands have
    /// different dimensions.
    pub fn minus(&self, other: &Vector) -> VectorResult<Vector> {
        self.check_dimension(other)?;
        Ok(Self {
            coordinates: self
                .coordinates
                .iter()
                .zip(&other.coordinates)
                .map(|(x, y)| x - y)
                .collect(),
        })
    }

    /// Multiply every coordinate by an exact decimal scalar.
    pub fn times_scalar(&self, scalar: Decimal) -> Vector {
        Self {
            coordinates: self.coordinates.iter().map(|c| c * scalar).collect(),
        }
    }

    /// Multiply every coordinate by a floating-point scalar.
    ///
    /// Fails with [`VectorError::InvalidScalar`] when the scalar is NaN,
    /// infinite, or otherwise not representable as a decimal.
    pub fn times_scalar_f64(&self, scalar: f64) -> VectorResult<Vector> {
        match Decimal::from_f64(scalar) {
            Some(converted) => Ok(self.times_scalar(converted)),
            None => {
                trace!(value = scalar, "rejected scalar not representable as a decimal");
                Err(VectorError::InvalidScalar { value: scalar })
            }
        }
    }

    /// Euclidean norm.
    ///
    /// The sum of squares is exact; the square root goes through `f64`, so
    /// some precision loss against the stored coordinates is expected.
    pub fn magnitude(&self) -> f64 {
        let square_sum: Decimal = self.coordinates.iter().map(|c| c * c).sum();
        // ToPrimitive::to_f64 never fails for Decimal; the Option is trait shape.
        square_sum.to_f64().unwrap_or_default().sqrt()
    }

    /// Scale to unit magnitude.
    ///
    /// Fails with [`VectorError::CannotNormalizeZeroVector`] for the zero
    /// vector.
    pub fn normalized(&self) -> VectorResult<Vector> {
        if self.is_zero() {
            trace!("rejected normalization of the zero vector");
            return Err(VectorError::CannotNormalizeZeroVector);
        }
        self.times_scalar_f64(1.0 / self.magnitude())
    }

    /// Exact sum of element-wise products.
    ///
    /// Fails with [`VectorError::DimensionMismatch`] when the operands have
    /// different dimensions.
    pub fn dot(&self, other: &Vector) -> VectorResult<Decimal> {
        self.check_dimension(other)?;
        Ok(self
            .coordinates
            .iter()
            .zip(&other.coordinates)
            .map(|(x, y)| x * y)
            .sum())
    }

    /// Angle between two vectors, in the requested unit.
    ///
    /// Computed as `arccos` of the dot product of the normalized operands,
    /// with the cosine clamped to `[-1, 1]` so float round-off on parallel
    /// vectors cannot push `arccos` out of its domain.
    ///
    /// Fails with [`VectorError::CannotComputeAngleWithZeroVector`] when
    /// either operand is the zero vector; any other failure propagates
    /// unchanged.
    pub fn angle_with(&self, other: &Vector, unit: AngleUnit) -> VectorResult<f64> {
        let remap = |err: VectorError| match err {
            VectorError::CannotNormalizeZeroVector => {
                VectorError::CannotComputeAngleWithZeroVector
            }
            other => other,
        };
        let u1 = self.normalized().map_err(remap)?;
        let u2 = other.normalized().map_err(remap)?;
        let cosine = u1.dot(&u2)?.to_f64().unwrap_or_default().clamp(-1.0, 1.0);
        Ok(unit.from_radians(cosine.acos()))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, coordinate) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coordinate}")?;
        }
        write!(f, ")")
    }
}

// Operator sugar for the infallible operations. The fallible ones
// (plus, minus, dot) stay methods returning VectorResult.

impl Mul<Decimal> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: Decimal) -> Vector {
        self.times_scalar(scalar)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.times_scalar(-Decimal::ONE)
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Decimal;
    type IntoIter = core::slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl TryFrom<Vec<Decimal>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<Decimal>) -> Result<Self, Self::Error> {
        Self::new(coordinates)
    }
}

impl TryFrom<&[Decimal]> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: &[Decimal]) -> Result<Self, Self::Error> {
        Self::new(coordinates.iter().copied())
    }
}

// Serialized as the bare coordinate sequence; deserialization re-validates
// the non-empty invariant instead of trusting the wire.

impl serde::Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.coordinates.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coordinates = Vec::<Decimal>::deserialize(deserializer)?;
        Vector::new(coordinates).map_err(serde::de::Error::custom)
    }
}
