//! Basic usage example for the vector type.
//!
//! Walks through construction, arithmetic, magnitude, normalization,
//! dot product, and angle computation, including the error cases.
//!
//! ```bash
//! cargo run --example basic_usage
//! ```

use anyhow::Result;
use norma::{AngleUnit, Vector};
use rust_decimal_macros::dec;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("norma Vector Example");
    println!("====================");

    // Exact decimal parsing: 0.1 + 0.2 really is 0.3 here.
    let a = Vector::parse(["0.1", "0.2", "3"])?;
    let b = Vector::parse(["0.2", "0.1", "-1"])?;
    println!("a = {a}");
    println!("b = {b}");
    println!("a + b = {}", a.plus(&b)?);
    println!("a - b = {}", a.minus(&b)?);
    println!("a * 2 = {}", a.times_scalar(dec!(2)));

    // Magnitude and normalization go through floating point.
    let v = Vector::from_integers([3, 4])?;
    println!("|{v}| = {}", v.magnitude());
    println!("normalized: {}", v.normalized()?);

    // Dot product stays exact.
    let p = Vector::from_integers([1, 2])?;
    let q = Vector::from_integers([3, 4])?;
    println!("{p} . {q} = {}", p.dot(&q)?);

    // Angles, in both units.
    let x_axis = Vector::from_integers([1, 0])?;
    let y_axis = Vector::from_integers([0, 1])?;
    println!(
        "angle(x, y) = {} rad = {} deg",
        x_axis.angle_with(&y_axis, AngleUnit::Radians)?,
        x_axis.angle_with(&y_axis, AngleUnit::Degrees)?
    );

    // Domain errors are tagged variants, not strings to compare against.
    let zero = Vector::zero(2)?;
    match zero.normalized() {
        Ok(_) => unreachable!("the zero vector has no direction"),
        Err(err) => println!("normalizing the zero vector: {err}"),
    }
    match x_axis.angle_with(&zero, AngleUnit::Degrees) {
        Ok(_) => unreachable!("the zero vector has no angle"),
        Err(err) => println!("angle with the zero vector: {err}"),
    }

    println!("Example completed successfully!");
    Ok(())
}
