// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `--features logging` to see each fold traced.

use chained_math::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Chained Math Example ===\n");

    // Initialized value: the fold starts from 10
    let total = NumericValue::from(10).add([1, 2, 3]);
    println!("10 + 1 + 2 + 3        = {}", total);

    // Uninitialized value: the first operand is the seed
    let seeded = NumericValue::new().add([1, 2, 3]);
    println!("(seed 1) + 2 + 3      = {}", seeded);

    // Chaining returns new values; `total` is unchanged
    let chained = total.times([2]).minus([2]).divide([3]);
    println!("(16 * 2 - 2) / 3      = {}", chained);
    println!("total is still        = {}", total);

    // Floating-point semantics propagate instead of failing
    println!("1 / 0                 = {}", NumericValue::from(1).divide([0]));
    println!("0 / 0                 = {}", NumericValue::from(0).divide([0]));
    println!("empty, no operands    = {:?}", NumericValue::new().add(Vec::<f64>::new()));

    // Coercion
    println!("\n=== Coercion ===");
    println!("as text               = {}", total.to_primitive(Hint::String));
    println!("plus a plain f64      = {}", total + 0.5);
    println!("compared with 15.0    = {}", total > 15.0);

    let parsed: NumericValue = "0x1F".parse()?;
    println!("parsed \"0x1F\"         = {}", parsed);
    println!("coerced \"abc\"         = {}", NumericValue::coerce_str("abc"));

    let decimal = NumericValue::from(0.5).times([3]).to_decimal()?;
    println!("as rust_decimal       = {}", decimal);

    #[cfg(feature = "serde")]
    println!("as JSON               = {}", NumericValue::from(2.5).to_json());

    Ok(())
}
