//! Step 5: A Reusable Value Factory
//! Example: Extracting the validate-and-coerce machinery from the value type
//!
//! Run with: cargo run --example p5_value_factory

// The same rounding-and-floor rules keep appearing, so the factory becomes
// a value of its own, parameterized by how to wrap the accepted number.
struct ValueFactory<T> {
    coerce: fn(f64) -> T,
    minimum: f64,
}

impl<T> ValueFactory<T> {
    fn of(&self, value: f64) -> Result<T, String> {
        if !value.is_finite() || value <= 0.0 {
            return Err(format!("value must be positive, got {}", value));
        }
        let rounded = round_significant(value, 3);
        if rounded < self.minimum {
            return Err(format!(
                "value {} is below the minimum of {}",
                rounded, self.minimum
            ));
        }
        Ok((self.coerce)(rounded))
    }

    // The whole list succeeds or the first bad value fails it.
    fn of_list(&self, values: &[f64]) -> Result<Vec<T>, String> {
        values.iter().map(|&v| self.of(v)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Amount(f64);

impl Amount {
    fn factory() -> ValueFactory<Amount> {
        ValueFactory {
            coerce: Amount,
            minimum: 0.01,
        }
    }
}

fn round_significant(value: f64, digits: i32) -> f64 {
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    (value * factor).round() / factor
}

fn main() {
    let factory = Amount::factory();

    println!("=== Single Values ===");
    println!("  of(1.271) = {:?}", factory.of(1.271));
    println!("  of(0.004) = {:?}", factory.of(0.004));

    println!("\n=== Lists Construct as a Whole ===");
    println!("  of_list([1.271, 2.567]) = {:?}", factory.of_list(&[1.271, 2.567]));
    println!("  of_list([1.271, -2.0]) = {:?}", factory.of_list(&[1.271, -2.0]));
}
