//! Step 4: Rounding Factory
//! Example: Rounding to 3 significant digits at construction time
//!
//! Run with: cargo run --example p4_rounding_factory

#[derive(Debug, Clone, Copy, PartialEq)]
struct Amount(f64);

impl Amount {
    fn of(value: f64) -> Result<Amount, String> {
        if value > 0.0 {
            Ok(Amount(round_significant(value, 3)))
        } else {
            Err(format!("amount must be positive, got {}", value))
        }
    }

    fn value(&self) -> f64 {
        self.0
    }
}

fn round_significant(value: f64, digits: i32) -> f64 {
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    (value * factor).round() / factor
}

fn main() {
    println!("=== Every Stored Amount Has 3 Significant Digits ===");
    let one_point_two_seven = Amount::of(1.271);
    println!("  Amount::of(1.271) = {:?}", one_point_two_seven);
    assert_eq!(one_point_two_seven.unwrap().value(), 1.27);

    println!("  Amount::of(2.567) = {:?}", Amount::of(2.567));
    println!("  Amount::of(123456.0) = {:?}", Amount::of(123_456.0));

    println!("\n=== Bad Input Still Fails ===");
    println!("  Amount::of(-1.0) = {:?}", Amount::of(-1.0));
}
