//! Step 7: Composing Values
//! Example: Money pairs an amount with a currency
//!
//! Run with: cargo run --example p7_money

use value_objects::{Amount, Currency, Money};

fn main() {
    let five_pounds = Money::new(Amount::of(5.0).unwrap(), Currency::new("GBP"));
    let ten_pounds = Money::new(Amount::of(10.0).unwrap(), Currency::new("GBP"));
    let ten_dollars = Money::new(Amount::of(10.0).unwrap(), Currency::new("USD"));

    println!("=== Matching Currencies Combine ===");
    match five_pounds.plus(&ten_pounds) {
        Ok(total) => println!("  5 GBP + 10 GBP = {:?}", total),
        Err(e) => println!("  error: {}", e),
    }

    println!("\n=== Mismatched Currencies Refuse ===");
    match five_pounds.plus(&ten_dollars) {
        Ok(total) => println!("  unexpected success: {:?}", total),
        Err(e) => println!("  expected error: {}", e),
    }
}
