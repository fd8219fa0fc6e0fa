//! Step 6: Operators and Extensions
//! Example: `Add` for amounts, and extension methods on value types
//!
//! Run with: cargo run --example p6_arithmetic

use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Amount(f64);

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount(self.0 + other.0)
    }
}

// Behavior that does not belong to the value type itself can live in an
// extension trait, so the tax rules stay out of the money module.
trait Taxable {
    fn taxed_at(self, percent: u32) -> Self;
}

impl Taxable for Amount {
    fn taxed_at(self, percent: u32) -> Amount {
        Amount(self.0 * (1.0 - percent as f64 / 100.0))
    }
}

fn main() {
    println!("=== Operators Read Like the Domain ===");
    let total = Amount(5.0) + Amount(10.0);
    println!("  Amount(5) + Amount(10) = {:?}", total);
    assert_eq!(total, Amount(15.0));

    println!("\n=== Extension Methods ===");
    let after_tax = Amount(100.0).taxed_at(20);
    println!("  Amount(100).taxed_at(20) = {:?}", after_tax);
    assert_eq!(after_tax, Amount(80.0));
}
