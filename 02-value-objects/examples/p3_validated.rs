//! Step 3: Validated Construction
//! Example: A panicking invariant, then a factory returning Result
//!
//! Run with: cargo run --example p3_validated

mod panicking {
    // The invariant holds, but violations take the process down.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Amount(f64);

    impl Amount {
        pub fn new(value: f64) -> Amount {
            assert!(value > 0.0, "amount must be positive, got {}", value);
            Amount(value)
        }
    }
}

mod better {
    // A private field with a factory: the caller decides what a bad value
    // means, and the invariant still cannot be sidestepped.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Amount(f64);

    impl Amount {
        pub fn of(value: f64) -> Result<Amount, String> {
            if value > 0.0 {
                Ok(Amount(value))
            } else {
                Err(format!("amount must be positive, got {}", value))
            }
        }
    }
}

fn main() {
    println!("=== Construction That Panics ===");
    let amount = panicking::Amount::new(10.0);
    println!("  built {:?}", amount);
    println!("  panicking::Amount::new(-1.0) would abort the program");

    println!("\n=== Construction That Returns Result ===");
    match better::Amount::of(10.0) {
        Ok(amount) => println!("  built {:?}", amount),
        Err(e) => println!("  error: {}", e),
    }
    match better::Amount::of(-1.0) {
        Ok(amount) => println!("  built {:?}", amount),
        Err(e) => println!("  expected error: {}", e),
    }
}
