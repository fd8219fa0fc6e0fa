//! Step 1: Primitive Obsession
//! Example: A transfer API built from bare numbers and strings
//!
//! Run with: cargo run --example p1_primitive_obsession

trait Payments {
    fn transfer_money_to(&self, amount: f64, sort_code: &str, account: &str);
}

struct ConsolePayments;

impl Payments for ConsolePayments {
    fn transfer_money_to(&self, amount: f64, sort_code: &str, account: &str) {
        println!("  transferring {} to {} / {}", amount, sort_code, account);
    }
}

fn main() {
    let payments = ConsolePayments;

    println!("=== The Intended Call ===");
    payments.transfer_money_to(100.0, "12-34-56", "87654321");

    println!("\n=== The Call the Compiler Also Accepts ===");
    // Two strings of the same type: swapping them still compiles, and the
    // signature gives the reader no way to tell which is which.
    payments.transfer_money_to(100.0, "87654321", "12-34-56");

    println!("\nNothing in the types distinguishes a sort code from an account.");
}
