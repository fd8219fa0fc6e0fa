//! Step 2: Newtype Wrappers
//! Example: Zero-cost wrappers that make the signature honest
//!
//! Run with: cargo run --example p2_newtypes

#[derive(Debug, Clone, Copy, PartialEq)]
struct Amount(f64);

#[derive(Debug, Clone, PartialEq)]
struct SortCode(String);

#[derive(Debug, Clone, PartialEq)]
struct Account(String);

trait Payments {
    fn transfer_money_to(&self, amount: Amount, sort_code: &SortCode, account: &Account);
}

struct ConsolePayments;

impl Payments for ConsolePayments {
    fn transfer_money_to(&self, amount: Amount, sort_code: &SortCode, account: &Account) {
        println!("  transferring {:?} to {:?} / {:?}", amount, sort_code, account);
    }
}

fn main() {
    let payments = ConsolePayments;

    println!("=== Each Argument Now Names Its Meaning ===");
    let sort_code = SortCode("12-34-56".to_string());
    let account = Account("87654321".to_string());
    payments.transfer_money_to(Amount(100.0), &sort_code, &account);

    // payments.transfer_money_to(Amount(100.0), &account, &sort_code);
    // no longer compiles: expected `&SortCode`, found `&Account`

    println!("\nThe wrappers cost nothing at runtime and catch the swap at compile time.");
}
