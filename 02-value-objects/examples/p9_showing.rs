//! Step 9: Showing
//! Example: Rendering the value back to text
//!
//! Run with: cargo run --example p9_showing

use value_objects::Amount;

fn main() {
    println!("=== Showing Appends the Marker ===");
    let amount = Amount::of(1.267).unwrap();
    println!("  Amount::of(1.267).show() = {:?}", amount.show());
    assert_eq!(amount.show(), "1.27!");

    println!("\n=== Rounding Means No Exact Round Trip ===");
    // 1.267 went in, but construction rounded, so 1.27 comes back out.
    // Showing then parsing does round-trip: the stored value is stable.
    assert_eq!(Amount::parse(&amount.show()), Ok(amount));
    println!("  parse(show(amount)) == amount holds");
    println!("  show(parse(\"1.267!\")) == \"1.267!\" does not");
}
