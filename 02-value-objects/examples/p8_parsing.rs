//! Step 8: Parsing
//! Example: One failure channel for parse and validation errors
//!
//! Run with: cargo run --example p8_parsing

use value_objects::Amount;

fn main() {
    println!("=== Well-Formed Input ===");
    let one_point_two_seven = Amount::parse("1.271!");
    println!("  parse(\"1.271!\") = {:?}", one_point_two_seven);
    assert_eq!(one_point_two_seven, Amount::of(1.271));

    println!("\n=== Failures Share a Channel ===");
    // Not a number at all
    println!("  parse(\"one!\") = {:?}", Amount::parse("one!"));
    // Missing the marker
    println!("  parse(\"1.271\") = {:?}", Amount::parse("1.271"));
    // Parses, then fails the same validation as direct construction
    println!("  parse(\"-1!\") = {:?}", Amount::parse("-1!"));
}
