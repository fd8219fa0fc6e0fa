//! Stage 5: Decoding Into Results
//! Example: Success/failure decoding instead of blind trust in the body
//!
//! Run with: cargo run --example p5_result_decoding

use api_adapters::github::{github_api, GetUser, GitHubApiAction, GitHubApiExt};
use api_adapters::http::{ApiRequest, ApiResponse};

fn main() {
    let get_user = GetUser::new("foobar");

    println!("=== Decoding a Success ===");
    let decoded = get_user.from_response(&ApiResponse::ok("foobar/admin,mgmt"));
    println!("  200 with body: {:?}", decoded);

    println!("\n=== Failure Statuses Become Descriptive Errors ===");
    let missing = get_user.from_response(&ApiResponse::new(404, ""));
    match missing {
        Ok(details) => println!("  unexpected success: {:?}", details),
        Err(e) => println!("  expected error: {}", e),
    }

    println!("\n=== A Dead Upstream, Seen From a Call Site ===");
    let api = github_api(|_request: ApiRequest| ApiResponse::new(503, "connection refused"));
    match api.get_user("octocat") {
        Ok(details) => println!("  unexpected success: {:?}", details),
        Err(e) => println!("  expected error: {}", e),
    }

    println!("\nCall sites choose what a failure means; nothing is thrown past them.");
}
