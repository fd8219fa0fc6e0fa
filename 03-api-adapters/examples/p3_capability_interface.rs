//! Stage 3: The Capability Interface
//! Example: One generic invoke operation, transport behind a factory
//!
//! Run with: cargo run --example p3_capability_interface

use api_adapters::github::{github_api, GitHubApiExt};
use api_adapters::http::{ApiRequest, ApiResponse, ReqwestHandler};

// An in-memory stand-in for api.github.com, answering both endpoints.
fn in_memory_github() -> impl Fn(ApiRequest) -> ApiResponse {
    |request| {
        if request.uri.ends_with("/commits") {
            ApiResponse::ok("carol")
        } else if let Some((_, username)) = request.uri.rsplit_once("/users/") {
            ApiResponse::ok(format!("{}/maintainers", username))
        } else {
            ApiResponse::new(404, "")
        }
    }
}

fn main() {
    // The factory returns the capability; the concrete implementation and
    // its filters are not visible from here.
    let api = github_api(in_memory_github());

    println!("=== One Operation, Many Calls ===");
    println!("  get_user: {:?}", api.get_user("octocat"));
    println!(
        "  get_latest_repo_commit: {:?}",
        api.get_latest_repo_commit("octocat", "hello-world")
    );

    println!("\n=== Calls Compose ===");
    // Latest commit first, then the author's details, through the same
    // capability.
    println!(
        "  get_latest_user: {:?}",
        api.get_latest_user("octocat", "hello-world")
    );

    // The same call sites run against the real network by swapping the
    // handler given to the factory.
    let _over_the_wire = github_api(ReqwestHandler::new());

    println!("\nCall sites depend on the capability alone; transport is a constructor argument.");
}
