//! Stage 4: Test Doubles
//! Example: A recording decorator and an in-memory stub
//!
//! Run with: cargo run --example p4_test_doubles

use std::collections::HashMap;

use api_adapters::github::{
    ApiError, GetRepoLatestCommit, GetUser, GitHubApi, GitHubApiAction, GitHubApiExt,
    RecordingGitHubApi, StubGitHubApi, UserDetails,
};
use api_adapters::http::{ApiRequest, ApiResponse};

// An action kind the stub has never heard of.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GetZen;

impl GitHubApiAction for GetZen {
    type Output = String;

    fn to_request(&self) -> ApiRequest {
        ApiRequest::get("/zen")
    }

    fn from_response(&self, response: &ApiResponse) -> Result<String, ApiError> {
        Ok(response.body.clone())
    }
}

fn main() {
    let bob = UserDetails {
        name: "bob".to_string(),
        orgs: vec!["admin".to_string(), "mgmt".to_string()],
    };
    let stub = StubGitHubApi::new(HashMap::from([("bob".to_string(), bob)]));

    println!("=== The Stub Answers From Its Table ===");
    println!("  get_user(\"bob\"): {:?}", stub.get_user("bob"));
    println!("  get_user(\"nobody\"): {:?}", stub.get_user("nobody"));
    println!(
        "  invoke(GetZen): {:?}",
        stub.invoke(GetZen).map_err(|e| e.to_string())
    );

    println!("\n=== The Recorder Observes Every Action ===");
    let recording = RecordingGitHubApi::new(stub);
    let _ = recording.get_user("bob");
    let _ = recording.get_latest_repo_commit("octocat", "hello-world");

    for action in recording.recorded().iter() {
        if let Some(get_user) = action.downcast_ref::<GetUser>() {
            println!("  recorded: {:?}", get_user);
        } else if let Some(get_commit) = action.downcast_ref::<GetRepoLatestCommit>() {
            println!("  recorded: {:?}", get_commit);
        }
    }

    println!("\nBoth doubles implement the same capability the HTTP implementation does.");
}
