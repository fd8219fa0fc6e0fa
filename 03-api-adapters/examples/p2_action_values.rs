//! Stage 2: Actions as Values
//! Example: Each remote call described by a value carrying its request
//! shape and its response decoding
//!
//! Run with: cargo run --example p2_action_values

use api_adapters::http::{ApiRequest, ApiResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
struct UserDetails {
    name: String,
    orgs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Commit {
    author: String,
}

// The call sites' knowledge, extracted from the monolith. Decoding cannot
// fail yet; stage 5 fixes that.
trait GitHubApiAction {
    type Output;

    fn to_request(&self) -> ApiRequest;
    fn from_response(&self, response: &ApiResponse) -> Self::Output;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GetUser {
    username: String,
}

impl GitHubApiAction for GetUser {
    type Output = UserDetails;

    fn to_request(&self) -> ApiRequest {
        ApiRequest::get(format!("/users/{}", self.username))
    }

    fn from_response(&self, response: &ApiResponse) -> UserDetails {
        let body = response.body.trim();
        let (name, orgs) = body.split_once('/').unwrap_or((body, ""));
        UserDetails {
            name: name.to_string(),
            orgs: if orgs.is_empty() {
                Vec::new()
            } else {
                orgs.split(',').map(|org| org.to_string()).collect()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GetRepoLatestCommit {
    owner: String,
    repo: String,
}

impl GitHubApiAction for GetRepoLatestCommit {
    type Output = Commit;

    fn to_request(&self) -> ApiRequest {
        ApiRequest::get(format!("/repos/{}/{}/commits", self.owner, self.repo))
            .with_query("per_page", "1")
    }

    fn from_response(&self, response: &ApiResponse) -> Commit {
        Commit {
            author: response
                .body
                .trim()
                .split('/')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

fn main() {
    let get_user = GetUser {
        username: "foobar".to_string(),
    };

    println!("=== Translating to a Request ===");
    let request = get_user.to_request();
    println!("  {:?}", request);
    assert_eq!(request, ApiRequest::get("/users/foobar"));

    println!("\n=== Translating a Response ===");
    let details = get_user.from_response(&ApiResponse::ok("foobar/admin,mgmt"));
    println!("  {:?}", details);
    assert_eq!(
        details,
        UserDetails {
            name: "foobar".to_string(),
            orgs: vec!["admin".to_string(), "mgmt".to_string()],
        }
    );

    println!("\n=== A Second Action ===");
    let latest = GetRepoLatestCommit {
        owner: "octocat".to_string(),
        repo: "hello-world".to_string(),
    };
    println!("  {:?}", latest.to_request());
    println!("  {:?}", latest.from_response(&ApiResponse::ok("defunkt")));

    println!("\nBoth translations are now plain values and functions, testable without transport.");
}
