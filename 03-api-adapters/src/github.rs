//! The refactored client: call descriptions as values, one generic invoke
//! operation, and interchangeable implementations of it.

use std::any::Any;
use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::http::{
    bearer_auth, set_base_uri, set_header, ApiRequest, ApiResponse, HttpHandler, HttpHandlerExt,
};

pub const BASE_URI: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("API returned: {0}")]
    Status(u16),
    #[error("cannot decode response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub name: String,
    pub orgs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub author: String,
}

/// One remote call, described as a value: the outbound request shape plus
/// the decoding of its response. Constructed fresh per call and discarded
/// after use.
pub trait GitHubApiAction: fmt::Debug + Clone + 'static {
    type Output: 'static;

    fn to_request(&self) -> ApiRequest;
    fn from_response(&self, response: &ApiResponse) -> Result<Self::Output, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUser {
    pub username: String,
}

impl GetUser {
    pub fn new(username: impl Into<String>) -> GetUser {
        GetUser {
            username: username.into(),
        }
    }
}

impl GitHubApiAction for GetUser {
    type Output = UserDetails;

    fn to_request(&self) -> ApiRequest {
        ApiRequest::get(format!("/users/{}", self.username))
    }

    fn from_response(&self, response: &ApiResponse) -> Result<UserDetails, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Status(response.status));
        }
        user_details_from(&response.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRepoLatestCommit {
    pub owner: String,
    pub repo: String,
}

impl GetRepoLatestCommit {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> GetRepoLatestCommit {
        GetRepoLatestCommit {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl GitHubApiAction for GetRepoLatestCommit {
    type Output = Commit;

    fn to_request(&self) -> ApiRequest {
        ApiRequest::get(format!("/repos/{}/{}/commits", self.owner, self.repo))
            .with_query("per_page", "1")
    }

    fn from_response(&self, response: &ApiResponse) -> Result<Commit, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Status(response.status));
        }
        Ok(Commit {
            author: author_from(&response.body),
        })
    }
}

// Response bodies use the `name/org1,org2` line format.
fn user_details_from(body: &str) -> Result<UserDetails, ApiError> {
    let (name, orgs) = body
        .trim()
        .split_once('/')
        .ok_or_else(|| ApiError::Decode(format!("malformed user body {body:?}")))?;
    let orgs = if orgs.is_empty() {
        Vec::new()
    } else {
        orgs.split(',').map(|org| org.trim().to_string()).collect()
    };
    Ok(UserDetails {
        name: name.to_string(),
        orgs,
    })
}

fn author_from(body: &str) -> String {
    let body = body.trim();
    body.split('/').next().unwrap_or(body).to_string()
}

/// The capability: invoke a described action, get back its decoded result.
pub trait GitHubApi {
    fn invoke<A: GitHubApiAction>(&self, action: A) -> Result<A::Output, ApiError>;
}

/// Builds the HTTP-backed [`GitHubApi`] over any transport. Call sites
/// only ever see the trait.
pub fn github_api(client: impl HttpHandler) -> impl GitHubApi {
    HttpGitHubApi {
        http: client
            .map_request(set_base_uri(BASE_URI))
            .map_request(set_header("Accept", ACCEPT)),
    }
}

/// As [`github_api`], with a bearer token attached to every request.
pub fn authorized_github_api(token: impl Into<String>, client: impl HttpHandler) -> impl GitHubApi {
    github_api(client.map_request(bearer_auth(token)))
}

struct HttpGitHubApi<H> {
    http: H,
}

impl<H: HttpHandler> GitHubApi for HttpGitHubApi<H> {
    fn invoke<A: GitHubApiAction>(&self, action: A) -> Result<A::Output, ApiError> {
        action.from_response(&self.http.handle(action.to_request()))
    }
}

/// The call-site-friendly surface, available on every implementation.
pub trait GitHubApiExt: GitHubApi {
    fn get_user(&self, username: &str) -> Result<UserDetails, ApiError> {
        self.invoke(GetUser::new(username))
    }

    fn get_latest_repo_commit(&self, owner: &str, repo: &str) -> Result<Commit, ApiError> {
        self.invoke(GetRepoLatestCommit::new(owner, repo))
    }

    /// The author of the repo's latest commit, in full detail.
    fn get_latest_user(&self, owner: &str, repo: &str) -> Result<UserDetails, ApiError> {
        let commit = self.get_latest_repo_commit(owner, repo)?;
        self.get_user(&commit.author)
    }
}

impl<T: GitHubApi> GitHubApiExt for T {}

/// Decorates another implementation, keeping a copy of every action
/// invoked for later inspection.
pub struct RecordingGitHubApi<T> {
    delegate: T,
    recorded: RefCell<Vec<Box<dyn Any>>>,
}

impl<T: GitHubApi> RecordingGitHubApi<T> {
    pub fn new(delegate: T) -> RecordingGitHubApi<T> {
        RecordingGitHubApi {
            delegate,
            recorded: RefCell::new(Vec::new()),
        }
    }

    /// The actions seen so far, in invocation order. Downcast the entries
    /// to the concrete action types to inspect them.
    pub fn recorded(&self) -> Ref<'_, Vec<Box<dyn Any>>> {
        self.recorded.borrow()
    }
}

impl<T: GitHubApi> GitHubApi for RecordingGitHubApi<T> {
    fn invoke<A: GitHubApiAction>(&self, action: A) -> Result<A::Output, ApiError> {
        self.recorded.borrow_mut().push(Box::new(action.clone()));
        self.delegate.invoke(action)
    }
}

/// Answers [`GetUser`] from an in-memory table keyed by username and
/// fabricates commits; any other action kind is an unsupported operation.
pub struct StubGitHubApi {
    users: HashMap<String, UserDetails>,
}

impl StubGitHubApi {
    pub fn new(users: HashMap<String, UserDetails>) -> StubGitHubApi {
        StubGitHubApi { users }
    }
}

impl GitHubApi for StubGitHubApi {
    fn invoke<A: GitHubApiAction>(&self, action: A) -> Result<A::Output, ApiError> {
        // Hand-rolled dispatch on the action's type.
        let any_action: &dyn Any = &action;
        if let Some(GetUser { username }) = any_action.downcast_ref::<GetUser>() {
            let details = self
                .users
                .get(username)
                .cloned()
                .ok_or(ApiError::Status(404))?;
            respond(&action, details)
        } else if let Some(get_commit) = any_action.downcast_ref::<GetRepoLatestCommit>() {
            respond(
                &action,
                Commit {
                    author: get_commit.owner.clone(),
                },
            )
        } else {
            Err(unsupported(&action))
        }
    }
}

// The dispatch above produced a concrete value; this puts it back into the
// action's output type. A mismatch means the stub answered an action it
// does not really understand, which lands in the unsupported channel.
fn respond<A: GitHubApiAction, T: 'static>(action: &A, value: T) -> Result<A::Output, ApiError> {
    let boxed: Box<dyn Any> = Box::new(value);
    boxed
        .downcast::<A::Output>()
        .map(|output| *output)
        .map_err(|_| unsupported(action))
}

fn unsupported<A: GitHubApiAction>(action: &A) -> ApiError {
    ApiError::UnsupportedOperation(format!("{action:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> UserDetails {
        UserDetails {
            name: "bob".to_string(),
            orgs: vec!["admin".to_string()],
        }
    }

    mod actions {
        use super::*;

        #[test]
        fn get_user_translates_to_a_request() {
            assert_eq!(
                GetUser::new("foobar").to_request(),
                ApiRequest::get("/users/foobar")
            );
        }

        #[test]
        fn get_user_translates_a_response() {
            let response = ApiResponse::ok("foobar/admin,mgmt");

            assert_eq!(
                GetUser::new("foobar").from_response(&response),
                Ok(UserDetails {
                    name: "foobar".to_string(),
                    orgs: vec!["admin".to_string(), "mgmt".to_string()],
                })
            );
        }

        #[test]
        fn a_user_can_have_no_orgs() {
            let response = ApiResponse::ok("loner/");

            assert_eq!(
                GetUser::new("loner").from_response(&response),
                Ok(UserDetails {
                    name: "loner".to_string(),
                    orgs: vec![],
                })
            );
        }

        #[test]
        fn latest_commit_translates_to_a_request() {
            assert_eq!(
                GetRepoLatestCommit::new("alice", "widget").to_request(),
                ApiRequest::get("/repos/alice/widget/commits").with_query("per_page", "1")
            );
        }

        #[test]
        fn failure_statuses_become_descriptive_errors() {
            let response = ApiResponse::new(404, "");

            let error = GetUser::new("foobar").from_response(&response).unwrap_err();
            assert_eq!(error, ApiError::Status(404));
            assert_eq!(error.to_string(), "API returned: 404");
        }

        #[test]
        fn malformed_bodies_are_decode_errors() {
            let response = ApiResponse::ok("no-separator-here");

            assert!(matches!(
                GetUser::new("foobar").from_response(&response),
                Err(ApiError::Decode(_))
            ));
        }
    }

    mod http_implementation {
        use super::*;
        use std::cell::RefCell;

        #[test]
        fn sends_the_filtered_request_and_decodes_the_response() {
            let seen = RefCell::new(Vec::new());
            let api = github_api(|request: ApiRequest| {
                seen.borrow_mut().push(request);
                ApiResponse::ok("octocat/github")
            });

            let user = api.get_user("octocat").unwrap();

            assert_eq!(
                user,
                UserDetails {
                    name: "octocat".to_string(),
                    orgs: vec!["github".to_string()],
                }
            );
            let request = &seen.borrow()[0];
            assert_eq!(request.uri, "https://api.github.com/users/octocat");
            assert_eq!(request.header("Accept"), Some("application/vnd.github.v3+json"));
        }

        #[test]
        fn the_authorized_client_attaches_a_bearer_token() {
            let seen = RefCell::new(Vec::new());
            let api = authorized_github_api("sesame", |request: ApiRequest| {
                seen.borrow_mut().push(request);
                ApiResponse::ok("octocat/")
            });

            api.get_user("octocat").unwrap();

            assert_eq!(
                seen.borrow()[0].header("Authorization"),
                Some("Bearer sesame")
            );
        }

        #[test]
        fn get_latest_user_chains_two_calls() {
            let api = github_api(|request: ApiRequest| {
                if request.uri.ends_with("/commits") {
                    ApiResponse::ok("carol")
                } else {
                    ApiResponse::ok("carol/maintainers")
                }
            });

            let user = api.get_latest_user("alice", "widget").unwrap();

            assert_eq!(
                user,
                UserDetails {
                    name: "carol".to_string(),
                    orgs: vec!["maintainers".to_string()],
                }
            );
        }
    }

    mod doubles {
        use super::*;

        // An action kind none of the doubles know about.
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

        #[test]
        fn the_stub_answers_configured_users() {
            let stub = StubGitHubApi::new(HashMap::from([("bob".to_string(), bob())]));

            assert_eq!(stub.get_user("bob"), Ok(bob()));
        }

        #[test]
        fn the_stub_fabricates_commits_from_the_owner() {
            let stub = StubGitHubApi::new(HashMap::new());

            assert_eq!(
                stub.get_latest_repo_commit("alice", "widget"),
                Ok(Commit {
                    author: "alice".to_string(),
                })
            );
        }

        #[test]
        fn the_stub_misses_unknown_users() {
            let stub = StubGitHubApi::new(HashMap::new());

            assert_eq!(stub.get_user("nobody"), Err(ApiError::Status(404)));
        }

        #[test]
        fn the_stub_refuses_unknown_action_kinds() {
            let stub = StubGitHubApi::new(HashMap::new());

            assert_eq!(
                stub.invoke(GetZen),
                Err(ApiError::UnsupportedOperation("GetZen".to_string()))
            );
        }

        #[test]
        fn the_recorder_observes_actions_in_invocation_order() {
            let stub = StubGitHubApi::new(HashMap::from([("bob".to_string(), bob())]));
            let recording = RecordingGitHubApi::new(stub);

            recording.get_user("bob").unwrap();
            recording.get_latest_repo_commit("alice", "widget").unwrap();

            let recorded = recording.recorded();
            assert_eq!(recorded.len(), 2);
            assert_eq!(
                recorded[0].downcast_ref::<GetUser>(),
                Some(&GetUser::new("bob"))
            );
            assert_eq!(
                recorded[1].downcast_ref::<GetRepoLatestCommit>(),
                Some(&GetRepoLatestCommit::new("alice", "widget"))
            );
        }

        #[test]
        fn the_recorder_passes_results_through() {
            let stub = StubGitHubApi::new(HashMap::from([("bob".to_string(), bob())]));
            let recording = RecordingGitHubApi::new(stub);

            assert_eq!(recording.get_user("bob"), Ok(bob()));
        }
    }
}
