//! # From Adapter Monolith to Capability Interface
//!
//! A remote-API client refactored step by step:
//!
//! ## Stage 1: The Adapter Monolith
//! - A concrete client type with one method per remote call
//!
//! ## Stage 2: Actions as Values
//! - Each call becomes a value carrying its request shape and decoding
//!
//! ## Stage 3: The Capability Interface
//! - One generic `invoke(action)` operation; transport behind a factory
//!
//! ## Stage 4: Test Doubles
//! - A recording decorator and an in-memory stub
//!
//! ## Stage 5: Decoding Into Results
//! - Success/failure decoding, with HTTP failure statuses made descriptive
//!
//! Run examples with: `cargo run --example <name>`
//!
//! The crate's own API is the end state: [`http`] carries the wire model
//! and filters, [`github`] the actions, the capability trait, and its
//! implementations.

pub mod github;
pub mod http;

pub use github::{
    authorized_github_api, github_api, ApiError, Commit, GetRepoLatestCommit, GetUser, GitHubApi,
    GitHubApiAction, GitHubApiExt, RecordingGitHubApi, StubGitHubApi, UserDetails,
};
pub use http::{ApiRequest, ApiResponse, HttpHandler, HttpHandlerExt, Method, ReqwestHandler};
