//! A small HTTP request router built on a segment trie.
//!
//! Routes are registered per HTTP method on `/`-delimited path patterns.
//! Segments starting with `:` capture the matching request segment under the
//! name that follows the colon.
//!
//! ```rust
//! use pathtrie::Router;
//!
//! let mut router = Router::new();
//! router.get("/users/:id/posts/:post", "post");
//! router.post("/users", "create user");
//!
//! let matched = router.at("GET", "/users/42/posts/7").unwrap();
//! assert_eq!(*matched.value, "post");
//! assert_eq!(matched.params.get("id"), Some("42"));
//! assert_eq!(matched.params.get("post"), Some("7"));
//!
//! // the path exists, but not for this method
//! assert!(router.at("DELETE", "/users").is_err());
//! ```
//!
//! With the `hyper-server` feature (enabled by default) a router of
//! [`service::BoxedHandler`]s can be turned into a hyper service.
#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod error;
mod params;
mod router;
mod tree;

#[cfg(feature = "hyper-server")]
pub mod service;

pub use error::{InsertError, MatchError};
pub use params::{ParamSink, Params, ParamsIter};
pub use router::{Match, Router};
pub use tree::{Node, Route};
