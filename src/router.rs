//! `Router` dispatches an HTTP method and a request path to the handler
//! registered for them.
//!
//! Paths are made of `/`-delimited segments. A segment beginning with `:` is a
//! named parameter that matches any single non-empty segment:
//!
//! ```text
//!  Pattern: /blog/:category/:post
//!
//!   /blog/rust/request-routers            match: category="rust", post="request-routers"
//!   /blog/rust/request-routers/           no match
//!   /blog/rust/                           no match
//!   /blog/rust/request-routers/comments   no match
//! ```
//!
//! Every other segment is matched literally, case-sensitively and without any
//! decoding. When a literal route and a parameter route overlap, the literal
//! one wins regardless of registration order:
//!
//! ```rust
//! use pathtrie::Router;
//!
//! let mut router = Router::new();
//! router.get("/users/:id", "user");
//! router.get("/users/me", "me");
//!
//! assert_eq!(*router.at("GET", "/users/me").unwrap().value, "me");
//!
//! let matched = router.at("GET", "/users/42").unwrap();
//! assert_eq!(*matched.value, "user");
//! assert_eq!(matched.params.get("id"), Some("42"));
//! ```
use crate::tree::{split, Node};
use crate::{InsertError, MatchError, ParamSink, Params};

/// A successful match: the registered value and the extracted parameters.
#[derive(Debug)]
pub struct Match<'r, V> {
    /// The value stored under the matched route.
    pub value: &'r V,
    /// The parameters extracted from the path, in path order.
    pub params: Params,
}

/// Router is a container which dispatches requests to handlers via
/// registered routes.
///
/// Routes are registered through `&mut self` while the router is being
/// built. Matching only needs `&self`, so a finished router can be shared
/// (for example in an `Arc`) and matched from many threads at once.
#[derive(Debug, Clone)]
pub struct Router<T> {
    root: Node<T>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    /// Creates a router with no routes.
    pub fn new() -> Self {
        Router { root: Node::root() }
    }

    /// The root of the route trie.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Registers `value` for `method` at `path`, reporting malformed paths
    /// instead of panicking.
    ///
    /// ```rust
    /// use pathtrie::{InsertError, Router};
    ///
    /// let mut router = Router::new();
    /// assert!(router.insert("GET", "/teapot", "I am a teapot").is_ok());
    /// assert_eq!(
    ///     router.insert("GET", "teapot", "no slash"),
    ///     Err(InsertError::MalformedPath { path: "teapot".into() })
    /// );
    /// ```
    pub fn insert(
        &mut self,
        method: impl Into<String>,
        path: &str,
        value: T,
    ) -> Result<(), InsertError> {
        self.root.insert(method, path, value)
    }

    /// Registers a new request handler with the given method and path.
    ///
    /// For GET, POST, PUT, PATCH, DELETE and HEAD requests the respective
    /// shortcut functions can be used. This function is intended for less
    /// frequently used, non-standardized or custom methods.
    ///
    /// # Panics
    ///
    /// Panics if the route cannot be registered, for example when `path` is
    /// empty or does not begin with `/`. Routes are registered at startup, so
    /// this is treated as a programming error.
    pub fn handle(&mut self, method: &str, path: &str, handler: T) {
        if let Err(err) = self.insert(method, path, handler) {
            panic!("failed to register {} {}: {}", method, path, err);
        }
    }

    /// Register a handler for GET requests
    pub fn get(&mut self, path: &str, handler: T) {
        self.handle("GET", path, handler);
    }

    /// Register a handler for POST requests
    pub fn post(&mut self, path: &str, handler: T) {
        self.handle("POST", path, handler);
    }

    /// Register a handler for PUT requests
    pub fn put(&mut self, path: &str, handler: T) {
        self.handle("PUT", path, handler);
    }

    /// Register a handler for DELETE requests
    pub fn delete(&mut self, path: &str, handler: T) {
        self.handle("DELETE", path, handler);
    }

    /// Register a handler for HEAD requests
    pub fn head(&mut self, path: &str, handler: T) {
        self.handle("HEAD", path, handler);
    }

    /// Register a handler for PATCH requests
    pub fn patch(&mut self, path: &str, handler: T) {
        self.handle("PATCH", path, handler);
    }

    /// Finds the handler for `method` and `path`, recording path parameters
    /// into `params`.
    ///
    /// Nothing is written to `params` unless the whole path matched.
    pub fn lookup(
        &self,
        method: &str,
        path: &str,
        params: &mut dyn ParamSink,
    ) -> Result<&T, MatchError> {
        let segments = match split(path) {
            Some(segments) => segments,
            None => {
                trace!("no route for {} {}: path must begin with '/'", method, path);
                return Err(MatchError::NotFound);
            }
        };

        let node = self.root.walk(&segments, Some(params)).map_err(|segment| {
            trace!("no route for {} {}: unmatched segment '{}'", method, path, segment);
            MatchError::NotFound
        })?;

        match node.route(method) {
            Some(route) => Ok(route.handler()),
            None => {
                trace!("no {} handler registered for {}", method, path);
                Err(MatchError::NotFound)
            }
        }
    }

    /// Finds the handler for `method` and `path`.
    ///
    /// ```rust
    /// use pathtrie::Router;
    ///
    /// let mut router = Router::new();
    /// router.get("/home", "Welcome!");
    ///
    /// let res = router.at("GET", "/home").unwrap();
    /// assert_eq!(res.value, &"Welcome!");
    /// assert!(res.params.is_empty());
    /// ```
    pub fn at(&self, method: &str, path: &str) -> Result<Match<'_, T>, MatchError> {
        let mut params = Params::new();
        let value = self.lookup(method, path, &mut params)?;
        Ok(Match { value, params })
    }

    /// Returns the methods registered for the route `path` resolves to.
    ///
    /// ```rust
    /// use pathtrie::Router;
    ///
    /// let mut router = Router::new();
    /// router.get("/products", "all products");
    /// router.post("/products", "product created");
    ///
    /// let allowed = router.allowed("/products");
    /// assert_eq!(allowed, vec!["GET", "POST"]);
    /// ```
    pub fn allowed(&self, path: &str) -> Vec<&str> {
        let mut allowed = split(path)
            .and_then(|segments| self.root.walk(&segments, None).ok())
            .map(|node| node.methods().collect::<Vec<_>>())
            .unwrap_or_default();

        allowed.sort_unstable();
        allowed
    }
}
