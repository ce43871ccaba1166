use crate::{InsertError, ParamSink};

use std::collections::HashMap;

/// The handler bound to one HTTP method at a trie node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<T> {
    handler: T,
}

impl<T> Route<T> {
    fn new(handler: T) -> Self {
        Route { handler }
    }

    /// Returns a reference to the registered handler.
    pub fn handler(&self) -> &T {
        &self.handler
    }
}

/// A segment trie holding the registered routes.
///
/// Every node corresponds to one `/`-delimited path segment. A segment that
/// begins with `:` is a parameter and matches any non-empty segment at that
/// depth, binding it to the name that follows the colon.
///
/// Literal children always take precedence over the parameter child, whatever
/// order the routes were registered in. If the literal branch cannot match the
/// rest of the path, matching falls back to the parameter child.
///
/// ```
/// use pathtrie::{Node, Params};
///
/// let mut root = Node::root();
/// root.insert("GET", "/users/:id", "user")?;
/// root.insert("GET", "/users/me", "me")?;
///
/// let mut params = Params::new();
/// let node = root.walk(&["users", "42"], Some(&mut params)).unwrap();
/// assert_eq!(node.route("GET").map(|r| *r.handler()), Some("user"));
/// assert_eq!(params.get("id"), Some("42"));
///
/// let node = root.walk(&["users", "me"], None).unwrap();
/// assert_eq!(node.route("GET").map(|r| *r.handler()), Some("me"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Node<T> {
    segment: String,
    param: bool,
    children: Vec<Node<T>>,
    routes: HashMap<String, Route<T>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::root()
    }
}

impl<T> Node<T> {
    /// Creates an empty root node.
    pub fn root() -> Self {
        Node::new("/")
    }

    fn new(segment: &str) -> Self {
        Node {
            segment: segment.to_owned(),
            param: is_param(segment),
            children: Vec::new(),
            routes: HashMap::new(),
        }
    }

    /// The literal text of this level, `:name` for parameters, or `/` for the root.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Returns `true` if this node captures a path parameter.
    pub fn is_parameter(&self) -> bool {
        self.param
    }

    /// The child nodes, in registration order.
    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    /// Returns the route registered for `method` at exactly this node.
    pub fn route(&self, method: &str) -> Option<&Route<T>> {
        self.routes.get(method)
    }

    /// Returns the methods registered at exactly this node.
    pub fn methods(&self) -> impl Iterator<Item = &str> + '_ {
        self.routes.keys().map(String::as_str)
    }

    /// Registers `value` for `method` at `path`.
    ///
    /// Registering the same method and path again replaces the previous value.
    /// A parameter name may only appear once per path.
    pub fn insert(
        &mut self,
        method: impl Into<String>,
        path: &str,
        value: T,
    ) -> Result<(), InsertError> {
        let method = method.into();
        let segments = split(path).ok_or_else(|| InsertError::MalformedPath {
            path: path.to_owned(),
        })?;

        if segments.iter().any(|s| *s == ":") {
            return Err(InsertError::UnnamedParam);
        }

        let params = segments.iter().filter(|s| is_param(s));
        for (i, name) in params.clone().enumerate() {
            if params.clone().take(i).any(|seen| seen == name) {
                return Err(InsertError::DuplicateParam {
                    name: (*name).to_owned(),
                });
            }
        }

        let mut current = self;
        for (depth, segment) in segments.iter().enumerate() {
            let index = match current.children.iter().position(|c| c.segment == *segment) {
                Some(i) => i,
                None => {
                    if is_param(segment) {
                        if let Some(existing) = current.children.iter().find(|c| c.param) {
                            return Err(InsertError::conflict(
                                &segments[..depth],
                                &existing.segment,
                            ));
                        }
                    }

                    current.children.push(Node::new(segment));
                    current.children.len() - 1
                }
            };

            current = &mut current.children[index];
        }

        if current
            .routes
            .insert(method.clone(), Route::new(value))
            .is_some()
        {
            debug!("replaced handler for {} {}", method, path);
        } else {
            debug!("registered {} {}", method, path);
        }

        Ok(())
    }

    /// Descends the trie along `segments`.
    ///
    /// Returns the node the complete path resolves to, or the segment that
    /// could not be matched. Parameter bindings are written to `params` only
    /// when the walk succeeds. A node only counts as a match if at least one
    /// route is registered on it.
    pub fn walk<'n, 'p>(
        &'n self,
        segments: &[&'p str],
        params: Option<&mut dyn ParamSink>,
    ) -> Result<&'n Node<T>, &'p str> {
        let mut found = Vec::new();
        let node = self.descend(segments, &mut found)?;

        if let Some(params) = params {
            for (key, value) in found {
                params.record(key, value);
            }
        }

        Ok(node)
    }

    fn descend<'n, 'p>(
        &'n self,
        segments: &[&'p str],
        found: &mut Vec<(&'n str, &'p str)>,
    ) -> Result<&'n Node<T>, &'p str> {
        let (&segment, rest) = match segments.split_first() {
            Some(split) => split,
            None if self.routes.is_empty() => return Err(""),
            None => return Ok(self),
        };

        let mut miss = segment;

        if let Some(child) = self.literal_child(segment) {
            match child.descend(rest, found) {
                Ok(node) => return Ok(node),
                Err(s) => miss = s,
            }
        }

        if !segment.is_empty() {
            if let Some(child) = self.param_child() {
                let len = found.len();
                found.push((&child.segment[1..], segment));

                match child.descend(rest, found) {
                    Ok(node) => return Ok(node),
                    Err(s) => {
                        found.truncate(len);
                        miss = s;
                    }
                }
            }
        }

        Err(miss)
    }

    fn literal_child(&self, segment: &str) -> Option<&Node<T>> {
        self.children
            .iter()
            .find(|c| !c.param && c.segment == segment)
    }

    // There is at most one parameter child per node.
    fn param_child(&self) -> Option<&Node<T>> {
        self.children.iter().find(|c| c.param)
    }
}

fn is_param(segment: &str) -> bool {
    segment.starts_with(':')
}

/// Splits a path into its segments, dropping the leading `/`.
///
/// `/` alone has no segments. Empty segments between or after slashes are
/// kept. Returns `None` if the path does not begin with `/`.
pub(crate) fn split(path: &str) -> Option<Vec<&str>> {
    match path.strip_prefix('/')? {
        "" => Some(Vec::new()),
        rest => Some(rest.split('/').collect()),
    }
}
