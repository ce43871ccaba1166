use std::fmt;

/// Represents errors that can occur when registering a route.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum InsertError {
    /// The path was empty or did not begin with `/`.
    MalformedPath {
        /// The rejected path.
        path: String,
    },
    /// Parameters must be registered with a name.
    UnnamedParam,
    /// The same parameter name appears more than once in a single path.
    DuplicateParam {
        /// The repeated parameter segment.
        name: String,
    },
    /// Attempted to register a parameter whose name differs from the
    /// parameter already registered at the same depth.
    Conflict {
        /// The existing route prefix that the insertion is conflicting with.
        with: String,
    },
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPath { path } => {
                write!(f, "path must begin with '/' in path '{}'", path)
            }
            Self::UnnamedParam => write!(f, "parameters must be registered with a name"),
            Self::DuplicateParam { name } => {
                write!(f, "parameter '{}' appears more than once in the path", name)
            }
            Self::Conflict { with } => {
                write!(
                    f,
                    "insertion failed due to conflict with previously registered parameter: {}",
                    with
                )
            }
        }
    }
}

impl std::error::Error for InsertError {}

impl InsertError {
    // Builds the conflicting route prefix: the segments walked so far plus
    // the parameter segment already occupying this depth.
    pub(crate) fn conflict(walked: &[&str], existing: &str) -> Self {
        let mut with = String::new();
        for segment in walked.iter().chain(std::iter::once(&existing)) {
            with.push('/');
            with.push_str(segment);
        }

        InsertError::Conflict { with }
    }
}

/// A failed match attempt.
///
/// Unknown paths and known paths without a handler for the requested method
/// are reported the same way.
///
/// ```
/// use pathtrie::{MatchError, Router};
///
/// let mut router = Router::new();
/// router.get("/home", "Welcome!");
///
/// assert_eq!(router.at("POST", "/home").unwrap_err(), MatchError::NotFound);
/// assert_eq!(router.at("GET", "/foobar").unwrap_err(), MatchError::NotFound);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchError {
    /// No matching route was found.
    NotFound,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no matching handler")
    }
}

impl std::error::Error for MatchError {}
