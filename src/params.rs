use std::collections::HashMap;
use std::{fmt, slice};

/// A destination for path parameters extracted during matching.
///
/// The router records one `(name, value)` pair per parameter segment, in path
/// order, and only after the whole path has matched. A sink must be private to
/// a single in-flight request.
pub trait ParamSink {
    /// Records the concrete `value` bound to the parameter `key`.
    fn record(&mut self, key: &str, value: &str);
}

impl ParamSink for Params {
    fn record(&mut self, key: &str, value: &str) {
        self.push(key, value);
    }
}

impl ParamSink for HashMap<String, String> {
    fn record(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}

impl ParamSink for Vec<(String, String)> {
    fn record(&mut self, key: &str, value: &str) {
        self.push((key.to_owned(), value.to_owned()));
    }
}

/// A single URL parameter, consisting of a key and a value.
#[derive(PartialEq, Eq, Ord, PartialOrd, Default, Clone)]
struct Param {
    key: String,
    value: String,
}

/// A list of parameters returned by a route match.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut router = pathtrie::Router::new();
/// # router.get("/users/:id", true);
/// let matched = router.at("GET", "/users/1")?;
///
/// // Iterate through the keys and values.
/// for (key, value) in matched.params.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // Get a specific value by name.
/// let id = matched.params.get("id");
/// assert_eq!(id, Some("1"));
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Default, Clone)]
pub struct Params {
    inner: Vec<Param>,
}

impl Params {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no parameters in the list.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the value of the first parameter registered under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();

        self.inner
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value.as_str())
    }

    /// Returns an iterator over the parameters in the list.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter {
            inner: self.inner.iter(),
        }
    }

    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.inner.push(Param {
            key: key.to_owned(),
            value: value.to_owned(),
        });
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'ps> IntoIterator for &'ps Params {
    type Item = (&'ps str, &'ps str);
    type IntoIter = ParamsIter<'ps>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the keys and values of a route's [parameters](crate::Params).
pub struct ParamsIter<'ps> {
    inner: slice::Iter<'ps, Param>,
}

impl<'ps> Iterator for ParamsIter<'ps> {
    type Item = (&'ps str, &'ps str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|p| (p.key.as_str(), p.value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParamsIter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
