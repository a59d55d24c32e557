/// An ordered collection of parameters for a request.
///
/// The web service expects document/literal sequences, so the order in which parameters
/// are added is the order in which they are written into the envelope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    inner: Vec<(String, String)>,
}

impl Parameters {
    /// Creates a new empty collection of parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter to the collection, replacing the value of an existing one in place
    pub fn param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(key, value);
        self
    }

    /// Adds a parameter only if a value is present
    pub fn param_opt<K, V>(self, key: K, value: Option<V>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Adds multiple parameters to the collection
    pub fn extend<I, K, V>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in iter {
            self.insert(k, v);
        }
        self
    }

    /// Adds a parameter to the collection in place
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let value = value.into();
        match self.inner.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.inner.push((key, value)),
        }
    }

    /// Returns the value of a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of parameters
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over the parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the inner list of parameters
    pub fn into_inner(self) -> Vec<(String, String)> {
        self.inner
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new().extend(iter)
    }
}

// Implement From for arrays to support the collection! macro
impl<const N: usize> From<[(&str, &str); N]> for Parameters {
    fn from(arr: [(&str, &str); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<const N: usize> From<[(String, String); N]> for Parameters {
    fn from(arr: [(String, String); N]) -> Self {
        arr.into_iter().collect()
    }
}
