use serde::{Deserialize, Serialize};

/// A discovered source file, as seen by the filter.
///
/// The host pipeline owns file objects; the plugin only reads the
/// source-relative path. Implement this on the host's file type to filter
/// its own collection directly.
pub trait SourcePath {
    /// Path of the file relative to the content root, `/`-separated.
    fn src_uri(&self) -> &str;
}

/// Minimal concrete file for hosts (and tests) without their own file type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub src_uri: String,
}

impl SourceFile {
    pub fn new(src_uri: impl Into<String>) -> Self {
        Self {
            src_uri: src_uri.into(),
        }
    }
}

impl SourcePath for SourceFile {
    fn src_uri(&self) -> &str {
        &self.src_uri
    }
}

/// An ordered collection of discovered files.
///
/// Filtering consumes a `Files<F>` and returns a `Files<F>` so the host gets
/// back the container type it handed in. Order is always preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Files<F>(Vec<F>);

impl<F> Files<F> {
    pub fn new(files: Vec<F>) -> Self {
        Self(files)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<F> {
        self.0
    }
}

impl<F> IntoIterator for Files<F> {
    type Item = F;
    type IntoIter = std::vec::IntoIter<F>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a Files<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<F> FromIterator<F> for Files<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
