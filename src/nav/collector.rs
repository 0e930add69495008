use serde::{Deserialize, Serialize};

use crate::nav::spec::NavNode;

/// The flattened set of page paths reachable from navigation.
///
/// Order is the depth-first, left-to-right traversal order of the tree;
/// only membership and prefix queries matter for correctness.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidPages(Vec<String>);

impl ValidPages {
    pub fn new(pages: Vec<String>) -> Self {
        Self(pages)
    }

    /// Exact membership of a page path.
    pub fn contains(&self, src_uri: &str) -> bool {
        self.0.iter().any(|page| page == src_uri)
    }

    /// True if some entry starts with `dir` (a path prefix ending in `/`).
    ///
    /// This is what makes directory-style navigation entries like `guide/`
    /// cover every page under that directory. Case-sensitive, no separator
    /// normalization.
    pub fn covers_prefix(&self, dir: &str) -> bool {
        self.0.iter().any(|page| page.starts_with(dir))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Flatten a navigation tree into the pages it references.
///
/// Traversal is depth-first, left-to-right. Group labels are ignored. A
/// group value that is itself a group, and any [`NavNode::Other`] node, is
/// silently skipped. Lenient handling of malformed entries is deliberate
/// and must not be tightened.
pub fn collect_pages(nav: &[NavNode]) -> ValidPages {
    let mut pages = Vec::new();
    collect_into(nav, &mut pages);
    ValidPages::new(pages)
}

fn collect_into(nodes: &[NavNode], pages: &mut Vec<String>) {
    for node in nodes {
        match node {
            NavNode::Page(path) => pages.push(path.clone()),
            NavNode::Group(entries) => {
                for (_label, value) in entries {
                    match value {
                        NavNode::Page(path) => pages.push(path.clone()),
                        NavNode::List(items) => collect_into(items, pages),
                        // Group-valued entries and unrecognized shapes are
                        // skipped, not errors.
                        NavNode::Group(_) | NavNode::Other => {}
                    }
                }
            }
            NavNode::List(items) => collect_into(items, pages),
            NavNode::Other => {}
        }
    }
}
