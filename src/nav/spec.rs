use serde::de::{Deserialize, Deserializer};
use serde::Serialize;
use serde_yaml::Value;

/// One node of the site's navigation tree.
///
/// Navigation arrives from the host's YAML configuration as an arbitrarily
/// nested mix of page paths, labelled groups, and ordered lists. Group labels
/// are display text only; the collector never reads them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NavNode {
    /// A direct page reference, e.g. `guide/intro.md` or `guide/`.
    Page(String),
    /// A mapping of display label to node, in document order.
    Group(Vec<(String, NavNode)>),
    /// An ordered sequence of nodes.
    List(Vec<NavNode>),
    /// Any other value shape. Unrecognized nodes are kept in the tree but
    /// skipped during collection; they are never an error.
    Other,
}

impl From<&Value> for NavNode {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(path) => NavNode::Page(path.clone()),
            Value::Sequence(items) => NavNode::List(items.iter().map(NavNode::from).collect()),
            Value::Mapping(entries) => NavNode::Group(
                entries
                    .iter()
                    .map(|(key, value)| (label_of(key), NavNode::from(value)))
                    .collect(),
            ),
            _ => NavNode::Other,
        }
    }
}

/// Group keys are labels; a non-string key degrades to an empty label rather
/// than failing the whole config.
fn label_of(key: &Value) -> String {
    key.as_str().unwrap_or_default().to_owned()
}

impl<'de> Deserialize<'de> for NavNode {
    /// Lenient by construction: every YAML value maps to some variant, so
    /// malformed navigation entries never abort configuration parsing.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(NavNode::from(&value))
    }
}
