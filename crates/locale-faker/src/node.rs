//! Typed locale data tree.
//!
//! Locale documents are nested key-value data. Rather than passing
//! `serde_json::Value` around, the store converts every document into
//! [`Node`], which keeps exactly the three shapes lookups care about.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde_json::Value;

/// A node in a locale data tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single string value.
    Scalar(String),
    /// An ordered list of nodes.
    List(Vec<Node>),
    /// A table of named child nodes.
    Map(BTreeMap<String, Node>),
}

impl Node {
    /// Returns the string value when this node is a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value.as_str()),
            Self::List(_) | Self::Map(_) => None,
        }
    }

    /// Returns the elements when this node is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            Self::Scalar(_) | Self::Map(_) => None,
        }
    }

    /// Returns the children when this node is a map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Map(children) => Some(children),
            Self::Scalar(_) | Self::List(_) => None,
        }
    }

    /// Walks a dot-separated key path below this node.
    ///
    /// Returns `None` when a segment is missing, when an intermediate node is
    /// not a map, or when the path contains an empty segment.
    ///
    /// # Example
    ///
    /// ```
    /// use locale_faker::Node;
    ///
    /// let node = Node::from(serde_json::json!({"lorem": {"words": ["alias"]}}));
    /// assert!(node.get("lorem.words").is_some());
    /// assert!(node.get("lorem..words").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key_path: &str) -> Option<&Self> {
        key_path.split('.').try_fold(self, |node, segment| {
            if segment.is_empty() {
                return None;
            }
            node.as_map()?.get(segment)
        })
    }

    /// Deep-merges `other` into this node.
    ///
    /// Maps merge key by key; any other combination is replaced by `other`.
    pub(crate) fn merge(&mut self, other: Self) {
        match (self, other) {
            (Self::Map(ours), Self::Map(theirs)) => {
                for (key, incoming) in theirs {
                    match ours.entry(key) {
                        Entry::Occupied(mut slot) => slot.get_mut().merge(incoming),
                        Entry::Vacant(slot) => {
                            slot.insert(incoming);
                        }
                    }
                }
            }
            (target, replacement) => *target = replacement,
        }
    }
}

/// Converts JSON into a tree.
///
/// `null` means "no value": null entries are dropped from maps and lists so
/// lookups treat them as missing, and a bare `null` becomes an empty map.
impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Map(BTreeMap::new()),
            Value::Bool(flag) => Self::Scalar(flag.to_string()),
            Value::Number(number) => Self::Scalar(number.to_string()),
            Value::String(text) => Self::Scalar(text),
            Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .filter(|item| !item.is_null())
                    .map(Self::from)
                    .collect(),
            ),
            Value::Object(children) => Self::Map(
                children
                    .into_iter()
                    .filter(|(_, child)| !child.is_null())
                    .map(|(key, child)| (key, Self::from(child)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn tree() -> Node {
        Node::from(json!({
            "name": {"first_name": ["Ada", "Grace"], "title": "Dr"},
            "lorem": {"punctuation": {"period": "."}}
        }))
    }

    #[rstest]
    #[case("name.first_name", true)]
    #[case("name.title", true)]
    #[case("lorem.punctuation.period", true)]
    #[case("name.middle_name", false)]
    #[case("name.title.extra", false)]
    #[case("", false)]
    #[case(".name", false)]
    fn get_walks_key_paths(#[case] key_path: &str, #[case] found: bool) {
        assert_eq!(tree().get(key_path).is_some(), found);
    }

    #[test]
    fn accessors_match_node_shape() {
        let root = tree();
        let names = root.get("name.first_name").expect("list present");
        assert_eq!(names.as_list().map(<[Node]>::len), Some(2));
        assert!(names.as_scalar().is_none());
        assert_eq!(
            root.get("name.title").and_then(Node::as_scalar),
            Some("Dr")
        );
        assert!(root.as_map().is_some());
    }

    #[test]
    fn converts_non_string_scalars_to_text() {
        let node = Node::from(json!({"count": 3, "flag": true}));
        assert_eq!(node.get("count").and_then(Node::as_scalar), Some("3"));
        assert_eq!(node.get("flag").and_then(Node::as_scalar), Some("true"));
    }

    #[test]
    fn null_values_are_treated_as_missing() {
        let node = Node::from(json!({"none": null, "items": ["a", null, "b"]}));
        assert!(node.get("none").is_none());
        assert_eq!(
            node.get("items").and_then(Node::as_list).map(<[Node]>::len),
            Some(2)
        );
    }

    #[test]
    fn merging_null_keeps_existing_value() {
        let mut base = tree();
        base.merge(Node::from(json!({"name": {"title": null}})));
        assert_eq!(
            base.get("name.title").and_then(Node::as_scalar),
            Some("Dr")
        );
    }

    #[test]
    fn merge_combines_maps_and_replaces_leaves() {
        let mut base = tree();
        base.merge(Node::from(json!({
            "name": {"first_name": ["Linus"], "last_name": ["Torvalds"]}
        })));

        let first = base.get("name.first_name").and_then(Node::as_list);
        assert_eq!(first, Some(&[Node::Scalar("Linus".to_owned())][..]));
        assert!(base.get("name.last_name").is_some());
        assert!(base.get("name.title").is_some());
        assert!(base.get("lorem.punctuation.period").is_some());
    }
}
