//! Conversion of response graphs into plain key/value structures.
//!
//! Field names are rewritten from the service's capitalized words (`NumeroAndreani`)
//! into snake case (`numero_andreani`). The input graph is only read.

use serde_json::{Map, Value};

use crate::node::Node;

/// A normalized mapping.
pub type Record = Map<String, Value>;

/// Rewrites a field name into snake case.
///
/// The first letter is lowercased, every later uppercase letter is lowercased and
/// preceded by `_`. Runs of capitals are not grouped: `CPDestino` becomes `c_p_destino`.
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Normalizes any node.
pub fn normalize(node: &Node) -> Value {
    match node {
        Node::Nil => Value::Null,
        Node::Scalar(text) => Value::String(text.clone()),
        Node::Map(entries) => Value::Object(normalize_entries(entries)),
        Node::List(items) => Value::Array(items.iter().map(normalize).collect()),
    }
}

/// Normalizes a map node. Any other node yields `None`.
pub fn normalize_record(node: &Node) -> Option<Record> {
    match node {
        Node::Map(entries) if !entries.is_empty() => Some(normalize_entries(entries)),
        _ => None,
    }
}

/// Normalizes a sequence of map nodes.
///
/// Arrays arrive wrapped in a single-entry container (`<Result><Item/><Item/></Result>`),
/// which is unwrapped. A single item yields a list of one; an absent or empty node yields
/// an empty list.
pub fn normalize_list(node: Option<&Node>) -> Vec<Record> {
    let items = match node {
        None | Some(Node::Nil) | Some(Node::Scalar(_)) => return Vec::new(),
        Some(Node::List(items)) => items.as_slice(),
        Some(whole @ Node::Map(entries)) => match entries.as_slice() {
            [(_, Node::List(items))] => items.as_slice(),
            [(_, item @ Node::Map(_))] => std::slice::from_ref(item),
            _ => std::slice::from_ref(whole),
        },
    };
    items.iter().filter_map(normalize_record).collect()
}

fn normalize_entries(entries: &[(String, Node)]) -> Record {
    entries
        .iter()
        .map(|(name, value)| (to_snake_case(name), normalize(value)))
        .collect()
}
