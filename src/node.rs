use xmltree::{Element, XMLNode};

/// A node of a response object graph, as returned by the web service.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An `xsi:nil` element.
    Nil,
    /// A leaf element, with its text as sent.
    Scalar(String),
    /// An element with child elements, by field name, in document order.
    Map(Vec<(String, Node)>),
    /// A field that occurs more than once, or a field known to be a sequence.
    List(Vec<Node>),
}

impl Node {
    /// Builds a node from an XML element.
    ///
    /// Children whose name repeats are collected into a single [`Node::List`] entry,
    /// placed where the name first occurs.
    pub fn from_element(element: &Element) -> Node {
        Node::from_element_with(element, &[])
    }

    /// Builds a node from an XML element, collecting children named in `list_fields`
    /// into a [`Node::List`] even when they occur once.
    pub fn from_element_with(element: &Element, list_fields: &[&str]) -> Node {
        if is_nil(element) {
            return Node::Nil;
        }

        let children: Vec<&Element> = element
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .collect();

        if children.is_empty() {
            return Node::Scalar(
                element
                    .get_text()
                    .map(|text| text.into_owned())
                    .unwrap_or_default(),
            );
        }

        let mut entries: Vec<(String, Node)> = Vec::with_capacity(children.len());
        for child in children {
            let value = Node::from_element_with(child, list_fields);
            match entries.iter_mut().find(|(name, _)| *name == child.name) {
                Some((_, Node::List(items))) => items.push(value),
                Some((_, existing)) => {
                    let first = std::mem::replace(existing, Node::Nil);
                    *existing = Node::List(vec![first, value]);
                }
                None if list_fields.contains(&child.name.as_str()) => {
                    entries.push((child.name.clone(), Node::List(vec![value])))
                }
                None => entries.push((child.name.clone(), value)),
            }
        }
        Node::Map(entries)
    }

    /// Returns the value of a field of a map node.
    pub fn get(&self, field: &str) -> Option<&Node> {
        match self {
            Node::Map(entries) => entries
                .iter()
                .find(|(name, _)| name == field)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Returns the text of a scalar node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// Returns whether the node carries no data.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Nil => true,
            Node::Scalar(text) => text.is_empty(),
            Node::Map(entries) => entries.is_empty(),
            Node::List(items) => items.is_empty(),
        }
    }
}

fn is_nil(element: &Element) -> bool {
    element
        .attributes
        .iter()
        .any(|(name, value)| (name == "nil" || name.ends_with(":nil")) && value == "true")
}
