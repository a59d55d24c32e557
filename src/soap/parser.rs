//! Parsing of response envelopes

use std::io::BufReader;

use xmltree::{Element, XMLNode};

use super::fault::{child, SoapFault};
use crate::error::AndreaniError;
use crate::node::Node;
use crate::operations::OperationDescriptor;

/// Content of a response envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum SoapOutcome {
    /// The result of the method, `None` when absent or nil.
    Result(Option<Node>),
    /// The service answered with a fault.
    Fault(SoapFault),
}

/// Parses a response envelope of the operation described by `descriptor`.
///
/// The result is read from `{method}Response/{method}Result`. When the response element
/// has a single child of another name, that child is taken as the result. An empty result
/// element counts as absent.
pub fn parse_response(
    xml: &[u8],
    descriptor: &OperationDescriptor,
) -> Result<SoapOutcome, AndreaniError> {
    let method = descriptor.method;
    let list_fields = descriptor.list_fields;
    let reader = BufReader::new(xml);
    let root = Element::parse(reader)?;

    if root.name != "Envelope" && !root.name.ends_with(":Envelope") {
        return Err(AndreaniError::MissingEnvelope);
    }

    let body = child(&root, "Body").ok_or(AndreaniError::MissingBody)?;

    if let Some(fault) = child(body, "Fault") {
        return Ok(SoapOutcome::Fault(SoapFault::from_element(fault)));
    }

    let response = match child(body, &format!("{method}Response"))
        .or_else(|| body.children.iter().find_map(XMLNode::as_element))
    {
        Some(response) => response,
        None => return Ok(SoapOutcome::Result(None)),
    };

    let result = child(response, &format!("{method}Result")).or_else(|| {
        let mut elements = response.children.iter().filter_map(XMLNode::as_element);
        match (elements.next(), elements.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    });

    let node = match result {
        Some(result) => Node::from_element_with(result, list_fields),
        // Several loose children: the response element itself carries the fields.
        None if response.children.iter().any(|n| n.as_element().is_some()) => {
            Node::from_element_with(response, list_fields)
        }
        None => Node::Nil,
    };

    Ok(SoapOutcome::Result(match node {
        Node::Nil => None,
        Node::Scalar(text) if text.is_empty() => None,
        node => Some(node),
    }))
}
