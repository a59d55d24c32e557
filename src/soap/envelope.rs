//! Construction of request envelopes

use xmltree::{Element, XMLNode};

use super::{PASSWORD_TEXT, SOAP_ENV_NS, WSSE_NS};
use crate::operations::OperationDescriptor;
use crate::{Credentials, Parameters};

fn text_element(name: &str, text: &str) -> Element {
    let mut element = Element::new(name);
    element.children.push(XMLNode::Text(text.to_string()));
    element
}

fn security_header(credentials: &Credentials) -> Element {
    let mut password = text_element("wsse:Password", &credentials.password);
    password
        .attributes
        .insert("Type".to_string(), PASSWORD_TEXT.to_string());

    let mut token = Element::new("wsse:UsernameToken");
    token.children.push(XMLNode::Element(text_element(
        "wsse:Username",
        &credentials.username,
    )));
    token.children.push(XMLNode::Element(password));

    let mut security = Element::new("wsse:Security");
    security
        .attributes
        .insert("xmlns:wsse".to_string(), WSSE_NS.to_string());
    security
        .attributes
        .insert("env:mustUnderstand".to_string(), "true".to_string());
    security.children.push(XMLNode::Element(token));

    let mut header = Element::new("env:Header");
    header.children.push(XMLNode::Element(security));
    header
}

/// Builds the request envelope of an operation.
///
/// Parameters are written in order, inside the wrapper element of the operation when it
/// has one.
pub fn build_request(
    descriptor: &OperationDescriptor,
    credentials: &Credentials,
    parameters: &Parameters,
) -> Result<String, xmltree::Error> {
    let fields = parameters
        .iter()
        .map(|(name, value)| XMLNode::Element(text_element(&format!("ns:{name}"), value)));

    let mut method = Element::new(&format!("ns:{}", descriptor.method));
    method.attributes.insert(
        "xmlns:ns".to_string(),
        descriptor.service.namespace().to_string(),
    );
    match descriptor.wrapper {
        Some(wrapper) => {
            let mut wrapper = Element::new(&format!("ns:{wrapper}"));
            wrapper.children.extend(fields);
            method.children.push(XMLNode::Element(wrapper));
        }
        None => method.children.extend(fields),
    }

    let mut body = Element::new("env:Body");
    body.children.push(XMLNode::Element(method));

    let mut envelope = Element::new("env:Envelope");
    envelope
        .attributes
        .insert("xmlns:env".to_string(), SOAP_ENV_NS.to_string());
    envelope
        .children
        .push(XMLNode::Element(security_header(credentials)));
    envelope.children.push(XMLNode::Element(body));

    let mut buf = Vec::new();
    let config = xmltree::EmitterConfig::new()
        .write_document_declaration(true)
        .perform_indent(false);
    envelope.write_with_config(&mut buf, config)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Content type of a request, announcing the SOAP action of the operation.
pub fn content_type(descriptor: &OperationDescriptor) -> String {
    format!(
        r#"application/soap+xml; charset=utf-8; action="{}""#,
        descriptor.soap_action()
    )
}
