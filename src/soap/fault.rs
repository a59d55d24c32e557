//! SOAP faults

use xmltree::{Element, XMLNode};

/// A fault returned in place of a result.
#[derive(Debug, Clone, PartialEq)]
pub struct SoapFault {
    /// Fault code (ex: "s:Receiver", "s:Client")
    pub code: Option<String>,

    /// Human readable reason
    pub reason: String,
}

impl SoapFault {
    /// Reads a `Fault` element, SOAP 1.2 (`Code/Value`, `Reason/Text`) or 1.1
    /// (`faultcode`, `faultstring`).
    pub fn from_element(fault: &Element) -> Self {
        let code = child(fault, "Code")
            .and_then(|code| child(code, "Value"))
            .or_else(|| child(fault, "faultcode"))
            .and_then(|e| e.get_text())
            .map(|text| text.trim().to_string());

        let reason = child(fault, "Reason")
            .and_then(|reason| child(reason, "Text"))
            .or_else(|| child(fault, "faultstring"))
            .and_then(|e| e.get_text())
            .map(|text| text.into_owned())
            .unwrap_or_default();

        SoapFault { code, reason }
    }
}

/// First child element with the given local name, whatever its prefix.
pub(crate) fn child<'a>(element: &'a Element, local_name: &str) -> Option<&'a Element> {
    element
        .children
        .iter()
        .filter_map(XMLNode::as_element)
        .find(|e| local(&e.name) == local_name)
}

fn local(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}
