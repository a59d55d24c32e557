//! # SOAP 1.2 messages
//!
//! Construction of request envelopes carrying a WS-Security `UsernameToken`, and parsing
//! of response envelopes into either a result [`Node`](crate::node::Node) or a
//! [`SoapFault`].
//!
//! ## Example
//!
//! ```
//! use andreani_rs::soap::{build_request, parse_response, SoapOutcome};
//! use andreani_rs::{Credentials, Operation, Parameters};
//!
//! let credentials = Credentials::new("user", "pass", "CL0001", "400006709");
//! let xml = build_request(
//!     Operation::AnularEnvio.descriptor(),
//!     &credentials,
//!     &Parameters::new().param("NumeroAndreani", "310000000000001"),
//! )
//! .unwrap();
//! assert!(xml.contains("<wsse:Username>user</wsse:Username>"));
//!
//! let body = r#"<s:Envelope xmlns:s="http://www.w3.org/2003/05/soap-envelope">
//!   <s:Body>
//!     <s:Fault>
//!       <s:Code><s:Value>s:Receiver</s:Value></s:Code>
//!       <s:Reason><s:Text xml:lang="es-AR">Codigo postal es invalido</s:Text></s:Reason>
//!     </s:Fault>
//!   </s:Body>
//! </s:Envelope>"#;
//! match parse_response(body.as_bytes(), Operation::CotizarEnvio.descriptor()).unwrap() {
//!     SoapOutcome::Fault(fault) => assert_eq!(fault.reason, "Codigo postal es invalido"),
//!     SoapOutcome::Result(_) => unreachable!(),
//! }
//! ```

mod envelope;
mod fault;
mod parser;

pub use envelope::{build_request, content_type};
pub use fault::SoapFault;
pub use parser::{parse_response, SoapOutcome};

/// Namespace of SOAP 1.2 envelopes.
pub const SOAP_ENV_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

/// Namespace of the WS-Security extension.
pub const WSSE_NS: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd";

/// Type URI of clear-text `UsernameToken` passwords.
pub const PASSWORD_TEXT: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-username-token-profile-1.0#PasswordText";
