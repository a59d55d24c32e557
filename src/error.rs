use crate::validate::ValidationError;

/// Fault reason the web service returns for an unknown destination postal code.
pub const INVALID_POSTAL_CODE_REASON: &str = "Codigo postal es invalido";

/// English rendering of [`INVALID_POSTAL_CODE_REASON`], returned by some service front-ends.
pub const INVALID_POSTAL_CODE_REASON_EN: &str = "Postal code is invalid";

/// Error type for the andreani-rs crate.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AndreaniError {
    /// A parameter failed a local check. No request has been sent.
    #[error(transparent)]
    #[diagnostic(code(andreani_rs::error::AndreaniError::Validation))]
    Validation(#[from] ValidationError),

    /// The service rejected the destination postal code.
    #[error("The postal code is invalid.")]
    #[diagnostic(code(andreani_rs::error::AndreaniError::InvalidPostalCode))]
    InvalidPostalCode,

    /// The service answered with a fault.
    #[error("The service reported a fault: {reason}")]
    #[diagnostic(code(andreani_rs::error::AndreaniError::Service))]
    Service {
        /// Reason text of the fault, verbatim.
        reason: String,
    },

    /// The remote contract of this operation has not been published.
    #[error("Operation {0} is not implemented.")]
    #[diagnostic(code(andreani_rs::error::AndreaniError::NotImplemented))]
    NotImplemented(&'static str),

    /// The response body is not a SOAP envelope.
    #[error("Missing SOAP envelope in response.")]
    #[diagnostic(code(andreani_rs::error::AndreaniError::MissingEnvelope))]
    MissingEnvelope,

    /// The SOAP envelope has no body.
    #[error("Missing SOAP body in response.")]
    #[diagnostic(code(andreani_rs::error::AndreaniError::MissingBody))]
    MissingBody,

    /// The server answered with an error status and no SOAP fault.
    #[error("Unexpected HTTP status {status}: {body}")]
    #[diagnostic(code(andreani_rs::error::AndreaniError::UnexpectedStatus))]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The request to the server has failed.
    #[error(transparent)]
    #[diagnostic(code(andreani_rs::error::AndreaniError::ReqwestError))]
    ReqwestError(#[from] reqwest::Error),

    /// An invalid header value has been provided.
    #[error(transparent)]
    #[diagnostic(code(andreani_rs::error::AndreaniError::InvalidHeaderValue))]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    /// Url parsing error.
    #[error(transparent)]
    #[diagnostic(code(andreani_rs::error::AndreaniError::UrlParseError))]
    UrlParseError(#[from] url::ParseError),

    /// The response body is not well-formed XML.
    #[error(transparent)]
    #[diagnostic(code(andreani_rs::error::AndreaniError::XmlParse))]
    XmlParse(#[from] xmltree::ParseError),

    /// The request envelope could not be written.
    #[error(transparent)]
    #[diagnostic(code(andreani_rs::error::AndreaniError::XmlWrite))]
    XmlWrite(#[from] xmltree::Error),

    /// A request or a normalized response could not be converted.
    #[error(transparent)]
    #[diagnostic(code(andreani_rs::error::AndreaniError::Deserialize))]
    Deserialize(#[from] serde_json::Error),
}

impl AndreaniError {
    /// Classifies the reason text of a SOAP fault.
    pub fn from_fault_reason(reason: &str) -> Self {
        let trimmed = reason.trim();
        if trimmed == INVALID_POSTAL_CODE_REASON || trimmed == INVALID_POSTAL_CODE_REASON_EN {
            AndreaniError::InvalidPostalCode
        } else {
            AndreaniError::Service {
                reason: reason.to_string(),
            }
        }
    }
}
