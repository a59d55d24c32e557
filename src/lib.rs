#![crate_name = "andreani_rs"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Andreani web services client
//!
//! `andreani_rs` is a web client which is used to consume the SOAP web services of the
//! Andreani courier: branch lookup, quotes, shipment creation, vouchers, cancellation,
//! traceability and pending-shipment reports.
//!
//! Results are returned as plain mappings whose keys are the remote field names in snake
//! case (`NumeroAndreani` becomes `numero_andreani`).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use andreani_rs::{AndreaniClient, AndreaniError, CotizacionEnvio, Environment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AndreaniError> {
//!     let client = AndreaniClient::builder()
//!         .username("eCommerce_Integra")
//!         .password("passw0rd")
//!         .client_code("CL0003750")
//!         .contract_code("400006709")
//!         .environment(Environment::Staging)
//!         .build()?;
//!
//!     let quote = client
//!         .cotizar_envio(
//!             &CotizacionEnvio::builder()
//!                 .cp_destino("1400")
//!                 .peso(1500.0)
//!                 .volumen(2000.0)
//!                 .build(),
//!         )
//!         .await;
//!     match quote {
//!         Ok(quote) => println!("{:#?}", quote),
//!         Err(AndreaniError::InvalidPostalCode) => println!("unknown postal code"),
//!         Err(err) => return Err(err),
//!     }
//!     Ok(())
//! }
//! ```

extern crate reqwest;
extern crate serde;
extern crate serde_json;
extern crate self as andreani_rs;

/// Module containing the error type.
pub mod error;
/// Module containing the macros.
pub mod macros;
/// Module containing the operation table, environments and endpoints.
pub mod operations;
/// Module containing the request parameters.
pub mod params;
/// Module containing traits.
pub mod traits;
/// Module containing the local parameter checks.
pub mod validate;

/// Module containing the response graph.
pub mod node;
/// Module containing the conversion of responses into records.
pub mod normalize;
/// Module containing the typed requests.
pub mod requests;
/// Module containing the SOAP envelopes.
pub mod soap;

mod credentials;

pub use error::AndreaniError;
pub use node::Node;
pub use normalize::Record;
pub use operations::{Endpoints, Environment, Operation, OperationDescriptor, Service};
pub use params::Parameters;
pub use requests::{
    Anulacion, Compra, CompraConRecibo, Constancia, ConsultaSucursales, ConsultaTrazabilidad,
    CotizacionEnvio, RemitoImposicion,
};
pub use serde_json::Value;
pub use traits::AndreaniRequest;
pub use andreani_rs_derive::AndreaniRequest;

/// Module containing the client.
pub mod client;
pub use client::AndreaniClient;
pub use credentials::Credentials;

/// Result type for the andreani-rs crate.
pub type AndreaniResult<T> = std::result::Result<T, error::AndreaniError>;
