//! Request types of the operations that take parameters.
//!
//! Account identifiers (client and contract codes) are not part of these types; the client
//! stamps them from its [`Credentials`](crate::Credentials).

use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::validate::{greater_than, not_empty, Validate, ValidationError};
use crate::AndreaniRequest;

/// Filters of a branch lookup. All filters are optional.
#[derive(AndreaniRequest, Serialize, TypedBuilder, Debug, Clone, Default, PartialEq)]
#[andreani(operation = "ConsultarSucursales")]
pub struct ConsultaSucursales {
    /// Postal code of the branch.
    #[serde(rename = "CodigoPostal")]
    #[builder(default, setter(strip_option, into))]
    pub codigo_postal: Option<String>,
    /// Locality of the branch.
    #[serde(rename = "Localidad")]
    #[builder(default, setter(strip_option, into))]
    pub localidad: Option<String>,
    /// Province of the branch.
    #[serde(rename = "Provincia")]
    #[builder(default, setter(strip_option, into))]
    pub provincia: Option<String>,
}

impl Validate for ConsultaSucursales {}

/// Quote request.
#[derive(AndreaniRequest, Serialize, TypedBuilder, Debug, Clone, PartialEq)]
#[andreani(operation = "CotizarEnvio")]
pub struct CotizacionEnvio {
    /// Destination postal code.
    #[serde(rename = "CPDestino")]
    #[builder(setter(into))]
    pub cp_destino: String,
    /// Weight in grams.
    #[serde(rename = "Peso")]
    pub peso: f64,
    /// Volume in cubic centimeters.
    #[serde(rename = "Volumen")]
    pub volumen: f64,
    /// Branch the parcel is picked up from, for counter deliveries.
    #[serde(rename = "SucursalRetiro")]
    #[builder(default, setter(strip_option, into))]
    pub sucursal_retiro: Option<String>,
    /// Declared value.
    #[serde(rename = "ValorDeclarado")]
    #[builder(default, setter(strip_option))]
    pub valor_declarado: Option<f64>,
}

impl Validate for CotizacionEnvio {
    fn validate(&self) -> Result<(), ValidationError> {
        greater_than("peso", self.peso, 0.0)?;
        greater_than("volumen", self.volumen, 0.0)?;
        not_empty("cp_destino", &self.cp_destino)
    }
}

/// Shipment creation request.
#[derive(AndreaniRequest, Serialize, TypedBuilder, Debug, Clone, PartialEq)]
#[andreani(operation = "ConfirmarCompra")]
pub struct Compra {
    /// Street of the delivery address.
    #[serde(rename = "Calle")]
    #[builder(setter(into))]
    pub calle: String,
    /// Street number.
    #[serde(rename = "Numero")]
    #[builder(setter(into))]
    pub numero: String,
    /// Floor.
    #[serde(rename = "Piso")]
    #[builder(default, setter(strip_option, into))]
    pub piso: Option<String>,
    /// Apartment.
    #[serde(rename = "Departamento")]
    #[builder(default, setter(strip_option, into))]
    pub departamento: Option<String>,
    /// Destination postal code.
    #[serde(rename = "CodigoPostalDestino")]
    #[builder(setter(into))]
    pub codigo_postal_destino: String,
    /// Locality of the delivery address.
    #[serde(rename = "Localidad")]
    #[builder(setter(into))]
    pub localidad: String,
    /// Province of the delivery address.
    #[serde(rename = "Provincia")]
    #[builder(setter(into))]
    pub provincia: String,
    /// Full name of the recipient.
    #[serde(rename = "NombreApellido")]
    #[builder(setter(into))]
    pub nombre_apellido: String,
    /// Full name of an alternative recipient.
    #[serde(rename = "NombreApellidoAlternativo")]
    #[builder(default, setter(strip_option, into))]
    pub nombre_apellido_alternativo: Option<String>,
    /// Identity document type, e.g. `DNI`.
    #[serde(rename = "TipoDocumento")]
    #[builder(setter(into))]
    pub tipo_documento: String,
    /// Identity document number.
    #[serde(rename = "NumeroDocumento")]
    #[builder(setter(into))]
    pub numero_documento: String,
    /// Recipient e-mail.
    #[serde(rename = "Email")]
    #[builder(default, setter(strip_option, into))]
    pub email: Option<String>,
    /// Recipient phone number.
    #[serde(rename = "NumeroTelefono")]
    #[builder(default, setter(strip_option, into))]
    pub numero_telefono: Option<String>,
    /// Recipient mobile number.
    #[serde(rename = "NumeroCelular")]
    #[builder(default, setter(strip_option, into))]
    pub numero_celular: Option<String>,
    /// Transaction number on the seller's side.
    #[serde(rename = "NumeroTransaccion")]
    #[builder(default, setter(strip_option, into))]
    pub numero_transaccion: Option<String>,
    /// Description of the products delivered.
    #[serde(rename = "DetalleProductosEntrega")]
    #[builder(default, setter(strip_option, into))]
    pub detalle_productos_entrega: Option<String>,
    /// Description of the products picked up.
    #[serde(rename = "DetalleProductosRetiro")]
    #[builder(default, setter(strip_option, into))]
    pub detalle_productos_retiro: Option<String>,
    /// Weight in grams.
    #[serde(rename = "Peso")]
    pub peso: f64,
    /// Volume in cubic centimeters.
    #[serde(rename = "Volumen")]
    pub volumen: f64,
    /// Declared value.
    #[serde(rename = "ValorDeclarado")]
    #[builder(default, setter(strip_option))]
    pub valor_declarado: Option<f64>,
    /// Amount to collect from the recipient on delivery.
    #[serde(rename = "ValorACobrar")]
    #[builder(default, setter(strip_option))]
    pub valor_a_cobrar: Option<f64>,
    /// Rate, as returned by a quote.
    #[serde(rename = "Tarifa")]
    #[builder(default, setter(strip_option))]
    pub tarifa: Option<f64>,
    /// Distance category, as returned by a quote.
    #[serde(rename = "CategoriaDistancia")]
    #[builder(default, setter(strip_option, into))]
    pub categoria_distancia: Option<String>,
    /// Billing category.
    #[serde(rename = "CategoriaFacturacion")]
    #[builder(default, setter(strip_option, into))]
    pub categoria_facturacion: Option<String>,
    /// Weight category, as returned by a quote.
    #[serde(rename = "CategoriaPeso")]
    #[builder(default, setter(strip_option, into))]
    pub categoria_peso: Option<String>,
    /// Branch the parcel is picked up from, for counter deliveries.
    #[serde(rename = "SucursalRetiro")]
    #[builder(default, setter(strip_option, into))]
    pub sucursal_retiro: Option<String>,
}

impl Validate for Compra {
    fn validate(&self) -> Result<(), ValidationError> {
        greater_than("peso", self.peso, 0.0)?;
        greater_than("volumen", self.volumen, 0.0)?;
        not_empty("codigo_postal_destino", &self.codigo_postal_destino)
    }
}

/// Shipment creation request that also returns the label print data.
#[derive(AndreaniRequest, Serialize, TypedBuilder, Debug, Clone, PartialEq)]
#[andreani(operation = "ConfirmarCompraDatosImpresion")]
pub struct CompraConRecibo {
    #[serde(flatten)]
    pub compra: Compra,
    /// Receipt number printed on the label.
    #[serde(rename = "NumeroDeRecibo")]
    #[builder(setter(into))]
    pub numero_recibo: String,
}

impl Validate for CompraConRecibo {
    fn validate(&self) -> Result<(), ValidationError> {
        Validate::validate(&self.compra)
    }
}

/// Traceability query of a piece.
#[derive(AndreaniRequest, Serialize, Debug, Clone, PartialEq)]
#[andreani(operation = "ConsultarTrazabilidad")]
pub struct ConsultaTrazabilidad {
    #[serde(rename = "NroPieza")]
    pub nro_pieza: String,
}

impl Validate for ConsultaTrazabilidad {
    fn validate(&self) -> Result<(), ValidationError> {
        not_empty("nro_pieza", &self.nro_pieza)
    }
}

/// Voucher print request.
#[derive(AndreaniRequest, Serialize, Debug, Clone, PartialEq)]
#[andreani(operation = "ImprimirConstancia")]
pub struct Constancia {
    #[serde(rename = "NumeroAndreani")]
    pub numero_andreani: String,
}

impl Validate for Constancia {
    fn validate(&self) -> Result<(), ValidationError> {
        not_empty("numero_andreani", &self.numero_andreani)
    }
}

/// Cancellation request.
#[derive(AndreaniRequest, Serialize, Debug, Clone, PartialEq)]
#[andreani(operation = "AnularEnvio")]
pub struct Anulacion {
    #[serde(rename = "NumeroAndreani")]
    pub numero_andreani: String,
}

impl Validate for Anulacion {
    fn validate(&self) -> Result<(), ValidationError> {
        not_empty("numero_andreani", &self.numero_andreani)
    }
}

/// Deposit receipt request.
#[derive(AndreaniRequest, Serialize, Debug, Clone, PartialEq)]
#[andreani(operation = "GenerarRemitoImposicion")]
pub struct RemitoImposicion {
    #[serde(rename = "NumeroAndreani")]
    pub numero_andreani: String,
}

impl Validate for RemitoImposicion {
    fn validate(&self) -> Result<(), ValidationError> {
        not_empty("numero_andreani", &self.numero_andreani)
    }
}
