use std::fmt;
use std::str::FromStr;

use url::Url;

/// Logical operations offered by the web services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Branches enabled for counter delivery.
    ConsultarSucursales,
    /// Online quote for a shipment.
    CotizarEnvio,
    /// Creates a shipment. The voucher must be printed afterwards.
    ConfirmarCompra,
    /// Creates a shipment and returns the data needed to print its label.
    ConfirmarCompraDatosImpresion,
    /// Postal codes, localities, provinces and countries.
    ConsultarCodigoPostal,
    /// Traceability of a shipment.
    ConsultarTrazabilidad,
    /// Last distribution status of one or more shipments.
    ConsultaUltimoEstadoDistribucion,
    /// Link to the PDF voucher of a shipment pending print.
    ImprimirConstancia,
    /// Cancels a shipment that has not entered the operative circuit.
    AnularEnvio,
    /// Print data of a given piece.
    ConsultarDatosImpresion,
    /// Shipments created through `ConfirmarCompra` and not printed yet.
    ReporteEnviosPendientesImpresion,
    /// Shipments printed but not yet received by the courier.
    ReporteEnviosPendientesIngreso,
    /// Deposit receipt for a branch drop-off or warehouse pickup.
    GenerarRemitoImposicion,
}

impl Operation {
    /// All operations, in table order.
    pub const ALL: [Operation; 13] = [
        Operation::ConsultarSucursales,
        Operation::CotizarEnvio,
        Operation::ConfirmarCompra,
        Operation::ConfirmarCompraDatosImpresion,
        Operation::ConsultarCodigoPostal,
        Operation::ConsultarTrazabilidad,
        Operation::ConsultaUltimoEstadoDistribucion,
        Operation::ImprimirConstancia,
        Operation::AnularEnvio,
        Operation::ConsultarDatosImpresion,
        Operation::ReporteEnviosPendientesImpresion,
        Operation::ReporteEnviosPendientesIngreso,
        Operation::GenerarRemitoImposicion,
    ];

    /// Logical name of the operation.
    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Static descriptor of the operation.
    pub fn descriptor(&self) -> &'static OperationDescriptor {
        // The table holds one entry per variant, in declaration order.
        &OPERATIONS[*self as usize]
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The web services the operations are spread over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Branch lookup.
    Sucursales,
    /// Quoting.
    Cotizacion,
    /// Remote shipment imposition: creation, vouchers, cancellation and reports.
    Imposicion,
    /// Traceability.
    Trazabilidad,
    /// Postal code lookup.
    CodigoPostal,
}

impl Service {
    /// XML namespace of the request elements of this service.
    pub fn namespace(&self) -> &'static str {
        match self {
            Service::Sucursales => "urn:ConsultarSucursales",
            Service::Cotizacion => "urn:CotizarEnvio",
            Service::Imposicion => "urn:ImposicionRemota",
            Service::Trazabilidad => "urn:ConsultarTrazabilidad",
            Service::CodigoPostal => "urn:ConsultarCodigosPostales",
        }
    }

    /// Path of the service, relative to the environment base.
    fn path(&self) -> &'static str {
        match self {
            Service::Sucursales => "ConsultaSucursales/ConsultaSucursales.svc",
            Service::Cotizacion => "CotizacionEnvio/CotizacionEnvio.svc",
            Service::Imposicion => "eCommerce/ImposicionRemota.svc",
            Service::Trazabilidad => "eCommerce/ConsultaTrazabilidad.svc",
            Service::CodigoPostal => "ConsultaCodigoPostal/ConsultaCodigoPostal.svc",
        }
    }
}

/// Static description of a remote operation.
#[derive(Debug)]
pub struct OperationDescriptor {
    /// The operation described.
    pub operation: Operation,
    /// Logical name.
    pub name: &'static str,
    /// Service hosting the remote method.
    pub service: Service,
    /// Remote method name.
    pub method: &'static str,
    /// Element the parameters are wrapped in, inside the method element.
    pub wrapper: Option<&'static str>,
    /// Parameter receiving the client account code.
    pub client_field: Option<&'static str>,
    /// Parameter receiving the contract code.
    pub contract_field: Option<&'static str>,
    /// Response fields that are sequences, even when a single item is returned.
    pub list_fields: &'static [&'static str],
    /// Whether the remote contract of the operation is known.
    pub implemented: bool,
}

impl OperationDescriptor {
    /// SOAP action announced in the content type.
    pub fn soap_action(&self) -> String {
        format!("{}#{}", self.service.namespace(), self.method)
    }
}

#[allow(clippy::too_many_arguments)]
const fn descriptor(
    operation: Operation,
    name: &'static str,
    service: Service,
    method: &'static str,
    wrapper: Option<&'static str>,
    client_field: Option<&'static str>,
    contract_field: Option<&'static str>,
    list_fields: &'static [&'static str],
) -> OperationDescriptor {
    OperationDescriptor {
        operation,
        name,
        service,
        method,
        wrapper,
        client_field,
        contract_field,
        list_fields,
        implemented: true,
    }
}

const fn unpublished(
    operation: Operation,
    name: &'static str,
    service: Service,
    method: &'static str,
) -> OperationDescriptor {
    OperationDescriptor {
        operation,
        name,
        service,
        method,
        wrapper: None,
        client_field: None,
        contract_field: None,
        list_fields: &[],
        implemented: false,
    }
}

/// The operation table.
pub static OPERATIONS: [OperationDescriptor; 13] = [
    descriptor(
        Operation::ConsultarSucursales,
        "consultar_sucursales",
        Service::Sucursales,
        "ConsultarSucursales",
        Some("consulta"),
        None,
        None,
        &["ResultadoConsultarSucursales"],
    ),
    descriptor(
        Operation::CotizarEnvio,
        "cotizar_envio",
        Service::Cotizacion,
        "CotizarEnvio",
        Some("cotizacionEnvio"),
        Some("Cliente"),
        Some("Contrato"),
        &[],
    ),
    descriptor(
        Operation::ConfirmarCompra,
        "confirmar_compra",
        Service::Imposicion,
        "ConfirmarCompra",
        Some("compra"),
        None,
        Some("Contrato"),
        &[],
    ),
    descriptor(
        Operation::ConfirmarCompraDatosImpresion,
        "confirmar_compra_datos_impresion",
        Service::Imposicion,
        "ConfirmarCompraConRecibo",
        Some("compra"),
        None,
        Some("Contrato"),
        &[],
    ),
    unpublished(
        Operation::ConsultarCodigoPostal,
        "consultar_codigo_postal",
        Service::CodigoPostal,
        "ConsultarCodigosPostales",
    ),
    descriptor(
        Operation::ConsultarTrazabilidad,
        "consultar_trazabilidad",
        Service::Trazabilidad,
        "ConsultarTrazabilidad",
        Some("Pieza"),
        Some("CodigoCliente"),
        None,
        &["Evento"],
    ),
    unpublished(
        Operation::ConsultaUltimoEstadoDistribucion,
        "consulta_ultimo_estado_distribucion",
        Service::Trazabilidad,
        "ConsultarUltimoEstadoDeDistribucion",
    ),
    descriptor(
        Operation::ImprimirConstancia,
        "imprimir_constancia",
        Service::Imposicion,
        "ImprimirConstancia",
        Some("ParamImprimirConstancia"),
        None,
        None,
        &[],
    ),
    descriptor(
        Operation::AnularEnvio,
        "anular_envio",
        Service::Imposicion,
        "AnularEnvios",
        Some("ParamAnularEnvios"),
        None,
        None,
        &[],
    ),
    unpublished(
        Operation::ConsultarDatosImpresion,
        "consultar_datos_impresion",
        Service::Imposicion,
        "ConsultarDatosDeImpresion",
    ),
    descriptor(
        Operation::ReporteEnviosPendientesImpresion,
        "reporte_envios_pendientes_impresion",
        Service::Imposicion,
        "ReporteDeEnviosPendientesDeImpresion",
        Some("ParamReporte"),
        Some("CodigoDeCliente"),
        None,
        &["EnvioPendiente"],
    ),
    descriptor(
        Operation::ReporteEnviosPendientesIngreso,
        "reporte_envios_pendientes_ingreso",
        Service::Imposicion,
        "ReporteDeEnviosPendientesDeIngreso",
        Some("ParamReporte"),
        Some("CodigoDeCliente"),
        None,
        &["EnvioPendiente"],
    ),
    descriptor(
        Operation::GenerarRemitoImposicion,
        "generar_remito_imposicion",
        Service::Imposicion,
        "GenerarRemitoDeImposicion",
        Some("ParamGenerarRemito"),
        Some("CodigoDeCliente"),
        None,
        &[],
    ),
];

/// Deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Test deployment, with test accounts.
    #[default]
    Staging,
    /// Live deployment.
    Production,
}

impl Environment {
    /// Base URL every service path is joined to.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Staging => "https://www.e-andreani.com/CasaStaging/",
            Environment::Production => "https://www.e-andreani.com/CASAWS/",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "staging" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// Endpoint URL of every service.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    sucursales: Url,
    cotizacion: Url,
    imposicion: Url,
    trazabilidad: Url,
    codigo_postal: Url,
}

impl Endpoints {
    /// Builds the endpoints by joining every service path to `base`.
    ///
    /// A base without a trailing slash is treated as a directory.
    pub fn with_base(base: &str) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Endpoints {
            sucursales: base.join(Service::Sucursales.path())?,
            cotizacion: base.join(Service::Cotizacion.path())?,
            imposicion: base.join(Service::Imposicion.path())?,
            trazabilidad: base.join(Service::Trazabilidad.path())?,
            codigo_postal: base.join(Service::CodigoPostal.path())?,
        })
    }

    /// Default endpoints of an environment.
    pub fn for_environment(environment: Environment) -> Self {
        Self::with_base(environment.base_url()).expect("environment base URLs are valid")
    }

    /// Replaces the endpoint of a single service.
    pub fn set(&mut self, service: Service, url: Url) {
        *self.slot(service) = url;
    }

    /// Endpoint of a service.
    pub fn get(&self, service: Service) -> &Url {
        match service {
            Service::Sucursales => &self.sucursales,
            Service::Cotizacion => &self.cotizacion,
            Service::Imposicion => &self.imposicion,
            Service::Trazabilidad => &self.trazabilidad,
            Service::CodigoPostal => &self.codigo_postal,
        }
    }

    fn slot(&mut self, service: Service) -> &mut Url {
        match service {
            Service::Sucursales => &mut self.sucursales,
            Service::Cotizacion => &mut self.cotizacion,
            Service::Imposicion => &mut self.imposicion,
            Service::Trazabilidad => &mut self.trazabilidad,
            Service::CodigoPostal => &mut self.codigo_postal,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}
