use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

use crate::error::AndreaniError;
use crate::node::Node;
use crate::normalize::{normalize, normalize_list, normalize_record, Record};
use crate::operations::{Endpoints, Environment, Operation, OperationDescriptor};
use crate::requests::{
    Anulacion, Compra, CompraConRecibo, Constancia, ConsultaSucursales, ConsultaTrazabilidad,
    CotizacionEnvio, RemitoImposicion,
};
use crate::soap::{self, SoapOutcome};
use crate::{AndreaniRequest, AndreaniResult, Credentials, Parameters};

/// The internal builder for constructing an `AndreaniClient`
#[derive(TypedBuilder)]
#[builder(build_method(into = AndreaniResult<AndreaniClient>))]
pub struct InternalAndreaniClient {
    /// User name of the web services account
    #[builder(setter(into))]
    username: String,
    /// Password of the web services account
    #[builder(setter(into))]
    password: String,
    /// Client account code, stamped into queries and reports
    #[builder(setter(into))]
    client_code: String,
    /// Contract code, stamped into quotes and shipment creations
    #[builder(setter(into))]
    contract_code: String,
    /// Deployment to talk to
    #[builder(default)]
    environment: Environment,
    /// Endpoints overriding the ones of the environment
    #[builder(default, setter(strip_option))]
    endpoints: Option<Endpoints>,
    /// Allow unsafe SSL certificates
    #[builder(default = false)]
    allow_insecure: bool,
    /// Timeout for the request, none by default
    #[builder(default, setter(strip_option))]
    timeout: Option<std::time::Duration>,
}

impl From<InternalAndreaniClient> for AndreaniResult<AndreaniClient> {
    fn from(client: InternalAndreaniClient) -> Self {
        let mut req_client =
            reqwest::Client::builder().danger_accept_invalid_certs(client.allow_insecure);
        if let Some(timeout) = client.timeout {
            req_client = req_client.timeout(timeout);
        }
        let req_client = req_client.build()?;

        Ok(AndreaniClient {
            credentials: Credentials::new(
                client.username,
                client.password,
                client.client_code,
                client.contract_code,
            ),
            environment: client.environment,
            timeout: client.timeout,
            endpoints: client
                .endpoints
                .unwrap_or_else(|| Endpoints::for_environment(client.environment)),
            client: req_client,
        })
    }
}

/// The web client to consume the courier's web services
///
/// Every operation issues a single request. Credentials and endpoints are fixed when the
/// client is built.
pub struct AndreaniClient {
    /// Credentials and account identifiers
    credentials: Credentials,
    /// Deployment the default endpoints were taken from
    environment: Environment,
    /// Endpoint of every service
    endpoints: Endpoints,
    /// Request timeout, the transport default when `None`
    timeout: Option<std::time::Duration>,
    /// The client
    client: reqwest::Client,
}

impl AndreaniClient {
    /// Creates a builder for the client
    pub fn builder() -> InternalAndreaniClientBuilder {
        InternalAndreaniClient::builder()
    }

    /// Returns the credentials of the client.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the environment of the client.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the request timeout, if one was set.
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout
    }

    /// Returns the endpoints the client sends requests to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn stamp_account(&self, descriptor: &OperationDescriptor, mut parameters: Parameters) -> Parameters {
        if let Some(field) = descriptor.client_field {
            parameters.insert(field, self.credentials.client_code.as_str());
        }
        if let Some(field) = descriptor.contract_field {
            parameters.insert(field, self.credentials.contract_code.as_str());
        }
        parameters
    }

    /// Performs an operation and returns the raw result.
    ///
    /// The account identifiers the operation expects are added to `parameters`. Faults are
    /// turned into [`AndreaniError::InvalidPostalCode`] or [`AndreaniError::Service`].
    /// Operations without a published contract fail with [`AndreaniError::NotImplemented`]
    /// before anything is sent.
    #[tracing::instrument(skip_all, fields(operation = %operation))]
    pub async fn call(
        &self,
        operation: Operation,
        parameters: Parameters,
    ) -> AndreaniResult<Option<Node>> {
        let descriptor = operation.descriptor();
        if !descriptor.implemented {
            return Err(AndreaniError::NotImplemented(descriptor.name));
        }
        let parameters = self.stamp_account(descriptor, parameters);
        let body = soap::build_request(descriptor, &self.credentials, &parameters)?;
        let target_url = self.endpoints.get(descriptor.service).clone();

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(&soap::content_type(descriptor))?,
        );

        debug!(url = %target_url, action = %descriptor.soap_action(), "sending request");
        let response = self
            .client
            .post(target_url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        // Faults come with a 500 status, the body is read regardless.
        let status = response.status();
        let text = response.text().await?;
        trace!(%status, body = %text, "received response");

        let outcome = match soap::parse_response(text.as_bytes(), descriptor) {
            Ok(outcome) => outcome,
            Err(_) if !status.is_success() => {
                return Err(AndreaniError::UnexpectedStatus {
                    status: status.as_u16(),
                    body: text,
                })
            }
            Err(err) => return Err(err),
        };

        match outcome {
            SoapOutcome::Fault(fault) => {
                warn!(reason = %fault.reason, code = ?fault.code, "service fault");
                Err(AndreaniError::from_fault_reason(&fault.reason))
            }
            SoapOutcome::Result(_) if !status.is_success() => Err(AndreaniError::UnexpectedStatus {
                status: status.as_u16(),
                body: text,
            }),
            SoapOutcome::Result(node) => Ok(node),
        }
    }

    /// Performs an operation and returns the normalized result.
    pub async fn call_normalized(
        &self,
        operation: Operation,
        parameters: Parameters,
    ) -> AndreaniResult<Option<Value>> {
        let node = self.call(operation, parameters).await?;
        Ok(node.as_ref().map(normalize))
    }

    /// Performs an operation and deserializes the normalized result to the type `T`.
    ///
    /// Field names of `T` are the snake case names of the remote fields.
    pub async fn call_generic<T>(
        &self,
        operation: Operation,
        parameters: Parameters,
    ) -> AndreaniResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.call_normalized(operation, parameters).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Validates a typed request and performs its operation.
    pub async fn send<R>(&self, request: &R) -> AndreaniResult<Option<Node>>
    where
        R: AndreaniRequest,
    {
        AndreaniRequest::validate(request)?;
        let parameters = request.to_parameters()?;
        self.call(R::OPERATION, parameters).await
    }

    async fn send_record<R>(&self, request: &R) -> AndreaniResult<Option<Record>>
    where
        R: AndreaniRequest,
    {
        let node = self.send(request).await?;
        Ok(node.as_ref().and_then(normalize_record))
    }

    /// Returns the branches matching the filters. No match yields an empty list.
    pub async fn consultar_sucursales(
        &self,
        consulta: &ConsultaSucursales,
    ) -> AndreaniResult<Vec<Record>> {
        let node = self.send(consulta).await?;
        Ok(normalize_list(node.as_ref()))
    }

    /// Quotes a shipment.
    ///
    /// Weight and volume must be greater than zero; an unknown destination postal code
    /// fails with [`AndreaniError::InvalidPostalCode`].
    pub async fn cotizar_envio(
        &self,
        cotizacion: &CotizacionEnvio,
    ) -> AndreaniResult<Option<Record>> {
        self.send_record(cotizacion).await
    }

    /// Creates a shipment. The returned record carries its `numero_andreani`.
    ///
    /// The service has no idempotency key: every call creates a new shipment.
    pub async fn confirmar_compra(&self, compra: &Compra) -> AndreaniResult<Option<Record>> {
        self.send_record(compra).await
    }

    /// Creates a shipment and returns the data needed to print its label.
    pub async fn confirmar_compra_datos_impresion(
        &self,
        compra: &CompraConRecibo,
    ) -> AndreaniResult<Option<Record>> {
        self.send_record(compra).await
    }

    /// Returns the traceability of a piece.
    pub async fn consultar_trazabilidad(&self, nro_pieza: &str) -> AndreaniResult<Option<Record>> {
        self.send_record(&ConsultaTrazabilidad {
            nro_pieza: nro_pieza.to_string(),
        })
        .await
    }

    /// Returns the voucher of a shipment. The link to its PDF is under
    /// `resultado_imprimir_constancia.pdf_link_file`.
    pub async fn imprimir_constancia(
        &self,
        numero_andreani: &str,
    ) -> AndreaniResult<Option<Record>> {
        self.send_record(&Constancia {
            numero_andreani: numero_andreani.to_string(),
        })
        .await
    }

    /// Cancels a shipment that has not entered the operative circuit yet.
    ///
    /// A shipment the service no longer knows about yields `None`.
    pub async fn anular_envio(&self, numero_andreani: &str) -> AndreaniResult<Option<Record>> {
        self.send_record(&Anulacion {
            numero_andreani: numero_andreani.to_string(),
        })
        .await
    }

    /// Returns the shipments of the client account that are pending print.
    pub async fn reporte_envios_pendientes_impresion(&self) -> AndreaniResult<Vec<Record>> {
        let node = self
            .call(Operation::ReporteEnviosPendientesImpresion, Parameters::new())
            .await?;
        Ok(normalize_list(node.as_ref()))
    }

    /// Returns the shipments of the client account that were printed but not received yet.
    pub async fn reporte_envios_pendientes_ingreso(&self) -> AndreaniResult<Vec<Record>> {
        let node = self
            .call(Operation::ReporteEnviosPendientesIngreso, Parameters::new())
            .await?;
        Ok(normalize_list(node.as_ref()))
    }

    /// Generates the deposit receipt of a shipment.
    pub async fn generar_remito_imposicion(
        &self,
        numero_andreani: &str,
    ) -> AndreaniResult<Option<Record>> {
        self.send_record(&RemitoImposicion {
            numero_andreani: numero_andreani.to_string(),
        })
        .await
    }

    /// Postal code lookup. Its remote contract is not published.
    pub async fn consultar_codigo_postal(
        &self,
        codigo_postal: &str,
    ) -> AndreaniResult<Option<Record>> {
        self.call_record(
            Operation::ConsultarCodigoPostal,
            Parameters::new().param("CodigoPostal", codigo_postal),
        )
        .await
    }

    /// Last distribution status of a shipment. Its remote contract is not published.
    pub async fn consulta_ultimo_estado_distribucion(
        &self,
        numero_andreani: &str,
    ) -> AndreaniResult<Option<Record>> {
        self.call_record(
            Operation::ConsultaUltimoEstadoDistribucion,
            Parameters::new().param("NumeroAndreani", numero_andreani),
        )
        .await
    }

    /// Print data of a piece. Its remote contract is not published.
    pub async fn consultar_datos_impresion(
        &self,
        numero_andreani: &str,
    ) -> AndreaniResult<Option<Record>> {
        self.call_record(
            Operation::ConsultarDatosImpresion,
            Parameters::new().param("NumeroAndreani", numero_andreani),
        )
        .await
    }

    async fn call_record(
        &self,
        operation: Operation,
        parameters: Parameters,
    ) -> AndreaniResult<Option<Record>> {
        let node = self.call(operation, parameters).await?;
        Ok(node.as_ref().and_then(normalize_record))
    }
}
