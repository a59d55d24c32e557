use andreani_rs::{
    AndreaniClient, AndreaniError, Compra, CompraConRecibo, ConsultaSucursales, CotizacionEnvio,
    Endpoints, Operation, Parameters, Service, Value,
};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUCURSALES: &str = "/ConsultaSucursales/ConsultaSucursales.svc";
const COTIZACION: &str = "/CotizacionEnvio/CotizacionEnvio.svc";
const IMPOSICION: &str = "/eCommerce/ImposicionRemota.svc";
const TRAZABILIDAD: &str = "/eCommerce/ConsultaTrazabilidad.svc";

fn envelope(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<s:Envelope xmlns:s="http://www.w3.org/2003/05/soap-envelope">
  <s:Body>{body}</s:Body>
</s:Envelope>"#
    )
}

fn fault(reason: &str) -> String {
    envelope(&format!(
        r#"<s:Fault>
      <s:Code><s:Value>s:Receiver</s:Value></s:Code>
      <s:Reason><s:Text xml:lang="es-AR">{reason}</s:Text></s:Reason>
    </s:Fault>"#
    ))
}

fn client(server: &MockServer) -> AndreaniClient {
    AndreaniClient::builder()
        .username("eCommerce_Integra")
        .password("passw0rd")
        .client_code("CL0003750")
        .contract_code("400006709")
        .endpoints(Endpoints::with_base(&server.uri()).unwrap())
        .build()
        .unwrap()
}

fn compra() -> Compra {
    Compra::builder()
        .calle("Av. Corrientes")
        .numero("1234")
        .codigo_postal_destino("1043")
        .localidad("CABA")
        .provincia("Buenos Aires")
        .nombre_apellido("Juan Perez")
        .tipo_documento("DNI")
        .numero_documento("30123456")
        .peso(1500.0)
        .volumen(2000.0)
        .tarifa(85.33)
        .build()
}

#[tokio::test]
async fn test_consultar_sucursales() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<ConsultarSucursalesResponse xmlns="urn:ConsultarSucursales">
      <ConsultarSucursalesResult>
        <ResultadoConsultarSucursales>
          <Sucursal>PALERMO</Sucursal>
          <Numero>12</Numero>
          <HoradeTrabajo>Lunes a Viernes 9 a 18</HoradeTrabajo>
        </ResultadoConsultarSucursales>
        <ResultadoConsultarSucursales>
          <Sucursal>BELGRANO</Sucursal>
          <Numero>15</Numero>
          <HoradeTrabajo>Lunes a Viernes 9 a 17</HoradeTrabajo>
        </ResultadoConsultarSucursales>
      </ConsultarSucursalesResult>
    </ConsultarSucursalesResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(SUCURSALES))
        .and(header(
            "content-type",
            r#"application/soap+xml; charset=utf-8; action="urn:ConsultarSucursales#ConsultarSucursales""#,
        ))
        .and(body_string_contains("<wsse:Username>eCommerce_Integra</wsse:Username>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sucursales = client(&mock_server)
        .consultar_sucursales(&ConsultaSucursales::default())
        .await
        .unwrap();

    assert_eq!(sucursales.len(), 2);
    assert_eq!(sucursales[0]["sucursal"], Value::from("PALERMO"));
    assert_eq!(sucursales[1]["sucursal"], Value::from("BELGRANO"));
    assert_eq!(
        sucursales[1]["horade_trabajo"],
        Value::from("Lunes a Viernes 9 a 17")
    );
}

#[tokio::test]
async fn test_consultar_sucursales_without_match() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<ConsultarSucursalesResponse xmlns="urn:ConsultarSucursales">
      <ConsultarSucursalesResult/>
    </ConsultarSucursalesResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(SUCURSALES))
        .and(body_string_contains("<ns:CodigoPostal>9999</ns:CodigoPostal>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sucursales = client(&mock_server)
        .consultar_sucursales(&ConsultaSucursales::builder().codigo_postal("9999").build())
        .await
        .unwrap();

    assert!(sucursales.is_empty());
}

#[tokio::test]
async fn test_cotizar_envio() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<CotizarEnvioResponse xmlns="urn:CotizarEnvio">
      <CotizarEnvioResult xmlns:a="urn:CotizarEnvio.Entities">
        <a:CategoriaDistancia>INTERIOR 1</a:CategoriaDistancia>
        <a:CategoriaDistanciaId>2</a:CategoriaDistanciaId>
        <a:PesoAforado>1.5</a:PesoAforado>
        <a:Tarifa>85.33</a:Tarifa>
      </CotizarEnvioResult>
    </CotizarEnvioResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(COTIZACION))
        .and(body_string_contains("<ns:Cliente>CL0003750</ns:Cliente>"))
        .and(body_string_contains("<ns:Contrato>400006709</ns:Contrato>"))
        .and(body_string_contains("<ns:Peso>1.5</ns:Peso>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let cotizacion = client(&mock_server)
        .cotizar_envio(
            &CotizacionEnvio::builder()
                .cp_destino("1400")
                .peso(1.5)
                .volumen(200.0)
                .build(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cotizacion.len(), 4);
    assert_eq!(cotizacion["tarifa"], Value::from("85.33"));
    assert_eq!(cotizacion["categoria_distancia_id"], Value::from("2"));
}

#[tokio::test]
async fn test_cotizar_envio_validation_skips_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    for (peso, volumen) in [(0.0, 10.0), (-1.0, 10.0), (10.0, 0.0)] {
        let result = client
            .cotizar_envio(
                &CotizacionEnvio::builder()
                    .cp_destino("1400")
                    .peso(peso)
                    .volumen(volumen)
                    .build(),
            )
            .await;
        assert!(matches!(result, Err(AndreaniError::Validation(_))));
    }
}

#[tokio::test]
async fn test_cotizar_envio_invalid_postal_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COTIZACION))
        .respond_with(ResponseTemplate::new(500).set_body_string(fault("Codigo postal es invalido")))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .cotizar_envio(
            &CotizacionEnvio::builder()
                .cp_destino("0000")
                .peso(1.5)
                .volumen(200.0)
                .build(),
        )
        .await;

    assert!(matches!(result, Err(AndreaniError::InvalidPostalCode)));
}

#[tokio::test]
async fn test_service_fault_keeps_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COTIZACION))
        .respond_with(ResponseTemplate::new(500).set_body_string(fault("Contrato inexistente")))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .cotizar_envio(
            &CotizacionEnvio::builder()
                .cp_destino("1400")
                .peso(1.5)
                .volumen(200.0)
                .build(),
        )
        .await;

    match result {
        Err(AndreaniError::Service { reason }) => assert_eq!(reason, "Contrato inexistente"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_status_without_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).reporte_envios_pendientes_ingreso().await;

    match result {
        Err(AndreaniError::UnexpectedStatus { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_confirmar_compra() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<ConfirmarCompraResponse xmlns="urn:ImposicionRemota">
      <ConfirmarCompraResult>
        <NumeroAndreani>310000000000001</NumeroAndreani>
        <Recibo i:nil="true" xmlns:i="http://www.w3.org/2001/XMLSchema-instance"/>
      </ConfirmarCompraResult>
    </ConfirmarCompraResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(IMPOSICION))
        .and(body_string_contains("<ns:compra><ns:Calle>Av. Corrientes</ns:Calle>"))
        .and(body_string_contains("<ns:Contrato>400006709</ns:Contrato>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let envio = client(&mock_server)
        .confirmar_compra(&compra())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(envio["numero_andreani"], Value::from("310000000000001"));
    assert_eq!(envio["recibo"], Value::Null);
}

#[tokio::test]
async fn test_confirmar_compra_datos_impresion() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<ConfirmarCompraConReciboResponse xmlns="urn:ImposicionRemota">
      <ConfirmarCompraConReciboResult>
        <NumeroAndreani>310000000000002</NumeroAndreani>
        <DatosImpresion>
          <Sucursal>PALERMO</Sucursal>
          <CodigoDeBarras>310000000000002</CodigoDeBarras>
        </DatosImpresion>
      </ConfirmarCompraConReciboResult>
    </ConfirmarCompraConReciboResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(IMPOSICION))
        .and(body_string_contains("<ns:NumeroDeRecibo>R-0001</ns:NumeroDeRecibo>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let envio = client(&mock_server)
        .confirmar_compra_datos_impresion(
            &CompraConRecibo::builder()
                .compra(compra())
                .numero_recibo("R-0001")
                .build(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(envio["numero_andreani"], Value::from("310000000000002"));
    assert_eq!(
        envio["datos_impresion"]["codigo_de_barras"],
        Value::from("310000000000002")
    );
}

#[tokio::test]
async fn test_consultar_trazabilidad() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<ConsultarTrazabilidadResponse xmlns="urn:ConsultarTrazabilidad">
      <ConsultarTrazabilidadResult>
        <NroPieza>ABC123</NroPieza>
        <Eventos>
          <Evento><Estado>Pendiente de ingreso</Estado></Evento>
          <Evento><Estado>En distribucion</Estado></Evento>
        </Eventos>
      </ConsultarTrazabilidadResult>
    </ConsultarTrazabilidadResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(TRAZABILIDAD))
        .and(body_string_contains(
            "<ns:Pieza><ns:NroPieza>ABC123</ns:NroPieza><ns:CodigoCliente>CL0003750</ns:CodigoCliente></ns:Pieza>",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let traza = client(&mock_server)
        .consultar_trazabilidad("ABC123")
        .await
        .unwrap()
        .unwrap();

    let eventos = traza["eventos"]["evento"].as_array().unwrap();
    assert_eq!(eventos.len(), 2);
    assert_eq!(eventos[1]["estado"], Value::from("En distribucion"));
}

#[tokio::test]
async fn test_imprimir_constancia() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<ImprimirConstanciaResponse xmlns="urn:ImposicionRemota">
      <ImprimirConstanciaResult>
        <ResultadoImprimirConstancia>
          <PdfLinkFile>https://www.e-andreani.com/constancias/310000000000001.pdf</PdfLinkFile>
        </ResultadoImprimirConstancia>
      </ImprimirConstanciaResult>
    </ImprimirConstanciaResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(IMPOSICION))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let constancia = client(&mock_server)
        .imprimir_constancia("310000000000001")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        constancia["resultado_imprimir_constancia"]["pdf_link_file"],
        Value::from("https://www.e-andreani.com/constancias/310000000000001.pdf")
    );
}

#[tokio::test]
async fn test_anular_envio_already_cancelled() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<AnularEnviosResponse xmlns="urn:ImposicionRemota">
      <AnularEnviosResult xmlns:i="http://www.w3.org/2001/XMLSchema-instance" i:nil="true"/>
    </AnularEnviosResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(IMPOSICION))
        .and(body_string_contains(
            "<ns:ParamAnularEnvios><ns:NumeroAndreani>310000000000001</ns:NumeroAndreani></ns:ParamAnularEnvios>",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .anular_envio("310000000000001")
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_reporte_envios_pendientes_impresion() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<ReporteDeEnviosPendientesDeImpresionResponse xmlns="urn:ImposicionRemota">
      <ReporteDeEnviosPendientesDeImpresionResult>
        <EnvioPendiente><NumeroAndreani>310000000000001</NumeroAndreani></EnvioPendiente>
      </ReporteDeEnviosPendientesDeImpresionResult>
    </ReporteDeEnviosPendientesDeImpresionResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(IMPOSICION))
        .and(body_string_contains("<ns:CodigoDeCliente>CL0003750</ns:CodigoDeCliente>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pendientes = client(&mock_server)
        .reporte_envios_pendientes_impresion()
        .await
        .unwrap();

    assert_eq!(pendientes.len(), 1);
    assert_eq!(pendientes[0]["numero_andreani"], Value::from("310000000000001"));
}

#[tokio::test]
async fn test_generar_remito_imposicion() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<GenerarRemitoDeImposicionResponse xmlns="urn:ImposicionRemota">
      <GenerarRemitoDeImposicionResult>
        <NumeroRemito>R000123</NumeroRemito>
        <PdfLinkFile>https://www.e-andreani.com/remitos/R000123.pdf</PdfLinkFile>
      </GenerarRemitoDeImposicionResult>
    </GenerarRemitoDeImposicionResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(IMPOSICION))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let remito = client(&mock_server)
        .generar_remito_imposicion("310000000000001")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(remito["numero_remito"], Value::from("R000123"));
}

#[tokio::test]
async fn test_not_implemented_operations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    assert!(matches!(
        client.consultar_codigo_postal("1400").await,
        Err(AndreaniError::NotImplemented("consultar_codigo_postal"))
    ));
    assert!(matches!(
        client.consulta_ultimo_estado_distribucion("310000000000001").await,
        Err(AndreaniError::NotImplemented("consulta_ultimo_estado_distribucion"))
    ));
    assert!(matches!(
        client.consultar_datos_impresion("310000000000001").await,
        Err(AndreaniError::NotImplemented("consultar_datos_impresion"))
    ));
}

#[derive(Debug, serde::Deserialize)]
struct Cotizacion {
    categoria_distancia: String,
    tarifa: String,
}

#[tokio::test]
async fn test_call_generic() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<CotizarEnvioResponse xmlns="urn:CotizarEnvio">
      <CotizarEnvioResult>
        <CategoriaDistancia>LOCAL</CategoriaDistancia>
        <Tarifa>60.00</Tarifa>
      </CotizarEnvioResult>
    </CotizarEnvioResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(COTIZACION))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let cotizacion = client(&mock_server)
        .call_generic::<Cotizacion>(
            Operation::CotizarEnvio,
            Parameters::new()
                .param("CPDestino", "1400")
                .param("Peso", "1")
                .param("Volumen", "1"),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cotizacion.categoria_distancia, "LOCAL");
    assert_eq!(cotizacion.tarifa, "60.00");
}

#[tokio::test]
async fn test_call_refuses_unpublished_operations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(envelope("")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    for operation in [
        Operation::ConsultarCodigoPostal,
        Operation::ConsultaUltimoEstadoDistribucion,
        Operation::ConsultarDatosImpresion,
    ] {
        let result = client
            .call(operation, Parameters::new().param("CodigoPostal", "1400"))
            .await;
        assert!(
            matches!(result, Err(AndreaniError::NotImplemented(name)) if name == operation.name())
        );
    }
    assert!(matches!(
        client
            .call_normalized(Operation::ConsultarCodigoPostal, Parameters::new())
            .await,
        Err(AndreaniError::NotImplemented("consultar_codigo_postal"))
    ));
}

#[tokio::test]
async fn test_consultar_trazabilidad_single_event() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<ConsultarTrazabilidadResponse xmlns="urn:ConsultarTrazabilidad">
      <ConsultarTrazabilidadResult>
        <NroPieza>ABC123</NroPieza>
        <Eventos>
          <Evento><Estado>Pendiente de ingreso</Estado></Evento>
        </Eventos>
      </ConsultarTrazabilidadResult>
    </ConsultarTrazabilidadResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(TRAZABILIDAD))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let traza = client(&mock_server)
        .consultar_trazabilidad("ABC123")
        .await
        .unwrap()
        .unwrap();

    let eventos = traza["eventos"]["evento"].as_array().unwrap();
    assert_eq!(eventos.len(), 1);
    assert_eq!(eventos[0]["estado"], Value::from("Pendiente de ingreso"));
}

#[derive(Debug, serde::Deserialize)]
struct Evento {
    estado: String,
}

#[derive(Debug, serde::Deserialize)]
struct Eventos {
    evento: Vec<Evento>,
}

#[derive(Debug, serde::Deserialize)]
struct Trazabilidad {
    nro_pieza: String,
    eventos: Eventos,
}

#[tokio::test]
async fn test_call_generic_single_event_into_vec() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<ConsultarTrazabilidadResponse xmlns="urn:ConsultarTrazabilidad">
      <ConsultarTrazabilidadResult>
        <NroPieza>ABC123</NroPieza>
        <Eventos><Evento><Estado>Entregado</Estado></Evento></Eventos>
      </ConsultarTrazabilidadResult>
    </ConsultarTrazabilidadResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(TRAZABILIDAD))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let traza: Trazabilidad = client(&mock_server)
        .call_generic(
            Operation::ConsultarTrazabilidad,
            Parameters::new().param("NroPieza", "ABC123"),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(traza.nro_pieza, "ABC123");
    assert_eq!(traza.eventos.evento.len(), 1);
    assert_eq!(traza.eventos.evento[0].estado, "Entregado");
}

#[tokio::test]
async fn test_empty_values_are_kept() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<GenerarRemitoDeImposicionResponse xmlns="urn:ImposicionRemota">
      <GenerarRemitoDeImposicionResult>
        <NumeroRemito>R000123</NumeroRemito>
        <Observaciones></Observaciones>
      </GenerarRemitoDeImposicionResult>
    </GenerarRemitoDeImposicionResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path(IMPOSICION))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let remito = client(&mock_server)
        .generar_remito_imposicion("310000000000001")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(remito["observaciones"], Value::from(""));
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = AndreaniClient::builder()
        .username("eCommerce_Integra")
        .password("passw0rd")
        .client_code("CL0003750")
        .contract_code("400006709")
        .endpoints(Endpoints::with_base(&format!("http://127.0.0.1:{port}")).unwrap())
        .build()
        .unwrap();

    let result = client
        .generar_remito_imposicion("310000000000001")
        .await;

    assert!(matches!(result, Err(AndreaniError::ReqwestError(_))));
}

#[tokio::test]
async fn test_single_service_endpoint_override() {
    let mock_server = MockServer::start().await;

    let body = envelope(
        r#"<CotizarEnvioResponse xmlns="urn:CotizarEnvio">
      <CotizarEnvioResult><Tarifa>60.00</Tarifa></CotizarEnvioResult>
    </CotizarEnvioResponse>"#,
    );

    Mock::given(method("POST"))
        .and(path("/cotizador"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut endpoints = Endpoints::default();
    endpoints.set(
        Service::Cotizacion,
        format!("{}/cotizador", mock_server.uri()).parse().unwrap(),
    );
    let client = AndreaniClient::builder()
        .username("eCommerce_Integra")
        .password("passw0rd")
        .client_code("CL0003750")
        .contract_code("400006709")
        .endpoints(endpoints)
        .build()
        .unwrap();

    let cotizacion = client
        .cotizar_envio(
            &CotizacionEnvio::builder()
                .cp_destino("1400")
                .peso(1500.0)
                .volumen(2000.0)
                .build(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cotizacion["tarifa"], Value::from("60.00"));
}
