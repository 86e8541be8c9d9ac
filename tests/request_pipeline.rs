//! The outgoing request pipeline, end to end against a mock HTTP server
//! and an in-process echo transport.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::{merchant_settings, provider_client, CLIENT_PRIVATE_PEM};
use paygrid_client::types::requests::{
    CancelChargeRequestData, CancelChargeResponseData, DepositRequestData,
    DepositRequestDataAttributes, DepositResponseData,
};
use paygrid_client::types::{JsonRpcRequest, JsonRpcResponse, ResponseError};
use paygrid_client::{
    ApiClient, ApiClientSettings, ApiTransport, PaygridError, Result as PaygridResult,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UUID: &str = "9e7f21d3-58a6-4f17-9b64-452ab0cd4a30";

fn deposit_request() -> DepositRequestData {
    DepositRequestData {
        notification_url: Some("https://example.com/paygrid/notifications".to_string()),
        end_user_id: Some("user@email.com".to_string()),
        message_id: Some("ccd84c10-f8ea-4a5f-b0ef-29e0052dbda4".to_string()),
        attributes: Some(DepositRequestDataAttributes {
            amount: Some("100.00".to_string()),
            currency: Some("EUR".to_string()),
            country: Some("SE".to_string()),
            locale: Some("sv_SE".to_string()),
            firstname: Some("John".to_string()),
            lastname: Some("Doe".to_string()),
            shopper_statement: Some("Test Shop".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Merchant settings pointed at a mock server instead of the test
/// environment.
fn settings_for(url: &str) -> ApiClientSettings {
    ApiClientSettings::for_custom(url)
        .with_credentials("merchant_username", "merchant_password")
        .with_client_private_key_from_pem(CLIENT_PRIVATE_PEM)
        .unwrap()
        .with_provider_key_from_pem(
            // The fake provider key pair signs the mocked responses.
            include_str!("../src/keys/provider_test_key.pem"),
        )
        .unwrap()
        .build()
        .unwrap()
}

/// A provider-signed success envelope for the deposit call.
fn signed_deposit_response(uuid: &str) -> JsonRpcResponse<DepositResponseData> {
    provider_client()
        .create_response_package(
            "Deposit",
            uuid,
            DepositResponseData {
                order_id: Some("7520047953".to_string()),
                url: Some("https://test.paygrid.com/orders/7520047953".to_string()),
                ..Default::default()
            },
        )
        .unwrap()
}

#[tokio::test]
async fn successful_deposit_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1"))
        .and(header("Content-Type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(signed_deposit_response(UUID)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        ApiClient::new(settings_for(&format!("{}/api/1", mock_server.uri()))).unwrap();

    let response: DepositResponseData = client
        .send_request(deposit_request(), "Deposit", Some(UUID.to_string()))
        .await
        .unwrap();

    assert_eq!(response.order_id.as_deref(), Some("7520047953"));
    assert_eq!(
        response.url.as_deref(),
        Some("https://test.paygrid.com/orders/7520047953")
    );
}

#[tokio::test]
async fn wire_request_omits_nulls_and_capitalizes_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(signed_deposit_response(UUID)))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(settings_for(&mock_server.uri())).unwrap();
    client
        .send_request::<_, DepositResponseData>(deposit_request(), "Deposit", Some(UUID.to_string()))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    assert_eq!(body["method"], "Deposit");
    assert_eq!(body["version"], 1.1);
    assert_eq!(body["params"]["UUID"], UUID);
    assert!(body["params"]["Signature"].is_string());
    // Credentials are stamped by the pipeline.
    assert_eq!(body["params"]["Data"]["Username"], "merchant_username");
    assert_eq!(body["params"]["Data"]["Password"], "merchant_password");
    // Unset optional fields never reach the wire.
    assert!(body["params"]["Data"].get("AccountID").is_none());
    assert!(body["params"]["Data"]["Attributes"].get("Email").is_none());
}

#[tokio::test]
async fn error_envelope_raises_data_error() {
    let mock_server = MockServer::start().await;

    let error_body = serde_json::json!({
        "version": "1.1",
        "error": {
            "code": 616,
            "message": "ERROR_INVALID_ORDER_ID",
            "name": "JSONRPCError",
            "error": {
                "signature": "aW52YWxpZA==",
                "uuid": UUID,
                "method": "CancelCharge",
                "data": { "code": 616, "message": "ERROR_INVALID_ORDER_ID" }
            }
        }
    });
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(error_body))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(settings_for(&mock_server.uri())).unwrap();
    let err = client
        .send_request::<_, CancelChargeResponseData>(
            CancelChargeRequestData {
                order_id: Some("123123".to_string()),
                ..Default::default()
            },
            "CancelCharge",
            Some(UUID.to_string()),
        )
        .await
        .unwrap_err();

    let response_error: &ResponseError = err.response_error().expect("structured error detail");
    assert_eq!(response_error.code, 616);
    assert_eq!(
        response_error.message.as_deref(),
        Some("ERROR_INVALID_ORDER_ID")
    );
    assert!(err.to_string().contains("ERROR_INVALID_ORDER_ID"));
}

#[tokio::test]
async fn error_envelope_wins_over_bad_signature() {
    // The error envelope above carries a garbage signature; the caller
    // still gets the business error, not a signature error. This pins
    // the documented check ordering.
    let mock_server = MockServer::start().await;

    let error_body = serde_json::json!({
        "version": "1.1",
        "error": {
            "code": 620,
            "message": "ERROR_UNKNOWN",
            "name": "JSONRPCError",
            "error": {
                "signature": "bm90IGEgcmVhbCBzaWduYXR1cmU=",
                "uuid": UUID,
                "method": "Deposit",
                "data": { "code": 620, "message": "ERROR_UNKNOWN" }
            }
        }
    });
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(error_body))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(settings_for(&mock_server.uri())).unwrap();
    let err = client
        .send_request::<_, DepositResponseData>(deposit_request(), "Deposit", Some(UUID.to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, PaygridError::Data { .. }));
}

#[tokio::test]
async fn rejected_operation_raises_rejection_error() {
    let mock_server = MockServer::start().await;

    let response = provider_client()
        .create_response_package(
            "CancelCharge",
            UUID,
            CancelChargeResponseData {
                result: false,
                rejected: Some("ERROR_INVALID_ORDER_ID".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(settings_for(&mock_server.uri())).unwrap();
    let err = client
        .send_request::<_, CancelChargeResponseData>(
            CancelChargeRequestData {
                order_id: Some("123123".to_string()),
                ..Default::default()
            },
            "CancelCharge",
            Some(UUID.to_string()),
        )
        .await
        .unwrap_err();

    assert_eq!(err.rejection_reason(), Some("ERROR_INVALID_ORDER_ID"));
}

#[tokio::test]
async fn tampered_response_raises_signature_error() {
    let mock_server = MockServer::start().await;

    let mut response = signed_deposit_response(UUID);
    // Flip a byte of the payload after signing.
    response.result.as_mut().unwrap().data.order_id = Some("9999999999".to_string());
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(settings_for(&mock_server.uri())).unwrap();
    let err = client
        .send_request::<_, DepositResponseData>(deposit_request(), "Deposit", Some(UUID.to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, PaygridError::Signature(_)));
}

#[tokio::test]
async fn uuid_mismatch_raises_data_error() {
    let mock_server = MockServer::start().await;

    // Correctly signed, but for a different call UUID.
    let response = signed_deposit_response("00000000-0000-0000-0000-000000000000");
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(settings_for(&mock_server.uri())).unwrap();
    let err = client
        .send_request::<_, DepositResponseData>(deposit_request(), "Deposit", Some(UUID.to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, PaygridError::Data { .. }));
    assert!(err.to_string().to_lowercase().contains("uuid"));
}

#[tokio::test]
async fn validation_failure_stops_before_any_http() {
    struct UnreachableTransport;

    #[async_trait]
    impl ApiTransport for UnreachableTransport {
        async fn post(&self, _url: &str, _body: String) -> PaygridResult<String> {
            panic!("validation must fail before the transport is used");
        }
    }

    let client = ApiClient::builder(merchant_settings())
        .transport(Arc::new(UnreachableTransport))
        .build()
        .unwrap();

    let mut request = deposit_request();
    request.attributes.as_mut().unwrap().shopper_statement = None;

    let err = client.deposit(request).await.unwrap_err();
    assert!(err
        .to_string()
        .contains("The Attributes.ShopperStatement field is required"));
}

#[tokio::test]
async fn transport_failure_surfaces_as_connection_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(settings_for(&mock_server.uri())).unwrap();
    let err = client
        .send_request::<_, DepositResponseData>(deposit_request(), "Deposit", Some(UUID.to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, PaygridError::Connection { .. }));
}

/// Transport that plays the provider: parses the outgoing envelope and
/// answers it with a signed response echoing the request UUID. This
/// exercises the pipeline with its own generated UUIDs.
struct EchoTransport {
    provider: Arc<ApiClient>,
}

#[async_trait]
impl ApiTransport for EchoTransport {
    async fn post(&self, _url: &str, body: String) -> PaygridResult<String> {
        let request: JsonRpcRequest<serde_json::Value> = serde_json::from_str(&body)?;
        let response = self.provider.create_response_package(
            &request.method,
            &request.params.uuid,
            DepositResponseData {
                order_id: Some("1288208729".to_string()),
                url: Some("https://test.paygrid.com/orders/1288208729".to_string()),
                ..Default::default()
            },
        )?;
        serde_json::to_string(&response).map_err(PaygridError::from)
    }
}

#[tokio::test]
async fn deposit_with_generated_uuid_round_trips() {
    let client = ApiClient::builder(merchant_settings())
        .transport(Arc::new(EchoTransport {
            provider: provider_client(),
        }))
        .build()
        .unwrap();

    let response = client.deposit(deposit_request()).await.unwrap();
    assert_eq!(response.order_id.as_deref(), Some("1288208729"));
}

#[tokio::test]
async fn settlement_report_parses_csv_after_verification() {
    use paygrid_client::types::requests::{
        SettlementReportRequestData, SettlementReportRequestDataAttributes,
        SettlementReportResponseData,
    };

    let mock_server = MockServer::start().await;

    let csv = "datestamp,accountname,currency,amount,total,orderid,ordertype,messageid,username\n\
        \"2018-11-16 12:52:22.293626+00\",SUSPENSE_ACCOUNT_CLIENT_FUNDS_FINLAND_OKOY,EUR,100.00,145.00,1288208729,Deposit,9567705,merchant1\n";
    let response = provider_client()
        .create_response_package(
            "ViewAutomaticSettlementDetailsCSV",
            UUID,
            SettlementReportResponseData {
                csv_content: Some(csv.to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(settings_for(&mock_server.uri())).unwrap();
    let report = client
        .send_request::<_, SettlementReportResponseData>(
            SettlementReportRequestData {
                settlement_date: Some("2018-11-16".to_string()),
                attributes: Some(SettlementReportRequestDataAttributes {
                    api_version: Some("1.2".to_string()),
                }),
                ..Default::default()
            },
            "ViewAutomaticSettlementDetailsCSV",
            Some(UUID.to_string()),
        )
        .await
        .unwrap();

    // `send_request` leaves the rows to the `settlement_report` wrapper.
    assert!(report.entries.is_empty());
    let rows =
        paygrid_client::report::parse_settlement_report(report.csv_content.as_deref().unwrap())
            .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, Some(100.00));
    assert_eq!(
        rows[0].account_name.as_deref(),
        Some("SUSPENSE_ACCOUNT_CLIENT_FUNDS_FINLAND_OKOY")
    );
}

#[tokio::test]
async fn settlement_report_method_fills_entries() {
    use paygrid_client::types::requests::{
        SettlementReportRequestData, SettlementReportResponseData,
    };

    struct ReportTransport {
        provider: Arc<ApiClient>,
    }

    #[async_trait]
    impl ApiTransport for ReportTransport {
        async fn post(&self, _url: &str, body: String) -> PaygridResult<String> {
            let request: JsonRpcRequest<serde_json::Value> = serde_json::from_str(&body)?;
            let csv = "accountname,currency,amount\nTRANSACTION_FEE_BANK_DEPOSIT,EUR,-1.00\n";
            let response = self.provider.create_response_package(
                &request.method,
                &request.params.uuid,
                SettlementReportResponseData {
                    csv_content: Some(csv.to_string()),
                    ..Default::default()
                },
            )?;
            serde_json::to_string(&response).map_err(PaygridError::from)
        }
    }

    let client = ApiClient::builder(merchant_settings())
        .transport(Arc::new(ReportTransport {
            provider: provider_client(),
        }))
        .build()
        .unwrap();

    let report = client
        .settlement_report(SettlementReportRequestData::default())
        .await
        .unwrap();

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].amount, Some(-1.00));
    assert_eq!(report.entries[0].currency.as_deref(), Some("EUR"));
}

#[tokio::test]
async fn missing_credentials_is_a_configuration_error() {
    let settings = ApiClientSettings::for_test()
        .without_credentials()
        .with_client_private_key_from_pem(CLIENT_PRIVATE_PEM)
        .unwrap()
        .build()
        .unwrap();
    let client = ApiClient::new(settings).unwrap();

    let err = client.deposit(deposit_request()).await.unwrap_err();
    assert!(matches!(err, PaygridError::Configuration(_)));
}
