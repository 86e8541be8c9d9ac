//! The API client: typed methods over the signed request pipeline.
//!
//! Every outgoing call walks the same pipeline: credentials are stamped
//! onto the payload, a call UUID is generated, the envelope is built and
//! signed, the payload is validated, the envelope is POSTed, and the
//! response is parsed, checked for an error or a business rejection,
//! signature-verified and UUID-checked before the typed result is
//! returned.
//!
//! The error-envelope and rejection checks deliberately run *before*
//! signature verification, so a caller always sees the actionable
//! business error first; see DESIGN.md for the ordering decision.
//!
//! # Example
//!
//! ```no_run
//! use paygrid_client::{ApiClient, ApiClientSettings};
//! use paygrid_client::types::{DepositRequestData, DepositRequestDataAttributes};
//!
//! # async fn demo() -> paygrid_client::Result<()> {
//! let settings = ApiClientSettings::for_test()
//!     .with_credentials("merchant_username", "merchant_password")
//!     .with_client_private_key_from_file("merchant_private_key.pem")?
//!     .build()?;
//! let client = ApiClient::new(settings)?;
//!
//! let response = client
//!     .deposit(DepositRequestData {
//!         notification_url: Some("https://example.com/paygrid/notifications".into()),
//!         end_user_id: Some("user-123".into()),
//!         message_id: Some("deposit-456".into()),
//!         attributes: Some(DepositRequestDataAttributes {
//!             amount: Some("100.00".into()),
//!             currency: Some("EUR".into()),
//!             country: Some("SE".into()),
//!             locale: Some("sv_SE".into()),
//!             firstname: Some("John".into()),
//!             lastname: Some("Doe".into()),
//!             shopper_statement: Some("My Shop".into()),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("send the user to {}", response.url.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::dispatch::{HandlerResult, ListenerSet, NotificationArgs, NotificationHandler};
use crate::serializer::{self, Serializer};
use crate::settings::ApiClientSettings;
use crate::signer::JsonRpcSigner;
use crate::transport::{ApiTransport, HttpTransport};
use crate::types::notifications::{
    AccountNotificationData, CancelNotificationData, CreditNotificationData,
    DebitNotificationData, KycNotificationData, NotificationResponse,
    PayoutConfirmationNotificationData, PendingNotificationData, UnknownNotificationData,
};
use crate::types::requests::*;
use crate::types::{
    ApiVersion, JsonRpcRequest, JsonRpcResponse, ResponseResult, ResponseResultData,
};
use crate::validation::{self, ValidateFields};
use crate::{PaygridError, Result};

/// Client for the Paygrid JSON-RPC API.
///
/// A client is immutable after construction. Notification listeners are
/// registered on the [`ApiClientBuilder`]; the resulting handler map is
/// never mutated, so a client can be shared freely across tasks.
pub struct ApiClient {
    pub(crate) settings: Arc<ApiClientSettings>,
    pub(crate) signer: JsonRpcSigner,
    transport: Arc<dyn ApiTransport>,
    pub(crate) listeners: ListenerSet,
}

impl ApiClient {
    /// Create a client with the default HTTP transport and no
    /// notification listeners.
    pub fn new(settings: ApiClientSettings) -> Result<Self> {
        Self::builder(settings).build()
    }

    /// Start building a client, optionally attaching notification
    /// listeners and a custom transport.
    pub fn builder(settings: ApiClientSettings) -> ApiClientBuilder {
        ApiClientBuilder {
            settings,
            transport: None,
            listeners: ListenerSet::default(),
        }
    }

    /// The settings this client was built with.
    pub fn settings(&self) -> &ApiClientSettings {
        &self.settings
    }

    /// The signer bound to this client's key material.
    pub fn signer(&self) -> &JsonRpcSigner {
        &self.signer
    }

    /// Fetch the account ledger for a date interval.
    pub async fn account_ledger(
        &self,
        request: AccountLedgerRequestData,
    ) -> Result<AccountLedgerResponseData> {
        self.send_request(request, "AccountLedger", None).await
    }

    /// Pay out to an account previously reported by an `account`
    /// notification.
    pub async fn account_payout(
        &self,
        request: AccountPayoutRequestData,
    ) -> Result<AccountPayoutResponseData> {
        self.send_request(request, "AccountPayout", None).await
    }

    /// Approve a withdrawal held for review.
    pub async fn approve_withdrawal(
        &self,
        request: ApproveWithdrawalRequestData,
    ) -> Result<ApproveWithdrawalResponseData> {
        self.send_request(request, "ApproveWithdrawal", None).await
    }

    /// Fetch the merchant's balances per currency.
    pub async fn balance(&self, request: BalanceRequestData) -> Result<BalanceResponseData> {
        self.send_request(request, "Balance", None).await
    }

    /// Cancel a charge that has not yet been executed.
    pub async fn cancel_charge(
        &self,
        request: CancelChargeRequestData,
    ) -> Result<CancelChargeResponseData> {
        self.send_request(request, "CancelCharge", None).await
    }

    /// Charge an account with an active direct debit mandate.
    pub async fn charge(&self, request: ChargeRequestData) -> Result<ChargeResponseData> {
        self.send_request(request, "Charge", None).await
    }

    /// Register a bank account for payouts.
    pub async fn create_account(
        &self,
        request: CreateAccountRequestData,
    ) -> Result<CreateAccountResponseData> {
        self.send_request(request, "CreateAccount", None).await
    }

    /// Deny a withdrawal held for review.
    pub async fn deny_withdrawal(
        &self,
        request: DenyWithdrawalRequestData,
    ) -> Result<DenyWithdrawalResponseData> {
        self.send_request(request, "DenyWithdrawal", None).await
    }

    /// Initiate a deposit order.
    pub async fn deposit(&self, request: DepositRequestData) -> Result<DepositResponseData> {
        self.send_request(request, "Deposit", None).await
    }

    /// Fetch the withdrawal states for an order.
    pub async fn get_withdrawals(
        &self,
        request: GetWithdrawalsRequestData,
    ) -> Result<GetWithdrawalsResponseData> {
        self.send_request(request, "GetWithdrawals", None).await
    }

    /// Refund a previous deposit or charge.
    pub async fn refund(&self, request: RefundRequestData) -> Result<RefundResponseData> {
        self.send_request(request, "Refund", None).await
    }

    /// Register a bank account by account number.
    pub async fn register_account(
        &self,
        request: RegisterAccountRequestData,
    ) -> Result<RegisterAccountResponseData> {
        self.send_request(request, "RegisterAccount", None).await
    }

    /// Register a bank account and pay out to it in one call.
    pub async fn register_account_payout(
        &self,
        request: RegisterAccountPayoutRequestData,
    ) -> Result<RegisterAccountPayoutResponseData> {
        self.send_request(request, "RegisterAccountPayout", None)
            .await
    }

    /// Let the end user select and verify one of their bank accounts.
    pub async fn select_account(
        &self,
        request: SelectAccountRequestData,
    ) -> Result<SelectAccountResponseData> {
        self.send_request(request, "SelectAccount", None).await
    }

    /// Fetch a settlement report and parse its CSV into typed rows.
    pub async fn settlement_report(
        &self,
        request: SettlementReportRequestData,
    ) -> Result<SettlementReportResponseData> {
        let mut response: SettlementReportResponseData = self
            .send_request(request, "ViewAutomaticSettlementDetailsCSV", None)
            .await?;
        let csv = response.csv_content.as_deref().unwrap_or_default();
        response.entries = crate::report::parse_settlement_report(csv)?;
        Ok(response)
    }

    /// Initiate a withdrawal order.
    pub async fn withdraw(&self, request: WithdrawRequestData) -> Result<WithdrawResponseData> {
        self.send_request(request, "Withdraw", None).await
    }

    /// Send a request through the full pipeline.
    ///
    /// Callers normally use the typed methods above; this is public for
    /// methods this crate has no wrapper for yet, and for tests that
    /// need to pin the call UUID.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, data, uuid), fields(method = %method))
    )]
    pub async fn send_request<Q, S>(
        &self,
        mut data: Q,
        method: &str,
        uuid: Option<String>,
    ) -> Result<S>
    where
        Q: Serialize + AuthenticatedRequest + ValidateFields,
        S: ResponseResultData,
    {
        let credentials = self.settings.credentials.as_ref().ok_or_else(|| {
            PaygridError::Configuration(
                "credentials are required for outgoing requests".to_string(),
            )
        })?;
        data.set_credentials(&credentials.username, &credentials.password);

        let uuid = uuid.unwrap_or_else(|| Uuid::new_v4().to_string());
        let request = self.create_request_package(data, method, &uuid)?;
        validation::validate(&request.params.data)?;

        let body = serializer::to_wire_json(&request)?;
        let response_body = self.transport.post(&self.settings.url, body).await?;
        let response: JsonRpcResponse<S> = serde_json::from_str(&response_body)?;

        if let Some(error) = &response.error {
            let message = error
                .message
                .clone()
                .or_else(|| error.name.clone())
                .unwrap_or_else(|| error.code.to_string());
            return Err(PaygridError::api_error(
                format!("received an error response from the API: {}", message),
                error.clone(),
            ));
        }

        {
            let Some(result) = &response.result else {
                return Err(PaygridError::data(
                    "response envelope carries neither result nor error",
                ));
            };
            if let Some(reason) = result.data.rejection() {
                return Err(PaygridError::rejection(reason));
            }
        }

        if !self.signer.verify_response(&response)? {
            return Err(PaygridError::signature("incoming data signature is not valid"));
        }

        match response.uuid() {
            Some(echoed) if !echoed.is_empty() && echoed == uuid => {}
            _ => return Err(PaygridError::data("incoming UUID is not valid")),
        }

        let result = response.result.ok_or_else(|| {
            PaygridError::data("response envelope carries neither result nor error")
        })?;
        Ok(result.data)
    }

    /// Build and sign a request envelope without sending it. Exposed so
    /// hosts and tests can construct wire-exact packages.
    pub fn create_request_package<D: Serialize>(
        &self,
        data: D,
        method: &str,
        uuid: &str,
    ) -> Result<JsonRpcRequest<D>> {
        let mut request = JsonRpcRequest::new(method, uuid, data);
        self.signer.sign_request(&mut request)?;
        Ok(request)
    }

    /// Build and sign a response envelope, bound to the method and UUID
    /// of the notification being answered.
    pub fn create_response_package<D: Serialize>(
        &self,
        method: &str,
        uuid: &str,
        data: D,
    ) -> Result<JsonRpcResponse<D>> {
        let mut response = JsonRpcResponse {
            version: ApiVersion::Text("1.1".to_string()),
            result: Some(ResponseResult {
                signature: String::new(),
                uuid: uuid.to_string(),
                method: method.to_string(),
                data,
            }),
            error: None,
        };
        self.signer.sign_response(&mut response)?;
        Ok(response)
    }

    /// Build the signed notification answer carrying a `status` and an
    /// optional `message`.
    pub fn create_notification_response(
        &self,
        method: &str,
        uuid: &str,
        status: &str,
        message: Option<&str>,
    ) -> Result<JsonRpcResponse<NotificationResponse>> {
        let mut data = NotificationResponse {
            status: status.to_string(),
            extension: Map::new(),
        };
        if let Some(message) = message {
            data.extension
                .insert("message".to_string(), Value::String(message.to_string()));
        }
        self.create_response_package(method, uuid, data)
    }
}

/// Builder for [`ApiClient`]. Listener registration happens here; the
/// built client's handler map is immutable.
pub struct ApiClientBuilder {
    settings: ApiClientSettings,
    transport: Option<Arc<dyn ApiTransport>>,
    listeners: ListenerSet,
}

macro_rules! listener_method {
    ($(#[$doc:meta])* $name:ident, $slot:ident, $data:ty) => {
        $(#[$doc])*
        pub fn $name<F>(mut self, handler: F) -> Self
        where
            F: Fn(NotificationArgs<'_, $data>) -> HandlerResult + Send + Sync + 'static,
        {
            let handler: Box<NotificationHandler<$data>> = Box::new(handler);
            self.listeners.$slot.push(handler);
            self
        }
    };
}

impl ApiClientBuilder {
    /// Replace the default HTTP transport.
    pub fn transport(mut self, transport: Arc<dyn ApiTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    listener_method! {
        /// Listen for `account` notifications.
        on_account, account, AccountNotificationData
    }
    listener_method! {
        /// Listen for `cancel` notifications.
        on_cancel, cancel, CancelNotificationData
    }
    listener_method! {
        /// Listen for `credit` notifications.
        on_credit, credit, CreditNotificationData
    }
    listener_method! {
        /// Listen for `debit` notifications.
        on_debit, debit, DebitNotificationData
    }
    listener_method! {
        /// Listen for `kyc` notifications.
        on_kyc, kyc, KycNotificationData
    }
    listener_method! {
        /// Listen for `payoutconfirmation` notifications.
        on_payout_confirmation, payout_confirmation, PayoutConfirmationNotificationData
    }
    listener_method! {
        /// Listen for `pending` notifications.
        on_pending, pending, PendingNotificationData
    }
    listener_method! {
        /// Catch-all listener for notification methods with no typed
        /// payload. The raw fields arrive in the extension map.
        on_unknown_notification, unknown, UnknownNotificationData
    }

    /// Assemble the client.
    pub fn build(self) -> Result<ApiClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new()?),
        };
        let settings = Arc::new(self.settings);
        let signer = JsonRpcSigner::new(Serializer::new(), &settings);
        Ok(ApiClient {
            settings,
            signer,
            transport,
            listeners: self.listeners,
        })
    }
}
