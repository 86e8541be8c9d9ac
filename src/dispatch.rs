//! Inbound notification dispatch.
//!
//! A notification arrives at the merchant's HTTP endpoint as a request
//! envelope. Dispatch walks a fixed sequence: parse the envelope far
//! enough to read the method name, resolve the listener slot
//! (case-insensitive, with a catch-all for unknown methods), deserialize
//! the typed payload, verify the signature against the Paygrid key,
//! validate, then invoke every registered listener synchronously.
//! Signature failure stops processing before any listener runs.
//!
//! Each listener receives a [`NotificationArgs`] handle exposing the
//! payload plus response actions bound to this notification's method and
//! UUID. Exactly one response per notification is the contract on
//! handler authors; the dispatcher itself does not enforce it. A
//! listener that returns an error triggers the `failed` response action
//! instead of reaching the transport layer; whether the error text is
//! exposed is controlled by
//! [`include_error_details`](crate::settings::ApiClientSettingsBuilder::include_error_details).
//!
//! The process-wide [`NotificationClientRegistry`] lets an HTTP front
//! end broadcast one inbound body to every listening client without
//! knowing about any of them. Registration is scoped: dropping (or
//! explicitly closing) the [`ClientRegistration`] deregisters the
//! client, so cleanup is deterministic and owned by the host.

use std::cell::RefCell;
use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::types::notifications::{
    AccountNotificationData, CancelNotificationData, CreditNotificationData,
    DebitNotificationData, KycNotificationData, PayoutConfirmationNotificationData,
    PendingNotificationData, UnknownNotificationData,
};
use crate::types::JsonRpcRequest;
use crate::validation::{self, ValidateFields};
use crate::{PaygridError, Result};

/// Error type listeners may return; converted into a `failed` response.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of a notification listener.
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// A notification listener for payload type `T`.
pub type NotificationHandler<T> =
    dyn Fn(NotificationArgs<'_, T>) -> HandlerResult + Send + Sync;

/// Response callbacks for one inbound notification, bound to its method
/// and UUID.
pub(crate) struct Responder<'a> {
    pub(crate) on_ok: &'a dyn Fn(&str, &str),
    pub(crate) on_failed: &'a dyn Fn(&str, &str, &str),
    pub(crate) on_custom_status: Option<&'a dyn Fn(&str, &str, &str, Option<&str>)>,
}

/// Handle given to a notification listener: the typed payload plus the
/// response actions for this specific notification.
pub struct NotificationArgs<'a, T> {
    pub(crate) data: &'a T,
    pub(crate) method: &'a str,
    pub(crate) uuid: &'a str,
    pub(crate) responder: &'a Responder<'a>,
}

impl<'a, T> NotificationArgs<'a, T> {
    /// The typed notification payload.
    pub fn data(&self) -> &'a T {
        self.data
    }

    /// The notification's method name, as received.
    pub fn method(&self) -> &str {
        self.method
    }

    /// The notification's call UUID.
    pub fn uuid(&self) -> &str {
        self.uuid
    }

    /// Acknowledge the notification.
    pub fn respond_with_ok(&self) {
        (self.responder.on_ok)(self.method, self.uuid);
    }

    /// Report that handling the notification failed.
    pub fn respond_with_failed(&self, message: &str) {
        (self.responder.on_failed)(self.method, self.uuid, message);
    }

    /// Respond with a custom status agreed with Paygrid. Falls back to
    /// the OK action when the caller supplied no custom-status callback.
    pub fn respond_with_custom_status(&self, status: &str, message: Option<&str>) {
        match self.responder.on_custom_status {
            Some(on_custom_status) => {
                on_custom_status(self.method, self.uuid, status, message)
            }
            None => (self.responder.on_ok)(self.method, self.uuid),
        }
    }
}

/// The per-client listener slots, keyed by lowercase method name, with
/// an extra catch-all slot for unknown methods. Built once by the
/// client builder, never mutated afterwards.
#[derive(Default)]
pub(crate) struct ListenerSet {
    pub(crate) account: Vec<Box<NotificationHandler<AccountNotificationData>>>,
    pub(crate) cancel: Vec<Box<NotificationHandler<CancelNotificationData>>>,
    pub(crate) credit: Vec<Box<NotificationHandler<CreditNotificationData>>>,
    pub(crate) debit: Vec<Box<NotificationHandler<DebitNotificationData>>>,
    pub(crate) kyc: Vec<Box<NotificationHandler<KycNotificationData>>>,
    pub(crate) payout_confirmation: Vec<Box<NotificationHandler<PayoutConfirmationNotificationData>>>,
    pub(crate) pending: Vec<Box<NotificationHandler<PendingNotificationData>>>,
    pub(crate) unknown: Vec<Box<NotificationHandler<UnknownNotificationData>>>,
}

impl ApiClient {
    /// Handle one inbound notification body.
    ///
    /// The response callbacks receive the notification's method and
    /// UUID; `on_failed` additionally receives the failure message, and
    /// the optional `on_custom_status` receives the status and an
    /// optional message. Returns the number of listeners invoked.
    ///
    /// # Errors
    ///
    /// - [`PaygridError::Signature`] when the envelope signature does
    ///   not verify; no listener is invoked.
    /// - [`PaygridError::NoNotificationListener`] when the resolved slot
    ///   has no listener.
    /// - [`PaygridError::Serialization`] when the body is not a valid
    ///   envelope.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(body_len = body.len()))
    )]
    pub fn handle_notification(
        &self,
        body: &str,
        on_ok: &dyn Fn(&str, &str),
        on_failed: &dyn Fn(&str, &str, &str),
        on_custom_status: Option<&dyn Fn(&str, &str, &str, Option<&str>)>,
    ) -> Result<usize> {
        let envelope: JsonRpcRequest<Value> = serde_json::from_str(body)?;
        let responder = Responder {
            on_ok,
            on_failed,
            on_custom_status,
        };

        match envelope.method.to_lowercase().as_str() {
            "account" => self.dispatch_to(&self.listeners.account, &envelope, &responder),
            "cancel" => self.dispatch_to(&self.listeners.cancel, &envelope, &responder),
            "credit" => self.dispatch_to(&self.listeners.credit, &envelope, &responder),
            "debit" => self.dispatch_to(&self.listeners.debit, &envelope, &responder),
            "kyc" => self.dispatch_to(&self.listeners.kyc, &envelope, &responder),
            "payoutconfirmation" => {
                self.dispatch_to(&self.listeners.payout_confirmation, &envelope, &responder)
            }
            "pending" => self.dispatch_to(&self.listeners.pending, &envelope, &responder),
            _ => self.dispatch_to(&self.listeners.unknown, &envelope, &responder),
        }
    }

    fn dispatch_to<T>(
        &self,
        listeners: &[Box<NotificationHandler<T>>],
        envelope: &JsonRpcRequest<Value>,
        responder: &Responder<'_>,
    ) -> Result<usize>
    where
        T: DeserializeOwned + Serialize + ValidateFields,
    {
        let data: T = serde_json::from_value(envelope.params.data.clone())?;

        let signature = envelope.params.signature.as_deref().unwrap_or_default();
        if !self
            .signer
            .verify(&envelope.method, &envelope.params.uuid, signature, &data)?
        {
            return Err(PaygridError::signature(
                "incoming notification signature is not valid",
            ));
        }

        validation::validate(&data)?;

        if listeners.is_empty() {
            return Err(PaygridError::NoNotificationListener(format!(
                "there is no listener for the '{}' notification",
                envelope.method
            )));
        }

        for listener in listeners {
            let args = NotificationArgs {
                data: &data,
                method: &envelope.method,
                uuid: &envelope.params.uuid,
                responder,
            };
            if let Err(err) = listener(args) {
                let message = if self.settings.include_error_details {
                    err.to_string()
                } else {
                    "the notification listener failed".to_string()
                };
                (responder.on_failed)(&envelope.method, &envelope.params.uuid, &message);
            }
        }

        Ok(listeners.len())
    }
}

/// A signed, serialized notification answer plus the HTTP status code
/// the front end should send it with.
#[derive(Debug, Clone)]
pub struct NotificationHttpResponse {
    /// 200 for OK and custom statuses, 500 for FAILED.
    pub status_code: u16,
    /// The signed response envelope as wire JSON.
    pub body: String,
}

/// Process-wide set of clients listening for notifications.
///
/// An HTTP front end holds one registry (usually [`global::registry`])
/// and feeds every inbound notification body through
/// [`handle_notification_request`](Self::handle_notification_request),
/// which broadcasts it to all registered clients.
///
/// The registry is cheap to clone; clones share the same client list.
#[derive(Clone, Default)]
pub struct NotificationClientRegistry {
    clients: Arc<RwLock<Vec<Arc<ApiClient>>>>,
}

impl NotificationClientRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a client. The client stays registered until the
    /// returned [`ClientRegistration`] is dropped or closed.
    pub fn register(&self, client: Arc<ApiClient>) -> ClientRegistration {
        let mut clients = self.clients.write().unwrap_or_else(|e| e.into_inner());
        clients.push(Arc::clone(&client));
        ClientRegistration {
            registry: self.clone(),
            client,
        }
    }

    /// The number of registered clients.
    pub fn len(&self) -> usize {
        self.clients
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// True when no client is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Broadcast one inbound notification to every registered client
    /// and return the answer to send back.
    ///
    /// `http_method` is the verb of the inbound HTTP request; anything
    /// but POST is a [`PaygridError::Notification`]. When several
    /// clients respond, the last response wins, matching the behavior
    /// of a shared response stream.
    ///
    /// # Errors
    ///
    /// - [`PaygridError::NoNotificationClient`] when the registry is
    ///   empty, or when no listener of any client invoked a response
    ///   action.
    /// - Whatever an individual client's
    ///   [`handle_notification`](ApiClient::handle_notification) raises.
    pub fn handle_notification_request(
        &self,
        http_method: &str,
        body: &str,
    ) -> Result<NotificationHttpResponse> {
        if !http_method.eq_ignore_ascii_case("POST") {
            return Err(PaygridError::Notification(format!(
                "notifications must arrive as HTTP POST, got {}",
                http_method
            )));
        }

        let clients: Vec<Arc<ApiClient>> = self
            .clients
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if clients.is_empty() {
            return Err(PaygridError::NoNotificationClient(
                "there are no registered API clients listening to notifications".to_string(),
            ));
        }

        let mut last_response: Option<Result<NotificationHttpResponse>> = None;
        for client in &clients {
            if let Some(response) = broadcast_to_client(client, body)? {
                last_response = Some(response);
            }
        }

        match last_response {
            Some(response) => response,
            None => Err(PaygridError::NoNotificationClient(
                "no notification listener responded with OK or FAILED".to_string(),
            )),
        }
    }
}

/// Run one client's listeners over the body, capturing the response the
/// listeners chose. `Ok(None)` means no listener invoked a response
/// action.
fn broadcast_to_client(
    client: &Arc<ApiClient>,
    body: &str,
) -> Result<Option<Result<NotificationHttpResponse>>> {
    let slot: RefCell<Option<Result<NotificationHttpResponse>>> = RefCell::new(None);

    let respond = |method: &str, uuid: &str, status: &str, message: Option<&str>, code: u16| {
        let response = client
            .create_notification_response(method, uuid, status, message)
            .and_then(|package| {
                Ok(NotificationHttpResponse {
                    status_code: code,
                    body: crate::serializer::to_wire_json(&package)?,
                })
            });
        *slot.borrow_mut() = Some(response);
    };

    let on_ok = |method: &str, uuid: &str| respond(method, uuid, "OK", None, 200);
    let on_failed =
        |method: &str, uuid: &str, message: &str| respond(method, uuid, "FAILED", Some(message), 500);
    let on_custom_status = |method: &str, uuid: &str, status: &str, message: Option<&str>| {
        respond(method, uuid, status, message, 200)
    };

    client.handle_notification(body, &on_ok, &on_failed, Some(&on_custom_status))?;

    Ok(slot.into_inner())
}

/// Scoped registration of a client in a [`NotificationClientRegistry`].
/// Deregisters on drop; [`close`](Self::close) does it explicitly.
pub struct ClientRegistration {
    registry: NotificationClientRegistry,
    client: Arc<ApiClient>,
}

impl ClientRegistration {
    /// The registered client.
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Deregister now instead of waiting for drop.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for ClientRegistration {
    fn drop(&mut self) {
        let mut clients = self
            .registry
            .clients
            .write()
            .unwrap_or_else(|e| e.into_inner());
        if let Some(index) = clients
            .iter()
            .position(|c| Arc::ptr_eq(c, &self.client))
        {
            clients.remove(index);
        }
    }
}

/// Process-wide default registry.
///
/// Use this when one HTTP front end serves all clients in the process.
/// For more control, create your own [`NotificationClientRegistry`].
pub mod global {
    use super::*;
    use std::sync::OnceLock;

    static GLOBAL_REGISTRY: OnceLock<NotificationClientRegistry> = OnceLock::new();

    /// The global registry, initialized on first use.
    pub fn registry() -> &'static NotificationClientRegistry {
        GLOBAL_REGISTRY.get_or_init(NotificationClientRegistry::new)
    }

    /// Register a client in the global registry.
    pub fn register(client: Arc<ApiClient>) -> ClientRegistration {
        registry().register(client)
    }

    /// Broadcast an inbound notification through the global registry.
    pub fn handle_notification_request(
        http_method: &str,
        body: &str,
    ) -> Result<NotificationHttpResponse> {
        registry().handle_notification_request(http_method, body)
    }
}
