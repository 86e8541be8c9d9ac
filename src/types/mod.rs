//! Wire-level data model: the JSON-RPC envelope, typed request and
//! response payloads, and notification payloads.

pub mod base;
pub mod common;
pub mod notifications;
pub mod requests;

pub use base::{
    string_bool, ApiVersion, JsonRpcRequest, JsonRpcResponse, RequestParams, ResponseError,
    ResponseErrorData, ResponseResult, ResponseResultData,
};
pub use common::{EmptyAttributes, RecipientOrSenderInformation};
pub use notifications::{
    AccountNotificationAttributes, AccountNotificationData, CancelNotificationData,
    CreditNotificationData, DebitNotificationData, KycNotificationAttributes, KycNotificationData,
    NotificationResponse, PayoutConfirmationNotificationData, PendingNotificationData,
    UnknownNotificationData,
};
pub use requests::*;
