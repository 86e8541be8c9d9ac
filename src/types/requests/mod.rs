//! Typed request/response payloads, one module per API method.
//!
//! Request fields keep the wire's capitalized member names
//! (`NotificationURL`, `EndUserID`, ...); response fields are lowercase
//! on the wire. Field-level constraints mirror what the API enforces
//! server-side, so obviously incomplete requests fail before the round
//! trip.

mod account_ledger;
mod account_payout;
mod approve_withdrawal;
mod balance;
mod cancel_charge;
mod charge;
mod create_account;
mod deny_withdrawal;
mod deposit;
mod get_withdrawals;
mod refund;
mod register_account;
mod register_account_payout;
mod select_account;
mod settlement_report;
mod withdraw;

pub use account_ledger::{AccountLedgerEntry, AccountLedgerRequestData, AccountLedgerResponseData};
pub use account_payout::{
    AccountPayoutRequestData, AccountPayoutRequestDataAttributes, AccountPayoutResponseData,
};
pub use approve_withdrawal::{ApproveWithdrawalRequestData, ApproveWithdrawalResponseData};
pub use balance::{BalanceEntry, BalanceRequestData, BalanceResponseData};
pub use cancel_charge::{CancelChargeRequestData, CancelChargeResponseData};
pub use charge::{ChargeRequestData, ChargeRequestDataAttributes, ChargeResponseData};
pub use create_account::{
    CreateAccountRequestData, CreateAccountRequestDataAttributes, CreateAccountResponseData,
};
pub use deny_withdrawal::{DenyWithdrawalRequestData, DenyWithdrawalResponseData};
pub use deposit::{DepositRequestData, DepositRequestDataAttributes, DepositResponseData};
pub use get_withdrawals::{
    GetWithdrawalsRequestData, GetWithdrawalsResponseData, WithdrawalEntry,
};
pub use refund::{RefundRequestData, RefundRequestDataAttributes, RefundResponseData};
pub use register_account::{
    RegisterAccountRequestData, RegisterAccountRequestDataAttributes, RegisterAccountResponseData,
};
pub use register_account_payout::{
    RegisterAccountPayoutRequestData, RegisterAccountPayoutRequestDataAttributes,
    RegisterAccountPayoutResponseData,
};
pub use select_account::{
    SelectAccountRequestData, SelectAccountRequestDataAttributes, SelectAccountResponseData,
};
pub use settlement_report::{
    SettlementReportRequestData, SettlementReportRequestDataAttributes,
    SettlementReportResponseData,
};
pub use withdraw::{WithdrawRequestData, WithdrawRequestDataAttributes, WithdrawResponseData};

/// Capability of outgoing request payloads: the pipeline stamps the API
/// credentials onto them, overwriting anything the caller put there.
pub trait AuthenticatedRequest {
    fn set_credentials(&mut self, username: &str, password: &str);
}

macro_rules! authenticated_request {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AuthenticatedRequest for $ty {
                fn set_credentials(&mut self, username: &str, password: &str) {
                    self.username = Some(username.to_string());
                    self.password = Some(password.to_string());
                }
            }
        )+
    };
}

authenticated_request!(
    AccountLedgerRequestData,
    AccountPayoutRequestData,
    ApproveWithdrawalRequestData,
    BalanceRequestData,
    CancelChargeRequestData,
    ChargeRequestData,
    CreateAccountRequestData,
    DenyWithdrawalRequestData,
    DepositRequestData,
    GetWithdrawalsRequestData,
    RefundRequestData,
    RegisterAccountRequestData,
    RegisterAccountPayoutRequestData,
    SelectAccountRequestData,
    SettlementReportRequestData,
    WithdrawRequestData,
);
