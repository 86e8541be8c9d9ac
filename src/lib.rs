//! Client SDK for the Paygrid payment API.
//!
//! Paygrid speaks a JSON-RPC-like protocol over HTTPS POST in which both
//! sides sign every payload: the request pipeline canonicalizes the
//! payload, signs it with the merchant's RSA key, and verifies the
//! signature the API puts on each response. Server-initiated
//! notifications arrive at the merchant's own HTTP endpoint as request
//! envelopes, get verified the same way, and are answered with a signed
//! response envelope.
//!
//! # Features
//!
//! - **Typed API methods**: `Deposit`, `Withdraw`, `AccountPayout`,
//!   `Charge`, settlement reports and the rest, with request validation
//!   before the round trip
//! - **Notification dispatch**: typed listeners per notification method
//!   plus a catch-all, with signed OK/FAILED/custom-status answers
//! - **Transport abstraction**: trait-based seam for custom transports
//!
//! # Example
//!
//! ```no_run
//! use paygrid_client::{ApiClient, ApiClientSettings};
//!
//! # async fn demo() -> paygrid_client::Result<()> {
//! let settings = ApiClientSettings::for_test()
//!     .with_credentials_from_env()?
//!     .with_client_private_key_from_file("merchant_private_key.pem")?
//!     .build()?;
//!
//! let client = ApiClient::builder(settings)
//!     .on_debit(|args| {
//!         println!("debit of {:?} on order {:?}", args.data().amount, args.data().order_id);
//!         args.respond_with_ok();
//!         Ok(())
//!     })
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! Signing failures from bad key material are fatal and surface
//! immediately; a signature that simply does not verify aborts the call
//! with [`PaygridError::Signature`] and is never silently accepted.
//! Nothing is retried internally.

pub mod client;
pub mod dispatch;
pub mod errors;
pub mod keychain;
pub mod report;
pub mod serializer;
pub mod settings;
pub mod signer;
pub mod transport;
pub mod types;
pub mod validation;

pub use client::{ApiClient, ApiClientBuilder};
pub use dispatch::{
    ClientRegistration, HandlerError, HandlerResult, NotificationArgs,
    NotificationClientRegistry, NotificationHttpResponse,
};
pub use errors::PaygridError;
pub use settings::{ApiClientSettings, ApiClientSettingsBuilder, Credentials};
pub use signer::JsonRpcSigner;
pub use transport::{ApiTransport, HttpTransport};

/// Common result alias for Paygrid operations.
pub type Result<T> = std::result::Result<T, PaygridError>;
