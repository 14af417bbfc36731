//! # ecocash - EcoCash instant C2B payments client
//!
//! A Rust client for the EcoCash mobile-money HTTP API, covering instant
//! C2B payments, refunds, and transaction status lookups. The library
//! handles request shaping, source-reference validation and generation,
//! MSISDN and amount normalization, and classification of transport and
//! HTTP outcomes into [`EcocashError`].
//!
//! ```no_run
//! use ecocash::{EcocashClient, Environment, PaymentRequest};
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> ecocash::Result<()> {
//! let client = EcocashClient::new("api-key", Environment::Sandbox);
//! let request = PaymentRequest::new("0774222475", Decimal::new(1050, 2))
//!     .with_reason("Order #42");
//! let response = client.payment(&request).await?;
//! println!("{}", response);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod normalize;
pub mod reference;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::EcocashClient;
pub use error::{EcocashError, Result};
pub use types::*;

/// Current version of the ecocash library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
