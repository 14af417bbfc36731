//! Client façade for the EcoCash instant C2B API

use crate::normalize::{normalize_amount, normalize_msisdn};
use crate::reference::{generate_reference, is_valid_reference};
use crate::transport::HttpTransport;
use crate::types::*;
use crate::{EcocashError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Payment endpoint path, suffixed with the `{mode}` segment
pub const PAYMENT_PATH: &str = "/api/v2/payment/instant/c2b";
/// Refund endpoint path, suffixed with the `{mode}` segment
pub const REFUND_PATH: &str = "/api/v2/refund/instant/c2b";
/// Transaction status endpoint path, suffixed with the `{mode}` segment
pub const STATUS_PATH: &str = "/api/v1/transaction/c2b/status";

/// Client for the EcoCash instant C2B payments API.
///
/// Each operation is a single stateless request/response round trip: the
/// client validates and normalizes the inputs, serializes the payload,
/// issues one POST, and classifies the outcome. No retries are performed;
/// retry policy belongs to the caller.
#[derive(Debug, Clone)]
pub struct EcocashClient {
    config: ClientConfig,
    transport: HttpTransport,
}

/// Wire payload for a payment request
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentPayload<'a> {
    customer_msisdn: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    amount: Decimal,
    reason: &'a str,
    currency: &'a str,
    source_reference: &'a str,
}

/// Wire payload for a refund request
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefundPayload<'a> {
    original_transaction_reference: &'a str,
    refund_correlator: &'a str,
    source_mobile_number: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    amount: Decimal,
    client_name: &'a str,
    currency: &'a str,
    reason_for_refund: &'a str,
}

/// Wire payload for a transaction status lookup
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupPayload<'a> {
    source_mobile_number: String,
    source_reference: &'a str,
}

impl EcocashClient {
    /// Create a client with the given API key and environment, using
    /// default base URL, timeout and country code
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Self {
        Self::with_config(ClientConfig::new(api_key, environment))
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            transport: HttpTransport::new(),
        }
    }

    /// The client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Set the per-request timeout in seconds, clamped to a 5 second
    /// minimum. The only configuration field mutable after construction.
    pub fn set_timeout_secs(&mut self, seconds: u64) {
        self.config.timeout = Duration::from_secs(seconds).max(MIN_TIMEOUT);
    }

    /// Initiate an instant C2B payment.
    ///
    /// Generates a fresh UUIDv4 source reference when the request carries
    /// none. Fails with [`EcocashError::Validation`] before any network
    /// I/O if the reference is not a valid UUIDv4. Returns the decoded
    /// response body verbatim on success.
    pub async fn payment(&self, request: &PaymentRequest) -> Result<ApiResponse> {
        let source_reference = match &request.source_reference {
            Some(reference) => reference.clone(),
            None => generate_reference(),
        };
        if !is_valid_reference(&source_reference) {
            return Err(EcocashError::validation(
                "sourceReference must be a valid UUID",
            ));
        }

        debug!(source_reference = %source_reference, "initiating payment");

        let payload = PaymentPayload {
            customer_msisdn: normalize_msisdn(&request.customer_msisdn, &self.config.country_code),
            amount: normalize_amount(request.amount),
            reason: &request.reason,
            currency: &request.currency,
            source_reference: &source_reference,
        };
        self.dispatch(PAYMENT_PATH, &serde_json::to_value(&payload)?)
            .await
    }

    /// Refund a previously completed payment.
    ///
    /// Fails with [`EcocashError::Validation`] before any network I/O if
    /// the original transaction reference is not a valid UUIDv4.
    pub async fn refund(&self, request: &RefundRequest) -> Result<ApiResponse> {
        if !is_valid_reference(&request.original_transaction_reference) {
            return Err(EcocashError::validation(
                "originalTransactionReference must be a valid UUID",
            ));
        }

        debug!(
            original_transaction_reference = %request.original_transaction_reference,
            "initiating refund"
        );

        let payload = RefundPayload {
            original_transaction_reference: &request.original_transaction_reference,
            refund_correlator: &request.refund_correlator,
            source_mobile_number: normalize_msisdn(
                &request.source_mobile_number,
                &self.config.country_code,
            ),
            amount: normalize_amount(request.amount),
            client_name: &request.client_name,
            currency: &request.currency,
            reason_for_refund: &request.reason,
        };
        self.dispatch(REFUND_PATH, &serde_json::to_value(&payload)?)
            .await
    }

    /// Look up the status of a transaction by its source reference.
    ///
    /// Fails with [`EcocashError::Validation`] before any network I/O if
    /// the source reference is not a valid UUIDv4.
    pub async fn lookup(&self, request: &LookupRequest) -> Result<ApiResponse> {
        if !is_valid_reference(&request.source_reference) {
            return Err(EcocashError::validation(
                "sourceReference must be a valid UUID",
            ));
        }

        debug!(source_reference = %request.source_reference, "looking up transaction");

        let payload = LookupPayload {
            source_mobile_number: normalize_msisdn(
                &request.source_mobile_number,
                &self.config.country_code,
            ),
            source_reference: &request.source_reference,
        };
        self.dispatch(STATUS_PATH, &serde_json::to_value(&payload)?)
            .await
    }

    /// Full endpoint URL for a path, including the `{mode}` segment
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.config.base_url,
            path,
            self.config.environment.as_str()
        )
    }

    async fn dispatch(&self, path: &str, body: &serde_json::Value) -> Result<ApiResponse> {
        self.transport
            .post(
                &self.endpoint(path),
                &self.config.api_key,
                body,
                self.config.timeout,
            )
            .await
    }
}
