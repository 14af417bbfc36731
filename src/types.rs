//! Core types for the EcoCash API client

use rust_decimal::Decimal;
use std::time::Duration;

/// Default production host for the EcoCash open API
pub const DEFAULT_BASE_URL: &str = "https://developers.ecocash.co.zw/api/ecocash_pay";

/// Default country calling code prepended during MSISDN normalization
pub const DEFAULT_COUNTRY_CODE: &str = "263";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimum request timeout the client will accept
pub const MIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Opaque JSON value returned verbatim from the API on success
pub type ApiResponse = serde_json::Value;

/// Target environment, selecting the `{mode}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Provider test environment
    #[default]
    Sandbox,
    /// Provider production environment
    Live,
}

impl Environment {
    /// Resolve an environment from a free-form string.
    ///
    /// Matches `"live"` case-insensitively; anything else resolves to
    /// [`Environment::Sandbox`] as a deliberate safe default.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("live") {
            Environment::Live
        } else {
            Environment::Sandbox
        }
    }

    /// Path segment used in endpoint URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Live => "live",
        }
    }
}

/// Configuration for an [`EcocashClient`](crate::EcocashClient)
///
/// Owned by a single client instance. Immutable after construction except
/// the timeout, which the client exposes a setter for.
#[derive(Clone)]
pub struct ClientConfig {
    /// API key secret, attached verbatim to every request. Never logged.
    pub api_key: String,
    /// Target environment
    pub environment: Environment,
    /// Base URL of the provider API
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Country calling code used for MSISDN normalization
    pub country_code: String,
}

impl ClientConfig {
    /// Create a configuration with the given API key and environment
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Self {
        Self {
            api_key: api_key.into(),
            environment,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }

    /// Override the base URL (e.g. for a mock server in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the country calling code used for MSISDN normalization
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Override the request timeout, clamped to [`MIN_TIMEOUT`]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.max(MIN_TIMEOUT);
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    // The API key is a secret; keep it out of Debug output
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("country_code", &self.country_code)
            .finish()
    }
}

/// Parameters for a C2B instant payment
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    /// Customer mobile number; normalized before dispatch
    pub customer_msisdn: String,
    /// Payment amount; rounded to two decimal places before dispatch
    pub amount: Decimal,
    /// Human-readable payment reason
    pub reason: String,
    /// ISO-like currency code
    pub currency: String,
    /// Caller-supplied correlation reference (UUIDv4). Generated when absent.
    pub source_reference: Option<String>,
}

impl PaymentRequest {
    /// Create a payment request with default reason ("Payment") and
    /// currency ("USD")
    pub fn new(customer_msisdn: impl Into<String>, amount: Decimal) -> Self {
        Self {
            customer_msisdn: customer_msisdn.into(),
            amount,
            reason: "Payment".to_string(),
            currency: "USD".to_string(),
            source_reference: None,
        }
    }

    /// Set the payment reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Set the currency code
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Supply an explicit source reference instead of a generated one
    pub fn with_source_reference(mut self, source_reference: impl Into<String>) -> Self {
        self.source_reference = Some(source_reference.into());
        self
    }
}

/// Parameters for refunding a previous payment
#[derive(Debug, Clone)]
pub struct RefundRequest {
    /// Reference of the transaction being refunded (UUIDv4)
    pub original_transaction_reference: String,
    /// Caller-supplied correlator for this refund
    pub refund_correlator: String,
    /// Mobile number the original payment came from; normalized before dispatch
    pub source_mobile_number: String,
    /// Refund amount; rounded to two decimal places before dispatch
    pub amount: Decimal,
    /// Merchant/client display name
    pub client_name: String,
    /// ISO-like currency code
    pub currency: String,
    /// Reason for the refund, sent as `reasonForRefund`
    pub reason: String,
}

impl RefundRequest {
    /// Create a refund request with default client name (""), currency
    /// ("ZiG") and reason ("")
    pub fn new(
        original_transaction_reference: impl Into<String>,
        refund_correlator: impl Into<String>,
        source_mobile_number: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            original_transaction_reference: original_transaction_reference.into(),
            refund_correlator: refund_correlator.into(),
            source_mobile_number: source_mobile_number.into(),
            amount,
            client_name: String::new(),
            currency: "ZiG".to_string(),
            reason: String::new(),
        }
    }

    /// Set the merchant/client display name
    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }

    /// Set the currency code
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the refund reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}

/// Parameters for a transaction status lookup
#[derive(Debug, Clone)]
pub struct LookupRequest {
    /// Mobile number the transaction was made from; normalized before dispatch
    pub source_mobile_number: String,
    /// Source reference of the transaction to look up (UUIDv4)
    pub source_reference: String,
}

impl LookupRequest {
    /// Create a lookup request
    pub fn new(
        source_mobile_number: impl Into<String>,
        source_reference: impl Into<String>,
    ) -> Self {
        Self {
            source_mobile_number: source_mobile_number.into(),
            source_reference: source_reference.into(),
        }
    }
}
