//! Client for the data science scoring service.
//!
//! Every model is exposed under its own sub-path of a single host and takes
//! the address to analyse as its only input.

use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::{de::DeserializeOwned, Serialize};

use crate::types::{ProviderError, ProviderResult};

/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Connection settings for the scoring service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelApiConfig {
    /// Host (and optional port) of the scoring service, without scheme
    pub host: String,
    /// Timeout applied to each model request
    pub request_timeout: Duration,
}

#[derive(Serialize)]
struct ModelRequest<'a> {
    address: &'a str,
}

/// Trait for the scoring model API
#[async_trait::async_trait]
pub trait ModelApi: Send + Sync {
    /// Host the model requests are sent to, used for diagnostics
    fn host(&self) -> &str;

    /// Posts `address` to the model at `subpath` and returns the raw JSON body
    async fn post_model(&self, subpath: &str, address: &str) -> ProviderResult<serde_json::Value>;
}

/// Fetches the output of the model at `subpath` for `address` and decodes it.
///
/// # Errors
///
/// Returns [`ProviderError::ModelUnavailable`] if the request fails or the
/// body does not match `T`
pub async fn fetch_model_data<T>(
    api: &dyn ModelApi,
    address: &str,
    subpath: &str,
) -> ProviderResult<T>
where
    T: DeserializeOwned,
{
    let body = api.post_model(subpath, address).await?;
    serde_json::from_value(body)
        .map_err(|e| ProviderError::model_unavailable(subpath, api.host(), e))
}

/// HTTP client for the scoring service
pub struct ModelApiClient {
    host: String,
    http_client: ClientWithMiddleware,
}

impl ModelApiClient {
    /// Creates a new scoring service client
    ///
    /// # Panics
    ///
    /// If the HTTP client fails to be created
    #[must_use]
    pub fn new(config: ModelApiConfig) -> Self {
        let reqwest_client = Client::builder()
            .timeout(config.request_timeout)
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
            .user_agent(format!("stamp-providers/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Self {
            host: config.host,
            http_client,
        }
    }

    fn model_url(&self, subpath: &str) -> String {
        format!("http://{}/{subpath}", self.host)
    }
}

#[async_trait::async_trait]
impl ModelApi for ModelApiClient {
    fn host(&self) -> &str {
        &self.host
    }

    async fn post_model(&self, subpath: &str, address: &str) -> ProviderResult<serde_json::Value> {
        let response = self
            .http_client
            .post(self.model_url(subpath))
            .json(&ModelRequest { address })
            .send()
            .await
            .map_err(|e| ProviderError::model_unavailable(subpath, &self.host, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(ProviderError::model_unavailable(
                subpath,
                &self.host,
                format!("Status {status}: {error_text}"),
            ));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ProviderError::model_unavailable(subpath, &self.host, e))
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{ModelApi, ProviderError, ProviderResult};

    pub const MOCK_HOST: &str = "mock-model-host";

    /// In-memory scoring service returning a fixed body
    pub struct MockModelApi {
        response: Option<serde_json::Value>,
        calls: AtomicUsize,
    }

    impl MockModelApi {
        /// Mock that answers every request with `response`
        #[must_use]
        pub fn new(response: serde_json::Value) -> Self {
            Self {
                response: Some(response),
                calls: AtomicUsize::new(0),
            }
        }

        /// Mock that fails every request as if the service were down
        #[must_use]
        pub const fn unavailable() -> Self {
            Self {
                response: None,
                calls: AtomicUsize::new(0),
            }
        }

        /// Mock answering with the ETH analysis model body shape
        #[must_use]
        pub fn with_eth_analysis(
            human_probability: f64,
            gas_spent: f64,
            n_days_active: f64,
            n_transactions: f64,
        ) -> Self {
            Self::new(serde_json::json!({
                "data": {
                    "human_probability": human_probability,
                    "gas_spent": gas_spent,
                    "n_days_active": n_days_active,
                    "n_transactions": n_transactions,
                }
            }))
        }

        /// Number of model requests received so far
        #[must_use]
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl ModelApi for MockModelApi {
        fn host(&self) -> &str {
            MOCK_HOST
        }

        async fn post_model(
            &self,
            subpath: &str,
            _address: &str,
        ) -> ProviderResult<serde_json::Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone().ok_or_else(|| {
                ProviderError::model_unavailable(subpath, MOCK_HOST, "connection refused")
            })
        }
    }
}
