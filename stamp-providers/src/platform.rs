//! Shared contract for stamp platforms

use common_types::{AppContext, ProviderPayload};

use crate::types::ProviderResult;

/// A family of stamps and the sign-in flow used to collect their payload
#[async_trait::async_trait]
pub trait Platform: Send + Sync {
    fn platform_id(&self) -> &'static str;

    fn path(&self) -> &'static str;

    /// OAuth client id, `None` for platforms without OAuth
    fn client_id(&self) -> Option<&str>;

    /// OAuth redirect URI, `None` for platforms without OAuth
    fn redirect_uri(&self) -> Option<&str>;

    /// Collects the payload that will be submitted to this platform's providers
    async fn get_provider_payload(&self, app_context: &AppContext)
        -> ProviderResult<ProviderPayload>;

    /// Builds the OAuth authorization URL for `state`
    async fn get_oauth_url(&self, state: &str) -> ProviderResult<String>;
}
