//! ENS platform binding.
//!
//! ENS stamps are verified from the address alone, so the platform has no
//! OAuth flow and contributes nothing to the provider payload.

use common_types::{AppContext, ProviderPayload};

use crate::platform::Platform;
use crate::types::{ProviderError, ProviderResult};

#[derive(Debug, Clone, Default)]
pub struct EnsPlatform {
    client_id: Option<String>,
    redirect_uri: Option<String>,
}

impl EnsPlatform {
    pub const PLATFORM_ID: &'static str = "Ens";
    pub const PATH: &'static str = "Ens";

    #[must_use]
    pub const fn new() -> Self {
        Self {
            client_id: None,
            redirect_uri: None,
        }
    }
}

#[async_trait::async_trait]
impl Platform for EnsPlatform {
    fn platform_id(&self) -> &'static str {
        Self::PLATFORM_ID
    }

    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    async fn get_provider_payload(
        &self,
        _app_context: &AppContext,
    ) -> ProviderResult<ProviderPayload> {
        Ok(ProviderPayload::new())
    }

    async fn get_oauth_url(&self, _state: &str) -> ProviderResult<String> {
        Err(ProviderError::NotImplemented("Ens::get_oauth_url"))
    }
}
