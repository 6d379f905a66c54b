//! Shared contract for stamp providers

use common_types::{RequestPayload, VerifiedPayload};

use crate::eth::EthAnalysis;
use crate::types::ProviderResult;

/// Scratch state shared by every provider checked within one verification
/// request.
///
/// Create one per request and pass it to each provider in turn so that model
/// results are fetched only once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderContext {
    /// Account analysis for the address under verification, once fetched
    pub eth_analysis: Option<EthAnalysis>,
}

/// A check that certifies one fact about an address
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    /// Stamp identifier, e.g. `ETHScore#50`
    fn provider_type(&self) -> &'static str;

    /// Checks `payload` and reports whether the stamp is earned.
    ///
    /// A failed check is `Ok` with an invalid payload; `Err` is reserved for
    /// failures that prevent the check from running at all.
    async fn verify(
        &self,
        payload: &RequestPayload,
        context: &mut ProviderContext,
    ) -> ProviderResult<VerifiedPayload>;
}
