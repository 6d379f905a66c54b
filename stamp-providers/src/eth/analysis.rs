use serde::Deserialize;
use strum::Display;

use crate::model_api::{fetch_model_data, ModelApi};
use crate::provider::ProviderContext;
use crate::types::ProviderResult;

/// Sub-path of the account analysis model on the scoring service
pub const ETH_ANALYSIS_SUBPATH: &str = "eth-stamp-v2-predict";

/// Response body of the account analysis model
#[derive(Debug, Deserialize)]
struct ModelResponse {
    data: ModelData,
}

#[derive(Debug, Deserialize)]
struct ModelData {
    human_probability: f64,
    gas_spent: f64,
    n_days_active: f64,
    n_transactions: f64,
}

/// Behavioural metrics of one address, as computed by the analysis model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EthAnalysis {
    /// Likelihood, from 0 to 100, that the address belongs to a human
    pub human_probability: f64,
    /// Total ETH spent on gas
    pub gas_spent: f64,
    pub number_days_active: f64,
    pub number_transactions: f64,
}

impl From<ModelData> for EthAnalysis {
    fn from(data: ModelData) -> Self {
        Self {
            human_probability: data.human_probability,
            gas_spent: data.gas_spent,
            number_days_active: data.n_days_active,
            number_transactions: data.n_transactions,
        }
    }
}

/// Selects one of the [`EthAnalysis`] metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AnalysisField {
    HumanProbability,
    GasSpent,
    NumberDaysActive,
    NumberTransactions,
}

impl AnalysisField {
    #[must_use]
    pub const fn value_of(self, analysis: &EthAnalysis) -> f64 {
        match self {
            Self::HumanProbability => analysis.human_probability,
            Self::GasSpent => analysis.gas_spent,
            Self::NumberDaysActive => analysis.number_days_active,
            Self::NumberTransactions => analysis.number_transactions,
        }
    }
}

/// Returns the account analysis for `address`, querying the model only if the
/// context does not hold one yet.
///
/// The first result is stored in `context` and returned unchanged for the rest
/// of the verification request.
///
/// # Errors
///
/// Returns [`crate::types::ProviderError::ModelUnavailable`] if the model
/// cannot be queried
pub async fn get_eth_analysis(
    api: &dyn ModelApi,
    address: &str,
    context: &mut ProviderContext,
) -> ProviderResult<EthAnalysis> {
    if let Some(analysis) = context.eth_analysis {
        tracing::debug!("Using cached ETH analysis for {address}");
        return Ok(analysis);
    }

    tracing::debug!("Fetching ETH analysis for {address} from {}", api.host());
    let response: ModelResponse = fetch_model_data(api, address, ETH_ANALYSIS_SUBPATH).await?;

    Ok(*context.eth_analysis.insert(response.data.into()))
}
