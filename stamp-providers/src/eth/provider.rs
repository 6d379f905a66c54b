use std::sync::Arc;

use common_types::{RequestPayload, VerifiedPayload};

use super::analysis::{get_eth_analysis, AnalysisField};
use crate::model_api::ModelApi;
use crate::provider::{Provider, ProviderContext};
use crate::types::ProviderResult;

/// Static configuration of an account analysis stamp
#[derive(Debug, Clone, Copy)]
pub struct EthOptions {
    pub provider_type: &'static str,
    /// Lowest accepted value of `data_key`
    pub minimum: f64,
    pub data_key: AnalysisField,
    /// Builds the failure message from `(minimum, actual)`
    pub failure_message: fn(f64, f64) -> String,
}

fn human_probability_message(minimum: f64, actual: f64) -> String {
    format!(
        "You received a score of {actual} from our analysis. You must have a score of {minimum} or higher to obtain this stamp."
    )
}

fn days_active_message(minimum: f64, actual: f64) -> String {
    format!(
        "You have been active on Ethereum on {actual} distinct days. You must be active for {minimum} days to obtain this stamp."
    )
}

fn gas_spent_message(minimum: f64, actual: f64) -> String {
    format!(
        "You have spent {actual} ETH on Ethereum gas. You must spend {minimum} ETH on gas to obtain this stamp."
    )
}

fn transactions_message(minimum: f64, actual: f64) -> String {
    format!(
        "You have made {actual} transactions on Ethereum. You must make {minimum} transactions to obtain this stamp."
    )
}

pub const ETH_ENTHUSIAST: EthOptions = EthOptions {
    provider_type: "ETHScore#50",
    minimum: 50.0,
    data_key: AnalysisField::HumanProbability,
    failure_message: human_probability_message,
};

pub const ETH_ADVOCATE: EthOptions = EthOptions {
    provider_type: "ETHScore#75",
    minimum: 75.0,
    data_key: AnalysisField::HumanProbability,
    failure_message: human_probability_message,
};

pub const ETH_MAXI: EthOptions = EthOptions {
    provider_type: "ETHScore#90",
    minimum: 90.0,
    data_key: AnalysisField::HumanProbability,
    failure_message: human_probability_message,
};

pub const ETH_DAYS_ACTIVE: EthOptions = EthOptions {
    provider_type: "ETHDaysActive#50",
    minimum: 50.0,
    data_key: AnalysisField::NumberDaysActive,
    failure_message: days_active_message,
};

pub const ETH_GAS_SPENT: EthOptions = EthOptions {
    provider_type: "ETHGasSpent#0.25",
    minimum: 0.25,
    data_key: AnalysisField::GasSpent,
    failure_message: gas_spent_message,
};

pub const ETH_TRANSACTIONS: EthOptions = EthOptions {
    provider_type: "ETHnumTransactions#100",
    minimum: 100.0,
    data_key: AnalysisField::NumberTransactions,
    failure_message: transactions_message,
};

/// Stamp granted when one account analysis metric reaches a minimum
pub struct AccountAnalysisProvider {
    options: EthOptions,
    model_api: Arc<dyn ModelApi>,
}

impl AccountAnalysisProvider {
    #[must_use]
    pub fn new(options: EthOptions, model_api: Arc<dyn ModelApi>) -> Self {
        Self { options, model_api }
    }

    #[must_use]
    pub const fn options(&self) -> &EthOptions {
        &self.options
    }
}

#[async_trait::async_trait]
impl Provider for AccountAnalysisProvider {
    fn provider_type(&self) -> &'static str {
        self.options.provider_type
    }

    async fn verify(
        &self,
        payload: &RequestPayload,
        context: &mut ProviderContext,
    ) -> ProviderResult<VerifiedPayload> {
        let address = payload.address.as_str();
        let analysis = get_eth_analysis(self.model_api.as_ref(), address, context).await?;

        let EthOptions {
            provider_type,
            minimum,
            data_key,
            failure_message,
        } = self.options;
        let actual = data_key.value_of(&analysis);

        if actual < minimum {
            tracing::debug!("{provider_type} failed for {address}: {data_key} {actual} < {minimum}");
            return Ok(VerifiedPayload::invalid(failure_message(minimum, actual)));
        }

        tracing::debug!("{provider_type} passed for {address}: {data_key} {actual} >= {minimum}");
        Ok(VerifiedPayload::valid(address))
    }
}

/// All account analysis stamps, sharing one model client
#[must_use]
pub fn eth_providers(model_api: &Arc<dyn ModelApi>) -> Vec<AccountAnalysisProvider> {
    [
        ETH_ENTHUSIAST,
        ETH_ADVOCATE,
        ETH_MAXI,
        ETH_DAYS_ACTIVE,
        ETH_GAS_SPENT,
        ETH_TRANSACTIONS,
    ]
    .into_iter()
    .map(|options| AccountAnalysisProvider::new(options, Arc::clone(model_api)))
    .collect()
}
