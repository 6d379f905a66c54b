//! Ethereum account analysis stamps.
//!
//! All ETH stamps share a single call to the account analysis model per
//! verification request and differ only in the field they check and the
//! minimum they require.

pub mod analysis;
pub mod provider;

pub use analysis::{get_eth_analysis, AnalysisField, EthAnalysis, ETH_ANALYSIS_SUBPATH};
pub use provider::{
    eth_providers, AccountAnalysisProvider, EthOptions, ETH_ADVOCATE, ETH_DAYS_ACTIVE,
    ETH_ENTHUSIAST, ETH_GAS_SPENT, ETH_MAXI, ETH_TRANSACTIONS,
};
