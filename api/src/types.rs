//! Request and response bodies of the scanner HTTP contract.

use serde::Deserialize;
use serde::Serialize;

use crate::chain::Chain;
use crate::risk::RiskLevel;
use crate::risk::TokenFlag;

/// JSON body of `POST /api/analyze`. Built per submission, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub contract_address: String,
    pub chain: Chain,
}

/// Successful response of `POST /api/analyze`.
///
/// Market figures are nullable: the scanner returns whatever its data
/// providers had for the pair, if anything. Fields we do not model
/// (e.g. `analyzed_at`, raw on-chain details) are ignored on decode.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub contract_address: String,
    pub contract_name: String,
    pub symbol: String,
    pub risk_level: RiskLevel,
    pub risk_score: u8,
    pub price_usd: Option<String>,
    pub liquidity_usd: Option<f64>,
    pub volume_24h: Option<f64>,
    #[serde(default)]
    pub flags: Vec<TokenFlag>,
    #[serde(default)]
    pub details: AnalysisDetails,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnalysisDetails {
    #[serde(default)]
    pub market_data: MarketData,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MarketData {
    pub dex_id: Option<String>,
    pub price_change_24h: Option<f64>,
    pub fdv: Option<f64>,
}

/// One row of `GET /api/history`. Server-ordered, most recent first.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub contract_address: String,
    pub symbol: Option<String>,
    pub risk_level: RiskLevel,
    pub risk_score: u8,
}
