//! Stock market access costs.
//!
//! The WSE account and TIX API have fixed prices. The two 4S Market Data
//! products are scaled by the BitNode's 4S multipliers.

use serde::{Deserialize, Serialize};

use crate::constants::stock_market::{
    MARKET_DATA_4S_COST, MARKET_DATA_TIX_API_4S_COST, TIX_API_COST, WSE_ACCOUNT_COST,
};
use crate::multipliers::BitNodeMultipliers;

pub fn wse_account_cost() -> f64 {
    WSE_ACCOUNT_COST
}

pub fn tix_api_cost() -> f64 {
    TIX_API_COST
}

pub fn four_sigma_data_cost(mults: &BitNodeMultipliers) -> f64 {
    MARKET_DATA_4S_COST * mults.four_sigma_market_data_cost
}

pub fn four_sigma_tix_api_cost(mults: &BitNodeMultipliers) -> f64 {
    MARKET_DATA_TIX_API_4S_COST * mults.four_sigma_market_data_api_cost
}

/// All four access costs under one multiplier table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockMarketCosts {
    pub wse_account: f64,
    pub tix_api: f64,
    pub four_sigma_data: f64,
    pub four_sigma_tix_api: f64,
}

impl StockMarketCosts {
    pub fn new(mults: &BitNodeMultipliers) -> Self {
        Self {
            wse_account: wse_account_cost(),
            tix_api: tix_api_cost(),
            four_sigma_data: four_sigma_data_cost(mults),
            four_sigma_tix_api: four_sigma_tix_api_cost(mults),
        }
    }

    /// Cost of buying everything.
    pub fn total(&self) -> f64 {
        self.wse_account + self.tix_api + self.four_sigma_data + self.four_sigma_tix_api
    }
}
