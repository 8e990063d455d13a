//! Game constants — fixed costs and base values.
//!
//! Anything that is scaled by a BitNode multiplier keeps its unscaled base
//! value here; the scaling happens at the call site.

/// BitNode every new save starts in.
pub const DEFAULT_BITNODE: u8 = 1;

/// Highest BitNode number with a defined multiplier table.
pub const MAX_BITNODE: u8 = 13;

pub mod stock_market {
    /// World Stock Exchange account.
    pub const WSE_ACCOUNT_COST: f64 = 200e6;
    /// Trade Information eXchange API access.
    pub const TIX_API_COST: f64 = 5e9;
    /// 4S Market Data (the in-game display, not the API).
    pub const MARKET_DATA_4S_COST: f64 = 1e9;
    /// 4S Market Data TIX API access.
    pub const MARKET_DATA_TIX_API_4S_COST: f64 = 25e9;
}

pub mod factions {
    /// Augmentations needed for a Daedalus invitation before scaling.
    pub const DAEDALUS_BASE_AUGS: u32 = 30;
}

pub mod recursion {
    // BitNode-12 scaling: every Source-File 12 level compounds by this factor.
    pub const SF12_GROWTH: f64 = 1.02;
    /// Ceiling on the Daedalus augmentation requirement multiplier (40 augs).
    pub const DAEDALUS_REQUIREMENT_CAP: f64 = 1.34;
    pub const STARTING_SECURITY: f64 = 1.5;
    pub const SOFTCAP: f64 = 0.8;
}
