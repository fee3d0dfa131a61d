//! Fixed market parameters used when fabricating trade data.

pub struct FeeSchedule {
    /// Protocol fee in basis points (25 = 0.25%)
    pub protocol_fee_bps: u64,
}

pub struct ChainConfig {
    pub network: &'static str,
    pub token: &'static str,
    pub oracle: &'static str,
    pub documents: &'static str,
    /// Base for fabricated block numbers
    pub block_seed: u64,
    /// Random offset added to `block_seed`: uniform in [min, max)
    pub block_offset_min: u64,
    pub block_offset_max: u64,
    /// Block offsets of the funding, verification and settlement txs from the deploy block
    pub funding_block_offset: u64,
    pub verification_block_offset: u64,
    pub settlement_block_offset: u64,
    /// Deploy gas in ETH: uniform in [gas_base_min, gas_base_min + gas_base_spread)
    pub gas_base_min: f64,
    pub gas_base_spread: f64,
    /// Funding gas as a fraction of deploy gas
    pub funding_gas_factor: f64,
}

pub struct FeedAmountRange {
    pub min_usd: u64,
    pub max_usd: u64,
}

pub struct MarketConfig {
    pub fees: FeeSchedule,
    pub chain: ChainConfig,
    pub feed_amounts: FeedAmountRange,
}

pub const MARKET: MarketConfig = MarketConfig {
    fees: FeeSchedule {
        protocol_fee_bps: 25,
    },
    chain: ChainConfig {
        network: "Ethereum Mainnet",
        token: "USDC",
        oracle: "Chainlink",
        documents: "BL + CoO + Invoice",
        block_seed: 19_847_000,
        block_offset_min: 100,
        block_offset_max: 600,
        funding_block_offset: 9,
        verification_block_offset: 64,
        settlement_block_offset: 97,
        gas_base_min: 0.0028,
        gas_base_spread: 0.0018,
        funding_gas_factor: 0.4,
    },
    feed_amounts: FeedAmountRange {
        min_usd: 100_000,
        max_usd: 5_000_000,
    },
};
