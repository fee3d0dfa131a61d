//! Fabricated, display-only chain data.
mod block_ticker;
mod hex;
mod live_feed;
mod trade_record;

pub use block_ticker::BlockTicker;
pub use hex::{
    ADDRESS_HEX_LEN, TX_HASH_HEX_LEN, generate_address, generate_hex, generate_transaction_hash,
};
pub use live_feed::{FeedEntry, FeedKind, LiveFeed};
pub use trade_record::{
    DeploymentInfo, DisplayRow, FundingInfo, RowTone, SettlementInfo, SyntheticTradeRecord,
    TradeMeta, VerificationInfo, generate_trade_record,
};
