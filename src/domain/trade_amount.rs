use {
    anyhow::{Result, anyhow},
    serde::Serialize,
    std::{fmt, str::FromStr},
    strum::IntoEnumIterator,
    strum_macros::EnumIter,
};

use crate::{config::MARKET, utils::fmt_usd};

/// The six trade values the form allows. Anything else is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, EnumIter)]
#[serde(into = "u64")]
pub enum TradeAmount {
    Usd100k,
    Usd250k,
    #[default]
    Usd500k,
    Usd1m,
    Usd2_5m,
    Usd5m,
}

impl TradeAmount {
    pub const fn usd(self) -> u64 {
        match self {
            Self::Usd100k => 100_000,
            Self::Usd250k => 250_000,
            Self::Usd500k => 500_000,
            Self::Usd1m => 1_000_000,
            Self::Usd2_5m => 2_500_000,
            Self::Usd5m => 5_000_000,
        }
    }

    pub fn from_usd(usd: u64) -> Option<Self> {
        Self::iter().find(|a| a.usd() == usd)
    }

    /// Protocol fee rounded half-up to whole dollars.
    pub fn protocol_fee(self) -> u64 {
        protocol_fee_for(self.usd())
    }

    pub fn net_to_seller(self) -> u64 {
        self.usd() - self.protocol_fee()
    }
}

/// `round(usd * bps / 10_000)` in integer arithmetic.
pub fn protocol_fee_for(usd: u64) -> u64 {
    let bps = MARKET.fees.protocol_fee_bps;
    (usd * bps + 5_000) / 10_000
}

/// "0.25%" for 25 bps
pub fn protocol_fee_label() -> String {
    let bps = MARKET.fees.protocol_fee_bps;
    format!("{}.{:02}%", bps / 100, bps % 100)
}

impl From<TradeAmount> for u64 {
    fn from(a: TradeAmount) -> u64 {
        a.usd()
    }
}

impl fmt::Display for TradeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", fmt_usd(self.usd()))
    }
}

/// Accepts "1000000", "1,000,000" or "$1,000,000".
impl FromStr for TradeAmount {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits: String = s
            .trim()
            .trim_start_matches('$')
            .chars()
            .filter(|c| *c != ',' && *c != '_')
            .collect();
        let usd: u64 = digits
            .parse()
            .map_err(|_| anyhow!("'{}' is not a dollar amount", s))?;
        Self::from_usd(usd).ok_or_else(|| {
            let allowed: Vec<String> = Self::iter().map(|a| a.usd().to_string()).collect();
            anyhow!("{} is not an offered trade value (one of {})", usd, allowed.join(", "))
        })
    }
}
