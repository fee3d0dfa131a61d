use {
    anyhow::{Result, ensure},
    serde::Serialize,
    std::fmt,
};

use super::{Commodity, Country, TradeAmount};

/// What the user submitted. Immutable; buyer never equals seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradeConfiguration {
    commodity: Commodity,
    amount: TradeAmount,
    seller: Country,
    buyer: Country,
}

impl TradeConfiguration {
    pub fn new(
        commodity: Commodity,
        amount: TradeAmount,
        seller: Country,
        buyer: Country,
    ) -> Result<Self> {
        ensure!(
            buyer != seller,
            "buyer and seller are both {}; pick a different buyer country",
            seller
        );
        Ok(Self {
            commodity,
            amount,
            seller,
            buyer,
        })
    }

    pub fn commodity(&self) -> Commodity {
        self.commodity
    }

    pub fn amount(&self) -> TradeAmount {
        self.amount
    }

    pub fn seller(&self) -> Country {
        self.seller
    }

    pub fn buyer(&self) -> Country {
        self.buyer
    }
}

impl fmt::Display for TradeConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} USDC | {} → {}",
            self.commodity, self.amount, self.seller, self.buyer
        )
    }
}

/// Editable form state behind the "Configure Trade" screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeForm {
    pub commodity: Commodity,
    pub amount: TradeAmount,
    seller: Country,
    buyer: Country,
}

impl Default for TradeForm {
    fn default() -> Self {
        Self {
            commodity: Commodity::CrudeOil,
            amount: TradeAmount::Usd500k,
            seller: Country::Uae,
            buyer: Country::Singapore,
        }
    }
}

impl TradeForm {
    pub fn seller(&self) -> Country {
        self.seller
    }

    pub fn buyer(&self) -> Country {
        self.buyer
    }

    /// Choosing the current buyer as seller moves the buyer to the first remaining option.
    pub fn set_seller(&mut self, seller: Country) {
        self.seller = seller;
        if self.buyer == seller {
            if let Some(first) = Country::buyer_options(seller).next() {
                self.buyer = first;
            }
        }
    }

    /// Ignores a buyer equal to the seller; the buyer list never offers it.
    pub fn set_buyer(&mut self, buyer: Country) {
        if buyer != self.seller {
            self.buyer = buyer;
        }
    }

    pub fn to_configuration(&self) -> Result<TradeConfiguration> {
        TradeConfiguration::new(self.commodity, self.amount, self.seller, self.buyer)
    }
}
