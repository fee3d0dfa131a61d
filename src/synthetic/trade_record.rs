use {rand::Rng, serde::Serialize};

use crate::{
    config::MARKET,
    domain::{Commodity, Country, TradeAmount, TradeConfiguration, protocol_fee_label},
    engine::Step,
    utils::{fmt_num, fmt_usd},
};

use super::hex::{generate_address, generate_transaction_hash};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeMeta {
    pub commodity: Commodity,
    pub amount: TradeAmount,
    pub seller: Country,
    pub buyer: Country,
    pub contract_address: String,
    pub escrow_address: String,
    pub seller_address: String,
    pub buyer_address: String,
}

/// Step 1: escrow contract deployed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentInfo {
    pub network: &'static str,
    pub contract: String,
    pub tx_hash: String,
    pub block: u64,
    pub gas_used_eth: f64,
    pub tx_type: &'static str,
}

/// Step 2: buyer funds escrow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingInfo {
    pub token: &'static str,
    pub amount_usd: u64,
    pub from: String,
    pub to: String,
    pub tx_hash: String,
    pub block: u64,
    pub gas_used_eth: f64,
}

/// Step 3: oracle attests the shipping documents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationInfo {
    pub oracle: &'static str,
    pub documents: &'static str,
    pub doc_hash: String,
    pub tx_hash: String,
    pub block: u64,
    pub verified: bool,
}

/// Step 4: escrow pays the seller, less the protocol fee
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementInfo {
    pub amount_usd: u64,
    pub to: String,
    pub protocol_fee_usd: u64,
    pub net_to_seller_usd: u64,
    pub tx_hash: String,
    pub block: u64,
}

/// How a value should be emphasised when shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTone {
    /// Address or hash (rendered truncated)
    Hash,
    /// Oracle name, verification result
    Positive,
    /// Money moving
    Highlight,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: &'static str,
    pub value: String,
    pub tone: RowTone,
}

impl DisplayRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        let tone = if value.starts_with("0x") {
            RowTone::Hash
        } else {
            RowTone::Plain
        };
        Self { label, value, tone }
    }

    fn tone(mut self, tone: RowTone) -> Self {
        self.tone = tone;
        self
    }
}

/// Everything shown for one demo run. Replaced wholesale on every submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntheticTradeRecord {
    pub meta: TradeMeta,
    pub deployment: DeploymentInfo,
    pub funding: FundingInfo,
    pub verification: VerificationInfo,
    pub settlement: SettlementInfo,
}

/// Fixed structure, random content. Blocks step forward from one random base.
pub fn generate_trade_record<R: Rng + ?Sized>(
    rng: &mut R,
    config: &TradeConfiguration,
) -> SyntheticTradeRecord {
    let chain = &MARKET.chain;
    let amount = config.amount();

    let contract_address = generate_address(rng);
    let escrow_address = generate_address(rng);
    let seller_address = generate_address(rng);
    let buyer_address = generate_address(rng);
    let block = chain.block_seed + rng.gen_range(chain.block_offset_min..chain.block_offset_max);
    let gas_base = chain.gas_base_min + rng.gen_range(0.0..chain.gas_base_spread);

    let deployment = DeploymentInfo {
        network: chain.network,
        contract: contract_address.clone(),
        tx_hash: generate_transaction_hash(rng),
        block,
        gas_used_eth: gas_base,
        tx_type: "Contract Deploy",
    };
    let funding = FundingInfo {
        token: chain.token,
        amount_usd: amount.usd(),
        from: buyer_address.clone(),
        to: contract_address.clone(),
        tx_hash: generate_transaction_hash(rng),
        block: block + chain.funding_block_offset,
        gas_used_eth: gas_base * chain.funding_gas_factor,
    };
    let verification = VerificationInfo {
        oracle: chain.oracle,
        documents: chain.documents,
        doc_hash: generate_transaction_hash(rng),
        tx_hash: generate_transaction_hash(rng),
        block: block + chain.verification_block_offset,
        verified: true,
    };
    let settlement = SettlementInfo {
        amount_usd: amount.usd(),
        to: seller_address.clone(),
        protocol_fee_usd: amount.protocol_fee(),
        net_to_seller_usd: amount.net_to_seller(),
        tx_hash: generate_transaction_hash(rng),
        block: block + chain.settlement_block_offset,
    };

    SyntheticTradeRecord {
        meta: TradeMeta {
            commodity: config.commodity(),
            amount,
            seller: config.seller(),
            buyer: config.buyer(),
            contract_address,
            escrow_address,
            seller_address,
            buyer_address,
        },
        deployment,
        funding,
        verification,
        settlement,
    }
}

fn eth(v: f64) -> String {
    format!("{:.4} ETH", v)
}

impl SyntheticTradeRecord {
    /// Rows for a step card, in display order.
    pub fn rows(&self, step: Step) -> Vec<DisplayRow> {
        match step {
            Step::Agreement => {
                let d = &self.deployment;
                vec![
                    DisplayRow::new("Network", d.network),
                    DisplayRow::new("Contract", d.contract.clone()),
                    DisplayRow::new("Tx Hash", d.tx_hash.clone()),
                    DisplayRow::new("Block", fmt_num(d.block)),
                    DisplayRow::new("Gas Used", eth(d.gas_used_eth)),
                    DisplayRow::new("Type", d.tx_type),
                ]
            }
            Step::Funding => {
                let f = &self.funding;
                vec![
                    DisplayRow::new("Token", f.token),
                    DisplayRow::new("Amount", fmt_usd(f.amount_usd)).tone(RowTone::Highlight),
                    DisplayRow::new("From", f.from.clone()),
                    DisplayRow::new("To", f.to.clone()),
                    DisplayRow::new("Tx Hash", f.tx_hash.clone()),
                    DisplayRow::new("Block", fmt_num(f.block)),
                    DisplayRow::new("Gas Used", eth(f.gas_used_eth)),
                ]
            }
            Step::Verification => {
                let v = &self.verification;
                let result = if v.verified { "VERIFIED ✓" } else { "PENDING" };
                vec![
                    DisplayRow::new("Oracle", v.oracle).tone(RowTone::Positive),
                    DisplayRow::new("Docs", v.documents),
                    DisplayRow::new("Doc Hash", v.doc_hash.clone()),
                    DisplayRow::new("Tx Hash", v.tx_hash.clone()),
                    DisplayRow::new("Block", fmt_num(v.block)),
                    DisplayRow::new("Result", result).tone(RowTone::Positive),
                ]
            }
            Step::Settlement => {
                let s = &self.settlement;
                vec![
                    DisplayRow::new("Amount", format!("{} USDC", fmt_usd(s.amount_usd)))
                        .tone(RowTone::Highlight),
                    DisplayRow::new("To", s.to.clone()),
                    DisplayRow::new(
                        "Protocol Fee",
                        format!("{} ({})", fmt_usd(s.protocol_fee_usd), protocol_fee_label()),
                    ),
                    DisplayRow::new("Net Seller", fmt_usd(s.net_to_seller_usd))
                        .tone(RowTone::Highlight),
                    DisplayRow::new("Tx Hash", s.tx_hash.clone()),
                    DisplayRow::new("Block", fmt_num(s.block)),
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use strum::IntoEnumIterator;

    fn config(amount: TradeAmount) -> TradeConfiguration {
        TradeConfiguration::new(Commodity::IronOre, amount, Country::Australia, Country::Japan)
            .unwrap()
    }

    #[test]
    fn derived_amounts_for_one_million() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let rec = generate_trade_record(&mut rng, &config(TradeAmount::Usd1m));
        assert_eq!(rec.settlement.amount_usd, 1_000_000);
        assert_eq!(rec.settlement.protocol_fee_usd, 2_500);
        assert_eq!(rec.settlement.net_to_seller_usd, 997_500);
        assert_eq!(rec.funding.amount_usd, 1_000_000);

        let fee = rec
            .rows(Step::Settlement)
            .into_iter()
            .find(|r| r.label == "Protocol Fee")
            .unwrap();
        assert_eq!(fee.value, "$2,500 (0.25%)");
    }

    #[test]
    fn blocks_step_forward_from_base() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let rec = generate_trade_record(&mut rng, &config(TradeAmount::Usd250k));
            let base = rec.deployment.block;
            assert!((19_847_100..19_847_600).contains(&base));
            assert_eq!(rec.funding.block, base + 9);
            assert_eq!(rec.verification.block, base + 64);
            assert_eq!(rec.settlement.block, base + 97);
        }
    }

    #[test]
    fn gas_is_in_range_and_funding_is_cheaper() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..50 {
            let rec = generate_trade_record(&mut rng, &config(TradeAmount::Usd100k));
            assert!(rec.deployment.gas_used_eth >= 0.0028);
            assert!(rec.deployment.gas_used_eth < 0.0046);
            assert!((rec.funding.gas_used_eth - rec.deployment.gas_used_eth * 0.4).abs() < 1e-12);
        }
    }

    #[test]
    fn addresses_are_wired_between_steps() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let rec = generate_trade_record(&mut rng, &config(TradeAmount::Usd500k));
        assert_eq!(rec.deployment.contract, rec.meta.contract_address);
        assert_eq!(rec.funding.from, rec.meta.buyer_address);
        assert_eq!(rec.funding.to, rec.meta.contract_address);
        assert_eq!(rec.settlement.to, rec.meta.seller_address);
        for addr in [
            &rec.meta.contract_address,
            &rec.meta.escrow_address,
            &rec.meta.seller_address,
            &rec.meta.buyer_address,
        ] {
            assert_eq!(addr.len(), 42);
        }
        for tx in [
            &rec.deployment.tx_hash,
            &rec.funding.tx_hash,
            &rec.verification.doc_hash,
            &rec.verification.tx_hash,
            &rec.settlement.tx_hash,
        ] {
            assert_eq!(tx.len(), 66);
        }
    }

    #[test]
    fn every_step_has_rows_and_hashes_are_tagged() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let rec = generate_trade_record(&mut rng, &config(TradeAmount::Usd5m));
        for step in Step::iter() {
            let rows = rec.rows(step);
            assert!(!rows.is_empty());
            for r in rows {
                assert_eq!(r.tone == RowTone::Hash, r.value.starts_with("0x"), "{}", r.label);
            }
        }
    }

    #[test]
    fn meta_echoes_configuration() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let rec = generate_trade_record(&mut rng, &config(TradeAmount::Usd2_5m));
        assert_eq!(rec.meta.commodity, Commodity::IronOre);
        assert_eq!(rec.meta.seller, Country::Australia);
        assert_eq!(rec.meta.buyer, Country::Japan);
        assert_eq!(rec.meta.amount, TradeAmount::Usd2_5m);
    }
}
