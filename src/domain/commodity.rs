use {
    serde::Serialize,
    strum_macros::{Display, EnumIter, EnumString, IntoStaticStr},
};

/// Commodities offered in the trade form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(into = "&'static str")]
#[strum(ascii_case_insensitive)]
pub enum Commodity {
    #[default]
    #[strum(to_string = "Crude Oil", serialize = "crude-oil")]
    CrudeOil,
    #[strum(to_string = "Copper Ore", serialize = "copper-ore")]
    CopperOre,
    #[strum(to_string = "Soybeans")]
    Soybeans,
    #[strum(to_string = "Rice")]
    Rice,
    #[strum(to_string = "Cotton")]
    Cotton,
    #[strum(to_string = "Liquefied Gas", serialize = "liquefied-gas", serialize = "lng")]
    LiquefiedGas,
    #[strum(to_string = "Iron Ore", serialize = "iron-ore")]
    IronOre,
    #[strum(to_string = "Wheat")]
    Wheat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn eight_commodities_in_form_order() {
        let names: Vec<String> = Commodity::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            [
                "Crude Oil",
                "Copper Ore",
                "Soybeans",
                "Rice",
                "Cotton",
                "Liquefied Gas",
                "Iron Ore",
                "Wheat"
            ]
        );
    }

    #[test]
    fn parses_display_name_and_cli_alias() {
        assert_eq!(Commodity::from_str("Iron Ore").unwrap(), Commodity::IronOre);
        assert_eq!(Commodity::from_str("iron-ore").unwrap(), Commodity::IronOre);
        assert_eq!(Commodity::from_str("LNG").unwrap(), Commodity::LiquefiedGas);
        assert!(Commodity::from_str("gold").is_err());
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Commodity::CopperOre).unwrap();
        assert_eq!(json, "\"Copper Ore\"");
    }
}
