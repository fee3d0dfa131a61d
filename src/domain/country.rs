use {
    serde::Serialize,
    strum::IntoEnumIterator,
    strum_macros::{Display, EnumIter, EnumString, IntoStaticStr},
};

/// Seller / buyer jurisdictions offered in the trade form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(into = "&'static str")]
#[strum(ascii_case_insensitive)]
pub enum Country {
    #[strum(to_string = "UAE")]
    Uae,
    #[strum(to_string = "Singapore")]
    Singapore,
    #[strum(to_string = "Hong Kong", serialize = "hong-kong", serialize = "hk")]
    HongKong,
    #[strum(to_string = "Japan")]
    Japan,
    #[strum(to_string = "South Korea", serialize = "south-korea", serialize = "korea")]
    SouthKorea,
    #[strum(to_string = "India")]
    India,
    #[strum(to_string = "Brazil")]
    Brazil,
    #[strum(to_string = "USA", serialize = "us")]
    Usa,
    #[strum(to_string = "Germany")]
    Germany,
    #[strum(to_string = "Australia")]
    Australia,
}

impl Country {
    /// Every country may sell.
    pub fn seller_options() -> impl Iterator<Item = Country> {
        Country::iter()
    }

    /// Buyer list leaves out the chosen seller. The seller list is not filtered by buyer.
    pub fn buyer_options(seller: Country) -> impl Iterator<Item = Country> {
        Country::iter().filter(move |&c| c != seller)
    }
}
