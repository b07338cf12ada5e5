use in_memory_adapter::InMemoryRepo;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_LOGO: &str = "logos/default.svg";

/// Reference data for a tradable symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stock {
    pub symbol: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub sector: String,
    #[serde(rename = "subIndustry", deserialize_with = "null_as_empty")]
    pub sub_industry: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub address: String,
}

/// Source data uses `null` for unknown detail fields; they show as empty text.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub type StockRepo = InMemoryRepo<Stock, String>;

pub trait StockRepoExt {
    fn find_stock(&self, symbol: &str) -> Option<&Stock>;
}

impl StockRepoExt for StockRepo {
    fn find_stock(&self, symbol: &str) -> Option<&Stock> {
        self.iter()
            .find_map(|(key, stock)| (key == symbol).then_some(stock))
    }
}

/// Logo asset for a symbol, relative to the page's asset root.
#[must_use]
pub fn logo_path(symbol: &str) -> String {
    format!("logos/{symbol}.svg")
}
