use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Column titles of the portfolio table.
pub const PORTFOLIO_HEADER: [&str; 3] = ["Symbol", "# Shares", "Actions"];

/// Label of the per-row action that opens the stock panel.
pub const VIEW_ACTION: &str = "View";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    /// Shown as given, so fractional quantities pass through untouched.
    pub owned: Number,
}

/// Ordered holdings of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Portfolio(Vec<Holding>);

impl Portfolio {
    #[must_use]
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self(holdings)
    }

    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioRow {
    pub symbol: String,
    pub owned: Number,
    pub action_label: &'static str,
    /// Key the action reports back when clicked.
    pub action_key: String,
}

/// What the portfolio area shows: always the header, then one row per holding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioView {
    pub header: [&'static str; 3],
    pub rows: Vec<PortfolioRow>,
}

impl PortfolioView {
    /// Header only.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            header: PORTFOLIO_HEADER,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn for_portfolio(portfolio: &Portfolio) -> Self {
        let rows = portfolio
            .holdings()
            .iter()
            .map(|holding| PortfolioRow {
                symbol: holding.symbol.clone(),
                owned: holding.owned.clone(),
                action_label: VIEW_ACTION,
                action_key: holding.symbol.clone(),
            })
            .collect();

        Self {
            header: PORTFOLIO_HEADER,
            rows,
        }
    }
}

impl Default for PortfolioView {
    fn default() -> Self {
        Self::empty()
    }
}
