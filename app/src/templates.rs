use askama::Template;
use domain::portfolio::PortfolioView;
use domain::view::{FormFields, ListEntry, StockDetail};

#[derive(Template)]
#[template(path = "directory.html")]
pub struct DirectoryTemplate<'a> {
    pub users: &'a [ListEntry],
    pub form: &'a FormFields,
    pub portfolio: &'a PortfolioView,
    pub stock: &'a StockDetail,
    pub logo: &'a str,
}
