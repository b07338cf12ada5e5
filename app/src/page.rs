use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use askama::Template;
use domain::event::UiEvent;
use domain::portfolio::PortfolioView;
use domain::stock::DEFAULT_LOGO;
use domain::view::{DirectoryView, FormFields, ListEntry, StockDetail};
use tracing::debug;

use crate::templates::DirectoryTemplate;

/// In-memory model of the directory page, rendered to HTML on demand.
///
/// Logos are resolved against `asset_root`; a missing file is reported back as
/// a queued [`UiEvent::LogoLoadFailed`].
#[derive(Debug)]
pub struct HtmlPage {
    asset_root: PathBuf,
    users: Vec<ListEntry>,
    form: FormFields,
    portfolio: PortfolioView,
    stock: StockDetail,
    logo: String,
    pending: VecDeque<UiEvent>,
}

impl HtmlPage {
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
            users: Vec::new(),
            form: FormFields::default(),
            portfolio: PortfolioView::empty(),
            stock: StockDetail::default(),
            logo: DEFAULT_LOGO.to_string(),
            pending: VecDeque::new(),
        }
    }

    pub fn users(&self) -> &[ListEntry] {
        &self.users
    }

    pub fn portfolio(&self) -> &PortfolioView {
        &self.portfolio
    }

    pub fn stock(&self) -> &StockDetail {
        &self.stock
    }

    /// The form as the operator edits it.
    pub fn form_mut(&mut self) -> &mut FormFields {
        &mut self.form
    }

    /// Next event the page raised on its own, if any.
    pub fn next_event(&mut self) -> Option<UiEvent> {
        self.pending.pop_front()
    }

    pub fn render(&self) -> askama::Result<String> {
        DirectoryTemplate {
            users: &self.users,
            form: &self.form,
            portfolio: &self.portfolio,
            stock: &self.stock,
            logo: &self.logo,
        }
        .render()
    }

    fn asset_exists(&self, src: &str) -> bool {
        self.asset_root.join(Path::new(src)).is_file()
    }
}

impl DirectoryView for HtmlPage {
    fn render_user_list(&mut self, entries: &[ListEntry]) {
        self.users = entries.to_vec();
    }

    fn form(&self) -> FormFields {
        self.form.clone()
    }

    fn set_form(&mut self, fields: FormFields) {
        self.form = fields;
    }

    fn render_portfolio(&mut self, view: &PortfolioView) {
        self.portfolio = view.clone();
    }

    fn set_stock_detail(&mut self, detail: StockDetail) {
        self.stock = detail;
    }

    fn logo(&self) -> &str {
        &self.logo
    }

    fn set_logo(&mut self, src: &str) {
        self.logo = src.to_string();
        if !self.asset_exists(src) {
            debug!("Logo asset {src} missing under {}", self.asset_root.display());
            self.pending
                .push_back(UiEvent::LogoLoadFailed(src.to_string()));
        }
    }
}
