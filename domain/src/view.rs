use validator::Validate;

use crate::portfolio::PortfolioView;
use crate::stock::Stock;
use crate::user::{Profile, User, UserId};

/// One line of the user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub key: UserId,
    pub label: String,
}

impl ListEntry {
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        Self {
            key: user.id.clone(),
            label: user.profile.list_label(),
        }
    }
}

/// Current values of the edit form. `user_id` is the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct FormFields {
    #[validate(length(min = 1, message = "Select a user first"))]
    pub user_id: String,
    pub firstname: String,
    pub lastname: String,
    pub address: String,
    pub city: String,
    pub email: String,
}

impl FormFields {
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        let profile = &user.profile;
        Self {
            user_id: user.id.to_string(),
            firstname: profile.firstname().to_string(),
            lastname: profile.lastname().to_string(),
            address: profile.address().to_string(),
            city: profile.city().to_string(),
            email: profile.email().to_string(),
        }
    }

    /// The selected identifier, if the field is non-empty.
    #[must_use]
    pub fn selection(&self) -> Option<UserId> {
        self.validate().ok()?;
        Some(UserId::new(&self.user_id))
    }

    /// The editable fields as a profile, taken verbatim.
    #[must_use]
    pub fn to_profile(&self) -> Profile {
        Profile {
            firstname: Some(self.firstname.clone()),
            lastname: Some(self.lastname.clone()),
            address: Some(self.address.clone()),
            city: Some(self.city.clone()),
            email: Some(self.email.clone()),
        }
    }

    /// Sets an editable field by its form name. Returns `false` for unknown names.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name {
            "userID" | "user_id" => &mut self.user_id,
            "firstname" => &mut self.firstname,
            "lastname" => &mut self.lastname,
            "address" => &mut self.address,
            "city" => &mut self.city,
            "email" => &mut self.email,
            _ => return false,
        };
        *slot = value.into();
        true
    }
}

pub const NOT_FOUND: &str = "Not found";

/// Text of the stock detail panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockDetail {
    pub name: String,
    pub sector: String,
    pub sub_industry: String,
    pub address: String,
}

impl StockDetail {
    #[must_use]
    pub fn for_stock(stock: &Stock) -> Self {
        Self {
            name: stock.name.clone(),
            sector: stock.sector.clone(),
            sub_industry: stock.sub_industry.clone(),
            address: stock.address.clone(),
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self {
            name: NOT_FOUND.to_string(),
            ..Self::default()
        }
    }
}

/// The page the directory renders into.
///
/// Implementations own layout; the controller only replaces content. A page
/// that fails to load a logo reports it back as
/// [`UiEvent::LogoLoadFailed`](crate::event::UiEvent::LogoLoadFailed).
pub trait DirectoryView {
    /// Replaces every entry of the user list.
    fn render_user_list(&mut self, entries: &[ListEntry]);

    fn form(&self) -> FormFields;
    fn set_form(&mut self, fields: FormFields);
    fn reset_form(&mut self) {
        self.set_form(FormFields::default());
    }

    /// Replaces the whole portfolio area.
    fn render_portfolio(&mut self, view: &PortfolioView);

    fn set_stock_detail(&mut self, detail: StockDetail);

    fn logo(&self) -> &str;
    fn set_logo(&mut self, src: &str);
}

impl<V: DirectoryView + ?Sized> DirectoryView for Box<V> {
    fn render_user_list(&mut self, entries: &[ListEntry]) {
        (**self).render_user_list(entries);
    }

    fn form(&self) -> FormFields {
        (**self).form()
    }

    fn set_form(&mut self, fields: FormFields) {
        (**self).set_form(fields);
    }

    fn reset_form(&mut self) {
        (**self).reset_form();
    }

    fn render_portfolio(&mut self, view: &PortfolioView) {
        (**self).render_portfolio(view);
    }

    fn set_stock_detail(&mut self, detail: StockDetail) {
        (**self).set_stock_detail(detail);
    }

    fn logo(&self) -> &str {
        (**self).logo()
    }

    fn set_logo(&mut self, src: &str) {
        (**self).set_logo(src);
    }
}
