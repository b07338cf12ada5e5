use tracing::{debug, info, warn};

use crate::event::{Outcome, UiEvent};
use crate::portfolio::PortfolioView;
use crate::prompt::{self, Prompter};
use crate::stock::{DEFAULT_LOGO, StockRepo, StockRepoExt, logo_path};
use crate::user::{UserId, UserRepo, UserRepoExt};
use crate::view::{DirectoryView, FormFields, ListEntry, StockDetail};

/// The directory controller. Owns both collections, the page it renders into
/// and the dialog capability used for notices and confirmations.
#[derive(Debug)]
pub struct Directory<V, P> {
    users: UserRepo,
    stocks: StockRepo,
    view: V,
    prompter: P,
}

impl<V, P> Directory<V, P>
where
    V: DirectoryView,
    P: Prompter,
{
    pub fn new(users: UserRepo, stocks: StockRepo, view: V, prompter: P) -> Self {
        Self {
            users,
            stocks,
            view,
            prompter,
        }
    }

    /// Initial render of the page.
    pub fn start(&mut self) {
        info!(
            "Directory started with {} users and {} stocks",
            self.users.len(),
            self.stocks.len()
        );
        self.render_user_list();
        self.view.render_portfolio(&PortfolioView::empty());
    }

    #[must_use]
    pub fn users(&self) -> &UserRepo {
        &self.users
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Routes a page event to its handler.
    pub fn dispatch(&mut self, event: UiEvent) -> Outcome {
        debug!("Dispatching {event:?}");
        match event {
            UiEvent::UserClicked(id) => self.select_user(&id),
            UiEvent::ViewStock(symbol) => self.view_stock(&symbol),
            UiEvent::Save => self.save_user(),
            UiEvent::Delete => self.delete_user(),
            UiEvent::LogoLoadFailed(src) => self.logo_load_failed(&src),
        }
    }

    /// Replaces the user list with one `lastname, firstname` entry per user.
    pub fn render_user_list(&mut self) {
        let entries: Vec<ListEntry> = self.users.values().map(ListEntry::for_user).collect();
        debug!("Rendering {} user list entries", entries.len());
        self.view.render_user_list(&entries);
    }

    /// Fills the form and portfolio for `id`. Unknown ids leave the page as is.
    pub fn select_user(&mut self, id: &UserId) -> Outcome {
        let Some(user) = self.users.find_user(id) else {
            debug!("Ignoring click on unknown user {id}");
            return Outcome::NotFound;
        };

        self.view.set_form(FormFields::for_user(user));
        self.view
            .render_portfolio(&PortfolioView::for_portfolio(&user.portfolio));
        debug!("Selected user {id}");
        Outcome::Applied
    }

    /// Rebuilds the portfolio area for `id` from scratch.
    pub fn render_portfolio(&mut self, id: &UserId) -> Outcome {
        match self.users.find_user(id) {
            Some(user) => {
                self.view
                    .render_portfolio(&PortfolioView::for_portfolio(&user.portfolio));
                Outcome::Applied
            }
            None => Outcome::NotFound,
        }
    }

    /// Shows the stock panel for `symbol`, or the placeholder if it is unknown.
    pub fn view_stock(&mut self, symbol: &str) -> Outcome {
        match self.stocks.find_stock(symbol) {
            Some(stock) => {
                self.view.set_stock_detail(StockDetail::for_stock(stock));
                self.view.set_logo(&logo_path(symbol));
                Outcome::Applied
            }
            None => {
                warn!("No stock record for symbol {symbol}");
                self.view.set_stock_detail(StockDetail::not_found());
                self.view.set_logo(DEFAULT_LOGO);
                Outcome::NotFound
            }
        }
    }

    /// Falls back to the default logo when the page could not load `src`.
    pub fn logo_load_failed(&mut self, src: &str) -> Outcome {
        if src == DEFAULT_LOGO || self.view.logo() != src {
            return Outcome::Ignored;
        }
        debug!("Logo {src} failed to load, using default");
        self.view.set_logo(DEFAULT_LOGO);
        Outcome::Applied
    }

    /// Writes the form's profile fields into the selected user.
    pub fn save_user(&mut self) -> Outcome {
        let form = self.view.form();
        let Some(id) = form.selection() else {
            self.prompter.notify(prompt::SELECT_USER_FIRST);
            return Outcome::NoSelection;
        };

        if !self.users.update_profile(&id, form.to_profile()) {
            warn!("Save requested for unknown user {id}");
            return Outcome::NotFound;
        }

        info!("Saved user {id}");
        self.render_user_list();
        Outcome::Applied
    }

    /// Removes the selected user after confirmation and clears the form.
    pub fn delete_user(&mut self) -> Outcome {
        let Some(id) = self.view.form().selection() else {
            self.prompter.notify(prompt::SELECT_USER_FIRST);
            return Outcome::NoSelection;
        };

        let Some(user) = self.users.find_user(&id) else {
            warn!("Delete requested for unknown user {id}");
            return Outcome::NotFound;
        };

        let message = prompt::delete_confirmation(&user.profile);
        if !self.prompter.confirm(&message) {
            debug!("Deletion of user {id} cancelled");
            return Outcome::Cancelled;
        }

        if self.users.delete_user(&id).is_none() {
            return Outcome::NotFound;
        }
        info!("Deleted user {id}");

        self.view.reset_form();
        self.view.render_portfolio(&PortfolioView::empty());
        self.render_user_list();
        Outcome::Applied
    }
}
