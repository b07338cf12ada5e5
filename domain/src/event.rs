use crate::user::UserId;

/// Everything the page can report to the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A user list entry was clicked.
    UserClicked(UserId),
    /// A portfolio row's `View` action was clicked.
    ViewStock(String),
    Save,
    Delete,
    /// The page could not load the logo at `src`.
    LogoLoadFailed(String),
}

/// What a handler did with an event. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The identifier or symbol did not match any record.
    NotFound,
    /// Save or delete without a selected user; a notice was shown.
    NoSelection,
    /// The operator declined the confirmation.
    Cancelled,
    /// Nothing to do, e.g. a stale logo failure.
    Ignored,
}
