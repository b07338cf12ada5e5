// Re-export the dialog capability for domain use
pub use prompt_adapter::{Prompter, ScriptedPrompter, TerminalPrompter, stdin_lines};

use crate::user::Profile;

pub const SELECT_USER_FIRST: &str = "Select a user first";

#[must_use]
pub fn delete_confirmation(profile: &Profile) -> String {
    format!(
        "Are you sure you want to delete user: {}?",
        profile.full_name()
    )
}
