//! UI Components
//!
//! Reusable Leptos components.

mod title_bar;
mod dashboard;
mod flash_banner;
mod login_form;
mod filter_bar;
mod tag_autocomplete;
mod type_selector;
mod workspace_tab_bar;
mod model_list;
mod model_card;
mod new_model_form;
mod model_detail;
mod comparison_view;
mod workspace_panel;
mod delete_confirm_button;

pub use title_bar::TitleBar;
pub use dashboard::Dashboard;
pub use flash_banner::FlashBanner;
pub use login_form::LoginForm;
pub use filter_bar::FilterBar;
pub use tag_autocomplete::{fuzzy_match, TagAutocomplete};
pub use type_selector::{ChoiceSelect, MODEL_STATUSES, MODEL_TYPES};
pub use workspace_tab_bar::WorkspaceTabBar;
pub use model_list::ModelList;
pub use model_card::ModelCard;
pub use new_model_form::NewModelForm;
pub use model_detail::ModelDetail;
pub use comparison_view::ComparisonView;
pub use workspace_panel::WorkspacePanel;
pub use delete_confirm_button::DeleteConfirmButton;

/// Split comma-separated input into list entries
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
