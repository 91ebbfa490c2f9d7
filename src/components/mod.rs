//! UI components grouped by feature domain.
pub mod common;

mod title_bar;
mod status_bar;
mod player_panel;
mod annotation_list;

pub use title_bar::TitleBar;
pub use status_bar::StatusBar;
pub use player_panel::PlayerPanel;
pub use annotation_list::AnnotationList;
