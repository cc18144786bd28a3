//! Shared utilities - progress bars, terminal styling, path handling

mod paths;
mod progress;
mod styling;

pub use paths::ensure_absolute;
pub use progress::{
    create_progress_bar, create_spinner, finish_with_success, finish_with_warning,
};
pub use styling::{print_banner, print_info, print_success};
