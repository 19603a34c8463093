//! UI state for the nugget browsing pages, kept free of any rendering so
//! every transition is testable on its own.

pub mod bookmark;
pub mod drawer;
pub mod loader;
pub mod pagination;
pub mod token;

pub use bookmark::{BookmarkRequest, BookmarkToggle, ToggleStart, toggle_bookmark};
pub use drawer::{DrawerState, RefreshKey};
pub use loader::{
    AreaListPage, JudgeNuggetsPage, LoadOutcome, NuggetListPage, load_areas_of_law,
    load_judge_nuggets, load_personal_nuggets,
};
pub use pagination::{PageQuery, Pagination};
pub use token::{MemoryTokenStore, TokenStore};
