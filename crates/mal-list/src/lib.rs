//! Categorized MyAnimeList media lists.
//!
//! Builds an immutable, status-partitioned view of a user's anime or manga
//! list from already-parsed entries.

pub mod error;
pub mod identity;
pub mod media_list;
pub mod report;

pub use error::{InvalidCategoryError, StatusAxis};
pub use identity::{ItemKey, MediaItem};
pub use media_list::{CategorizedMediaList, Category};
pub use report::ListReport;
