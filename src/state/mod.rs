//! Component state containers.
//!
//! - `CarouselState`: hero carousel index and scroll offset
//! - `SearchState`: genre combobox (query, suggestions, highlight, blur timer)
//! - `Session`: read-only viewer display fields
//! - `ListCursor` / `GridCursor`: clamped selections for tables and grids

pub mod carousel;
pub mod cursor;
pub mod search;
pub mod session;

pub use carousel::{CarouselState, Direction};
pub use cursor::{GridCursor, ListCursor};
pub use search::{filter_genres, SearchState, BLUR_GRACE_MS};
pub use session::Session;
