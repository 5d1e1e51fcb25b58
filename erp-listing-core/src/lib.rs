pub mod entity;
pub mod error;
pub mod format;
pub mod host;
pub mod loading;
pub mod navigation;
pub mod pagination;
pub mod records;
pub mod search;
pub mod status;


pub use entity::{EntityKind, ScreenRecord};
pub use error::ListingError;
pub use format::{
    StripOptions, escape_html, page_summary, strip_to_html, strip_to_html_with, strip_to_text,
};
pub use host::{ContainerHost, DetachedHost, StripHost};
pub use loading::{LoadSequence, LoadTicket};
pub use navigation::{NavAction, NavControl, NavStrip, WINDOW_WIDTH, page_window};
pub use pagination::{
    DEFAULT_CONTROLS_TARGET, PAGE_SIZE, Paginator, RenderFn, page_range, total_pages,
};
pub use records::{load_records, parse_records};
pub use search::{FilteredList, ListQuery, NO_RESULTS_MESSAGE, Searchable};
pub use status::Badge;
