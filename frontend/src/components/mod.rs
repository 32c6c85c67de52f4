pub mod drawer;
pub mod header;
pub mod pagination;
pub mod search_bar;
pub mod user_table;

pub use drawer::UserDrawer;
pub use header::Header;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
pub use user_table::UserTable;
