pub mod fetch_seq;
pub mod use_selected_user;
pub mod use_users;

pub use fetch_seq::FetchSeq;
pub use use_selected_user::use_selected_user;
pub use use_users::use_users;
