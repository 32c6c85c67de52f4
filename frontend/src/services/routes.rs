//! Endpoint paths of the remote API. The exact paths are the server's
//! contract; keeping them in one place makes a contract change a one-line
//! edit.

/// Paginated user listing, takes `page` and optional `search` query params.
pub const USER_LIST: &str = "/user/list";

/// Per-user prefix; transactions live at `{USER}/{id}/transactions`.
pub const USER: &str = "/user";
