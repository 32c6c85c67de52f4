use gloo::net::http::Request;
use shared::{Transaction, UserListResponse};

use crate::services::routes;

/// Fallback when no base URL is baked in at build time.
const DEFAULT_BASE_URL: &str = "https://test.gefara.xyz/api/v1";

/// API client for the remote dashboard backend.
///
/// Failures come back as strings and are surfaced by callers on the browser
/// console; there is no retry and no fallback UI state.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client bound to the `API_BASE_URL` compile-time environment
    /// variable, or the default test server when unset.
    pub fn new() -> Self {
        Self {
            base_url: option_env!("API_BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// URL of one user-list page. The search text is forwarded verbatim,
    /// unescaped: reserved URL characters become part of the raw query
    /// string, which is what the server's contract expects.
    fn users_url(&self, page: u32, search: &str) -> String {
        let mut url = format!("{}{}?page={}", self.base_url, routes::USER_LIST, page);
        if !search.is_empty() {
            url.push_str("&search=");
            url.push_str(search);
        }
        url
    }

    fn transactions_url(&self, user_id: &str) -> String {
        format!(
            "{}{}/{}/transactions",
            self.base_url,
            routes::USER,
            user_id
        )
    }

    /// Fetch one page of users. `search` is only sent when non-empty.
    pub async fn fetch_users(&self, page: u32, search: &str) -> Result<UserListResponse, String> {
        let url = self.users_url(page, search);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<UserListResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse user list: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch users: {}", e)),
        }
    }

    /// Fetch the full transaction history of one user (no pagination).
    pub async fn fetch_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, String> {
        let url = self.transactions_url(user_id);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<Vec<Transaction>>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse transactions: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch transactions: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
