use shared::{sort_users, SortColumn, SortSpec, TableQuery, User, UserListResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::FetchSeq;
use crate::services::api::ApiClient;

/// Page count shown by the pagination control: the `pages` value from the
/// last successful response, floored at one page.
fn page_count(response: &UserListResponse) -> u32 {
    response.pages.max(1)
}

/// View state of the user table: the query sent to the server, the sort
/// applied client-side to the loaded page, and the last response's contents.
#[derive(Clone, PartialEq)]
pub struct UsersState {
    pub users: Vec<User>,
    pub total_pages: u32,
    pub query: TableQuery,
    pub sort: SortSpec,
    pub loading: bool,
}

impl UsersState {
    /// The loaded page ordered by the current sort spec.
    pub fn sorted_users(&self) -> Vec<User> {
        let mut rows = self.users.clone();
        sort_users(&mut rows, self.sort);
        rows
    }
}

pub struct UseUsersResult {
    pub state: UsersState,
    pub actions: UseUsersActions,
}

#[derive(Clone, PartialEq)]
pub struct UseUsersActions {
    pub set_page: Callback<u32>,
    pub set_search: Callback<String>,
    pub toggle_sort: Callback<SortColumn>,
}

#[hook]
pub fn use_users(api_client: &ApiClient) -> UseUsersResult {
    let users = use_state(Vec::<User>::new);
    let total_pages = use_state(|| 1u32);
    let query = use_state(TableQuery::default);
    let sort = use_state(SortSpec::default);
    let loading = use_state(|| true);
    // A response is applied only if no newer fetch has started since it was
    // issued, so rapid search keystrokes cannot leave a stale page on screen.
    let fetch_seq = (*use_memo((), |_| FetchSeq::new())).clone();

    // Refetch on mount and whenever the page or search text changes. Each
    // keystroke fires exactly one request; there is no debounce.
    {
        let api_client = api_client.clone();
        let users = users.clone();
        let total_pages = total_pages.clone();
        let loading = loading.clone();
        let fetch_seq = fetch_seq.clone();

        use_effect_with((*query).clone(), move |query| {
            let query = query.clone();
            let seq = fetch_seq.begin();

            spawn_local(async move {
                loading.set(true);
                match api_client.fetch_users(query.page, &query.search).await {
                    Ok(response) => {
                        if fetch_seq.is_current(seq) {
                            total_pages.set(page_count(&response));
                            users.set(response.data);
                            loading.set(false);
                        }
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch users:", e);
                        if fetch_seq.is_current(seq) {
                            loading.set(false);
                        }
                    }
                }
            });

            || ()
        });
    }

    let set_page = {
        let query = query.clone();
        Callback::from(move |page: u32| {
            query.set(query.with_page(page));
        })
    };

    let set_search = {
        let query = query.clone();
        Callback::from(move |search: String| {
            query.set(query.with_search(search));
        })
    };

    let toggle_sort = {
        let sort = sort.clone();
        Callback::from(move |column: SortColumn| {
            sort.set(sort.toggled(column));
        })
    };

    UseUsersResult {
        state: UsersState {
            users: (*users).clone(),
            total_pages: *total_pages,
            query: (*query).clone(),
            sort: *sort,
            loading: *loading,
        },
        actions: UseUsersActions {
            set_page,
            set_search,
            toggle_sort,
        },
    }
}
