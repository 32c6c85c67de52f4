use shared::{Transaction, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::FetchSeq;
use crate::services::api::ApiClient;

/// Drawer state: the selected user, their transaction history, and whether
/// the panel is visible. Closing the drawer keeps the data around until the
/// next selection replaces it.
#[derive(Clone, PartialEq)]
pub struct SelectedUserState {
    pub user: Option<User>,
    pub transactions: Vec<Transaction>,
    pub drawer_open: bool,
}

pub struct UseSelectedUserResult {
    pub state: SelectedUserState,
    pub actions: UseSelectedUserActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSelectedUserActions {
    pub select_user: Callback<User>,
    pub close_drawer: Callback<()>,
}

#[hook]
pub fn use_selected_user(api_client: &ApiClient) -> UseSelectedUserResult {
    let user = use_state(|| Option::<User>::None);
    let transactions = use_state(Vec::<Transaction>::new);
    let drawer_open = use_state(|| false);
    // Guards rapid successive row clicks: only the newest selection's
    // response may replace the transaction list.
    let fetch_seq = (*use_memo((), |_| FetchSeq::new())).clone();

    // The drawer opens only once the clicked user's transactions have
    // arrived; until then the previous contents stay untouched.
    let select_user = {
        let api_client = api_client.clone();
        let user = user.clone();
        let transactions = transactions.clone();
        let drawer_open = drawer_open.clone();
        let fetch_seq = fetch_seq.clone();

        Callback::from(move |clicked: User| {
            let api_client = api_client.clone();
            let user = user.clone();
            let transactions = transactions.clone();
            let drawer_open = drawer_open.clone();
            let fetch_seq = fetch_seq.clone();

            let seq = fetch_seq.begin();

            user.set(Some(clicked.clone()));
            spawn_local(async move {
                match api_client.fetch_transactions(&clicked.id).await {
                    Ok(list) => {
                        if fetch_seq.is_current(seq) {
                            transactions.set(list);
                            drawer_open.set(true);
                        }
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch transactions:", e);
                    }
                }
            });
        })
    };

    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| {
            drawer_open.set(false);
        })
    };

    UseSelectedUserResult {
        state: SelectedUserState {
            user: (*user).clone(),
            transactions: (*transactions).clone(),
            drawer_open: *drawer_open,
        },
        actions: UseSelectedUserActions {
            select_user,
            close_drawer,
        },
    }
}
