pub mod transaction_table;
pub mod usage_chart;

pub use transaction_table::TransactionTable;
pub use usage_chart::UsageChart;

use shared::{Transaction, User};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserDrawerProps {
    pub open: bool,
    pub user: Option<User>,
    pub transactions: Vec<Transaction>,
    pub on_close: Callback<()>,
}

/// Slide-in side panel with the selected user's token-usage chart and
/// transaction history. The contents persist while the drawer is closed and
/// are replaced on the next selection.
#[function_component(UserDrawer)]
pub fn user_drawer(props: &UserDrawerProps) -> Html {
    let Some(user) = &props.user else {
        return html! {};
    };

    let class = if props.open { "drawer open" } else { "drawer" };
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <aside {class}>
            <div class="drawer-header">
                <span class="drawer-email">{&user.email}</span>
                <button class="drawer-close" {onclick}>{"\u{00d7}"}</button>
            </div>
            <h2 class="drawer-title">{"Token Usage"}</h2>
            <UsageChart
                transactions={props.transactions.clone()}
                label={user.email.clone()}
            />
            <h2 class="drawer-title">{"Transaction History"}</h2>
            <TransactionTable transactions={props.transactions.clone()} />
        </aside>
    }
}
