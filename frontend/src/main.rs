mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::{Header, Pagination, SearchBar, UserDrawer, UserTable};
use hooks::{use_selected_user, use_users};
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let users = use_users(&api_client);
    let selected = use_selected_user(&api_client);

    html! {
        <div class="app">
            <Header />
            <UserDrawer
                open={selected.state.drawer_open}
                user={selected.state.user.clone()}
                transactions={selected.state.transactions.clone()}
                on_close={selected.actions.close_drawer.clone()}
            />
            <section class="main-panel">
                <h2 class="panel-title">{"Users"}</h2>
                <SearchBar
                    value={users.state.query.search.clone()}
                    on_change={users.actions.set_search.clone()}
                />
                <UserTable
                    users={users.state.sorted_users()}
                    sort={users.state.sort}
                    loading={users.state.loading}
                    on_sort={users.actions.toggle_sort.clone()}
                    on_row_click={selected.actions.select_user.clone()}
                />
                <Pagination
                    page={users.state.query.page}
                    total_pages={users.state.total_pages}
                    on_page_change={users.actions.set_page.clone()}
                />
            </section>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
