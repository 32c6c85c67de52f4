use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// 1-based current page
    pub page: u32,
    /// `pages` from the last successful user-list response
    pub total_pages: u32,
    pub on_page_change: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    html! {
        <nav class="pagination">
            {for (1..=props.total_pages).map(|page| {
                let onclick = {
                    let on_page_change = props.on_page_change.clone();
                    Callback::from(move |_| on_page_change.emit(page))
                };
                let class = if page == props.page {
                    "page-button active"
                } else {
                    "page-button"
                };
                html! {
                    <button {class} {onclick}>{page}</button>
                }
            })}
        </nav>
    }
}
