use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub value: String,
    pub on_change: Callback<String>,
}

/// Search input over the user list. Every keystroke is reported as-is; the
/// caller fires one fetch per change.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="search-field">
            <input
                type="search"
                placeholder="Search"
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}
