use shared::{SortColumn, SortDirection, SortSpec, User};
use yew::prelude::*;

const COLUMNS: [(SortColumn, &str); 5] = [
    (SortColumn::Email, "Email"),
    (SortColumn::Name, "Name"),
    (SortColumn::Role, "Role"),
    (SortColumn::Subscription, "Subscription"),
    (SortColumn::Tokens, "Tokens"),
];

#[derive(Properties, PartialEq)]
pub struct UserTableProps {
    /// Rows already ordered by the active sort spec.
    pub users: Vec<User>,
    pub sort: SortSpec,
    pub loading: bool,
    pub on_sort: Callback<SortColumn>,
    pub on_row_click: Callback<User>,
}

#[function_component(UserTable)]
pub fn user_table(props: &UserTableProps) -> Html {
    if props.loading && props.users.is_empty() {
        return html! { <div class="loading">{"Loading users..."}</div> };
    }

    html! {
        <div class="table-container">
            <table class="users-table">
                <thead>
                    <tr>
                        {for COLUMNS.iter().map(|&(column, label)| {
                            let onclick = {
                                let on_sort = props.on_sort.clone();
                                Callback::from(move |_| on_sort.emit(column))
                            };
                            let indicator = if props.sort.column == column {
                                match props.sort.direction {
                                    SortDirection::Asc => " \u{25b2}",
                                    SortDirection::Desc => " \u{25bc}",
                                }
                            } else {
                                ""
                            };
                            html! {
                                <th class="sortable" {onclick}>{label}{indicator}</th>
                            }
                        })}
                        <th class="actions">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.users.iter().map(|user| {
                        let onclick = {
                            let on_row_click = props.on_row_click.clone();
                            let user = user.clone();
                            Callback::from(move |_| on_row_click.emit(user.clone()))
                        };
                        html! {
                            <tr class="user-row" {onclick}>
                                <td class="email">{&user.email}</td>
                                <td>{&user.name}</td>
                                <td>{&user.role}</td>
                                <td>{&user.subscription.plan.plan_type}</td>
                                <td class="tokens">{user.subscription.tokens}</td>
                                <td class="actions">
                                    <span class="action-icon" title="Edit">{"\u{270e}"}</span>
                                    <span class="action-icon" title="Delete">{"\u{1f5d1}"}</span>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_data_columns_are_sortable() {
        // The Actions column is rendered outside COLUMNS and never takes
        // part in sorting.
        assert_eq!(COLUMNS.len(), 5);
        assert!(COLUMNS.iter().all(|&(_, label)| label != "Actions"));
    }
}
