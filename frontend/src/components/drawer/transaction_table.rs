use shared::{AmountType, Transaction};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="transactions-table">
                <thead>
                    <tr>
                        <th>{"Type"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Date"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.transactions.iter().map(|tx| {
                        let amount_class = match tx.amount_type() {
                            AmountType::Positive => "amount positive",
                            AmountType::Negative => "amount negative",
                        };
                        html! {
                            <tr>
                                <td class="kind">{tx.kind_label()}</td>
                                <td class={amount_class}>{tx.formatted_amount()}</td>
                                <td class="date">{tx.formatted_date()}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
