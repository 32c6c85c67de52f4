use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A member of the organization as returned by the user listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub subscription: Subscription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub plan: Plan,
    /// Remaining token balance on the subscription
    pub tokens: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Subscription tier label, e.g. "PRO"
    #[serde(rename = "type")]
    pub plan_type: String,
}

/// One page of the user listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub data: Vec<User>,
    /// Total page count reported by the server
    pub pages: u32,
}

/// Transaction type tag from the wire. Anything that is not a write-off is
/// treated as a top-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "WRITE_OFF")]
    WriteOff,
    #[serde(other, rename = "REPLENISH")]
    Replenish,
}

/// A single entry in a user's transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    /// RFC 3339 timestamp string
    pub created_at: String,
}

/// Sign classification of an amount for rendering purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountType {
    Positive,
    Negative,
}

impl Transaction {
    pub fn amount_type(&self) -> AmountType {
        match self.kind {
            TransactionKind::WriteOff => AmountType::Negative,
            TransactionKind::Replenish => AmountType::Positive,
        }
    }

    /// Signed amount with the token currency unit, e.g. "-20 BTKN".
    pub fn formatted_amount(&self) -> String {
        match self.kind {
            TransactionKind::WriteOff => format!("-{} BTKN", self.amount),
            TransactionKind::Replenish => format!("+{} BTKN", self.amount),
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            TransactionKind::WriteOff => "Write-off",
            TransactionKind::Replenish => "Top-up",
        }
    }

    /// Timestamp formatted as "YYYY-MM-DD, HH:MM:SS"; falls back to the raw
    /// string when it does not parse as RFC 3339.
    pub fn formatted_date(&self) -> String {
        match chrono::DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(dt) => dt.format("%Y-%m-%d, %H:%M:%S").to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}

/// Columns of the user table that can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Email,
    Name,
    Role,
    Subscription,
    Tokens,
}

impl SortColumn {
    fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            SortColumn::Email => a.email.cmp(&b.email),
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::Role => a.role.cmp(&b.role),
            SortColumn::Subscription => a
                .subscription
                .plan
                .plan_type
                .cmp(&b.subscription.plan.plan_type),
            SortColumn::Tokens => a.subscription.tokens.cmp(&b.subscription.tokens),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Current sort key and direction of the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: SortColumn::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    /// Column-header click transition: clicking the active ascending column
    /// flips it to descending, anything else selects that column ascending.
    pub fn toggled(self, column: SortColumn) -> Self {
        let direction = if self.column == column && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { column, direction }
    }
}

/// Stable sort of the currently loaded page. Descending order is the exact
/// reverse of ascending (comparator negation), so equal keys keep their
/// relative order under both directions.
pub fn sort_users(users: &mut [User], spec: SortSpec) {
    users.sort_by(|a, b| {
        let ord = spec.column.compare(a, b);
        match spec.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Server-side query parameters of the user table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    /// 1-based page number
    pub page: u32,
    pub search: String,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
        }
    }
}

impl TableQuery {
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            search: self.search.clone(),
        }
    }

    /// Changing the search text returns to the first page so the page number
    /// stays within the new result set's bounds.
    pub fn with_search(&self, search: String) -> Self {
        Self { page: 1, search }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, name: &str, plan: &str, tokens: i64) -> User {
        User {
            id: format!("id-{}", email),
            email: email.to_string(),
            name: name.to_string(),
            role: "USER".to_string(),
            subscription: Subscription {
                plan: Plan {
                    plan_type: plan.to_string(),
                },
                tokens,
            },
        }
    }

    #[test]
    fn tokens_sort_orders_by_nested_balance() {
        let mut users = vec![user("b@x.com", "b", "PRO", 10), user("a@x.com", "a", "FREE", 5)];

        sort_users(
            &mut users,
            SortSpec {
                column: SortColumn::Tokens,
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(users[0].email, "a@x.com");

        sort_users(
            &mut users,
            SortSpec {
                column: SortColumn::Tokens,
                direction: SortDirection::Desc,
            },
        );
        assert_eq!(users[0].email, "b@x.com");
    }

    #[test]
    fn subscription_sort_uses_plan_type() {
        let mut users = vec![user("a@x.com", "a", "PRO", 1), user("b@x.com", "b", "FREE", 2)];
        sort_users(
            &mut users,
            SortSpec {
                column: SortColumn::Subscription,
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(users[0].subscription.plan.plan_type, "FREE");
    }

    #[test]
    fn toggling_same_column_flips_direction() {
        let spec = SortSpec::default();
        let first = spec.toggled(SortColumn::Tokens);
        assert_eq!(first.column, SortColumn::Tokens);
        assert_eq!(first.direction, SortDirection::Asc);

        let second = first.toggled(SortColumn::Tokens);
        assert_eq!(second.direction, SortDirection::Desc);

        // A third click starts over ascending.
        let third = second.toggled(SortColumn::Tokens);
        assert_eq!(third.direction, SortDirection::Asc);
    }

    #[test]
    fn toggling_other_column_starts_ascending() {
        let spec = SortSpec {
            column: SortColumn::Email,
            direction: SortDirection::Desc,
        };
        let next = spec.toggled(SortColumn::Role);
        assert_eq!(next.column, SortColumn::Role);
        assert_eq!(next.direction, SortDirection::Asc);
    }

    #[test]
    fn descending_is_exact_reverse_for_equal_keys() {
        let mut users = vec![
            user("a@x.com", "same", "PRO", 1),
            user("b@x.com", "same", "PRO", 2),
        ];
        sort_users(
            &mut users,
            SortSpec {
                column: SortColumn::Name,
                direction: SortDirection::Asc,
            },
        );
        let asc: Vec<_> = users.iter().map(|u| u.email.clone()).collect();

        sort_users(
            &mut users,
            SortSpec {
                column: SortColumn::Name,
                direction: SortDirection::Desc,
            },
        );
        let desc: Vec<_> = users.iter().map(|u| u.email.clone()).collect();

        // Equal-keyed rows keep their relative order in both directions.
        assert_eq!(asc, desc);
    }

    #[test]
    fn search_change_resets_page() {
        let query = TableQuery::default().with_page(4);
        assert_eq!(query.page, 4);

        let searched = query.with_search("ann".to_string());
        assert_eq!(searched.page, 1);
        assert_eq!(searched.search, "ann");

        // Page changes keep the search text.
        let paged = searched.with_page(2);
        assert_eq!(paged.search, "ann");
        assert_eq!(paged.page, 2);
    }

    #[test]
    fn write_off_renders_negative() {
        let tx = Transaction {
            kind: TransactionKind::WriteOff,
            amount: 20.0,
            created_at: "2024-03-01T10:30:00Z".to_string(),
        };
        assert_eq!(tx.formatted_amount(), "-20 BTKN");
        assert_eq!(tx.amount_type(), AmountType::Negative);
        assert_eq!(tx.kind_label(), "Write-off");
    }

    #[test]
    fn replenish_renders_positive() {
        let tx = Transaction {
            kind: TransactionKind::Replenish,
            amount: 7.5,
            created_at: "2024-03-01T10:30:00Z".to_string(),
        };
        assert_eq!(tx.formatted_amount(), "+7.5 BTKN");
        assert_eq!(tx.amount_type(), AmountType::Positive);
    }

    #[test]
    fn transaction_date_formats_for_display() {
        let tx = Transaction {
            kind: TransactionKind::WriteOff,
            amount: 1.0,
            created_at: "2024-03-01T10:30:05+00:00".to_string(),
        };
        assert_eq!(tx.formatted_date(), "2024-03-01, 10:30:05");

        let bad = Transaction {
            created_at: "not-a-date".to_string(),
            ..tx
        };
        assert_eq!(bad.formatted_date(), "not-a-date");
    }

    #[test]
    fn user_list_response_parses_wire_format() {
        let json = r#"{
            "data": [{
                "id": "u1",
                "email": "a@x.com",
                "name": "Ann",
                "role": "ADMIN",
                "subscription": {"plan": {"type": "PRO"}, "tokens": 540}
            }],
            "pages": 7
        }"#;
        let response: UserListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.pages, 7);
        assert_eq!(response.data[0].subscription.plan.plan_type, "PRO");
        assert_eq!(response.data[0].subscription.tokens, 540);
    }

    #[test]
    fn unknown_transaction_type_is_a_top_up() {
        let json = r#"[
            {"type": "WRITE_OFF", "amount": 20, "created_at": "2024-03-01T10:30:00Z"},
            {"type": "REPLENISH", "amount": 100, "created_at": "2024-03-02T09:00:00Z"},
            {"type": "BONUS", "amount": 5, "created_at": "2024-03-03T09:00:00Z"}
        ]"#;
        let transactions: Vec<Transaction> = serde_json::from_str(json).unwrap();
        assert_eq!(transactions[0].kind, TransactionKind::WriteOff);
        assert_eq!(transactions[1].kind, TransactionKind::Replenish);
        assert_eq!(transactions[2].kind, TransactionKind::Replenish);
    }
}
