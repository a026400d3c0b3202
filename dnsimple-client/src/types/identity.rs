use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account.
///
/// See <https://developer.dnsimple.com/v2/accounts/>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub email: String,
    pub plan_identifier: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Who the current credentials belong to.
///
/// Account tokens authenticate as an account (`user` is `None`), user
/// tokens and basic auth as a user (`account` is `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Whoami {
    pub account: Option<Account>,
    pub user: Option<User>,
}
