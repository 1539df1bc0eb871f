use chrono::{DateTime, Utc};
use model::{ReportId, WalletTransactionId};
use serde::{Deserialize, Serialize};

/// Reward points of the current user. Points are calculated
/// by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: i64,
    pub lifetime_points: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Earned,
    Redeemed,
    #[serde(other)]
    Adjustment,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub id: WalletTransactionId,
    pub kind: TransactionKind,
    /// Negative for redeemed points
    pub amount: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<ReportId>,
    pub created_at: DateTime<Utc>,
}
