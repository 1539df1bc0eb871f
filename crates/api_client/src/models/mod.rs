pub mod agency;
pub use self::agency::Agency;
pub mod auth;
pub use self::auth::{LoginRequest, LoginResponse};
pub mod comment;
pub use self::comment::{Comment, NewComment};
pub mod error_body;
pub use self::error_body::ErrorBody;
pub mod media;
pub use self::media::MediaItem;
pub mod notification;
pub use self::notification::{Notification, NotificationKind, UnreadCount};
pub mod page;
pub use self::page::Page;
pub mod report;
pub use self::report::{NewReport, Report, ReportFilter, VoteRequest};
pub mod stats;
pub use self::stats::StatsSummary;
pub mod user;
pub use self::user::{UpdateUser, User};
pub mod wallet;
pub use self::wallet::{TransactionKind, Wallet, WalletTransaction};
