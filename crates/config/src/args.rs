//! Config given as command line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use model::{ReportCategory, ReportStatus, VoteIntent};
use url::Url;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct ArgsConfig {
    /// Directory for config file. Current working directory is the default.
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Override API base URL from config file
    #[arg(long, value_name = "URL")]
    pub api_url: Option<Url>,

    /// Login email
    #[arg(long, env = "CIVIC_REPORT_EMAIL")]
    pub email: Option<String>,

    /// Login password
    #[arg(long, env = "CIVIC_REPORT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub mode: AppMode,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AppMode {
    /// List reports
    Reports(ListReportsArgs),
    /// List reports created by the current user
    MyReports(PageArgs),
    /// Show report with comments and media
    Report(ReportIdArgs),
    /// Create new report
    NewReport(NewReportArgs),
    /// Vote report. Voting again with the same vote retracts the vote.
    Vote(VoteArgs),
    /// Comment report
    Comment(CommentArgs),
    /// Show wallet balance and transactions
    Wallet(PageArgs),
    /// List notifications
    Notifications(NotificationsArgs),
    /// Show report statistics
    Stats,
    /// List agencies or show one agency
    Agencies(AgencyArgs),
    /// Show or update current user profile
    Profile(ProfileArgs),
}

impl AppMode {
    /// Modes which work without login.
    pub fn login_required(&self) -> bool {
        !matches!(self, Self::Stats | Self::Agencies(_))
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page number starting from 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Override page size from config file
    #[arg(long)]
    pub per_page: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct ListReportsArgs {
    #[command(flatten)]
    pub page: PageArgs,

    #[arg(long)]
    pub status: Option<ReportStatus>,

    #[arg(long)]
    pub category: Option<ReportCategory>,
}

#[derive(Args, Debug, Clone)]
pub struct ReportIdArgs {
    pub report_id: i64,
}

#[derive(Args, Debug, Clone)]
pub struct NewReportArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub category: ReportCategory,

    #[arg(long, allow_hyphen_values = true)]
    pub latitude: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub longitude: f64,

    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct VoteArgs {
    pub report_id: i64,

    /// "up" or "down"
    pub intent: VoteIntent,
}

#[derive(Args, Debug, Clone)]
pub struct CommentArgs {
    pub report_id: i64,

    pub content: String,
}

#[derive(Args, Debug, Clone)]
pub struct NotificationsArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Mark one notification as read
    #[arg(long, value_name = "ID", conflicts_with = "read_all")]
    pub read: Option<i64>,

    /// Mark all notifications as read
    #[arg(long)]
    pub read_all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AgencyArgs {
    pub agency_id: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    #[arg(long)]
    pub full_name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,
}
