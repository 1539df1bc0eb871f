//! Text output of the command line client

use std::fmt::Write;

use api_client::models::{
    Agency, Comment, MediaItem, Notification, Page, Report, StatsSummary, User, Wallet,
    WalletTransaction,
};
use model::VoteState;
use report_client::vote::{IgnoreReason, VoteOutcome};

pub fn report_line(report: &Report) -> String {
    format!(
        "#{} [{}] {} ({}) +{} -{}",
        report.id,
        report.status.label(),
        report.title,
        report.category,
        report.upvote_count,
        report.downvote_count,
    )
}

pub fn report_details(report: &Report, comments: &[Comment], media: &[MediaItem]) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "#{} {}", report.id, report.title);
    let _ = writeln!(
        text,
        "Status: {} ({})",
        report.status.label(),
        report.status.color()
    );
    let _ = writeln!(
        text,
        "Category: {} (icon: {}, color: {})",
        report.category,
        report.category.icon_name(),
        report.category.color()
    );
    if let Some(address) = &report.address {
        let _ = writeln!(text, "Address: {}", address);
    }
    let _ = writeln!(text, "Location: {:.5}, {:.5}", report.latitude, report.longitude);
    let _ = writeln!(text, "Created: {}", report.created_at.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(text, "Votes: {}", report.vote_state());
    let _ = writeln!(text);
    let _ = writeln!(text, "{}", report.description);

    if !media.is_empty() {
        let _ = writeln!(text);
        let _ = writeln!(text, "Media:");
        for item in media {
            let _ = write!(text, "  {} {}", item.content_type, item.url);
            if let Some(summary) = &item.analysis_summary {
                let _ = write!(text, " ({})", summary);
            }
            let _ = writeln!(text);
        }
    }

    if !comments.is_empty() {
        let _ = writeln!(text);
        let _ = writeln!(text, "Comments:");
        for comment in comments {
            let _ = writeln!(
                text,
                "  {} {}: {}",
                comment.created_at.format("%Y-%m-%d %H:%M"),
                comment.author_name,
                comment.content
            );
        }
    }
    text
}

pub fn vote_outcome(outcome: &VoteOutcome, state: VoteState) -> String {
    match outcome {
        VoteOutcome::Committed(_) => format!("Vote saved. {}", state),
        VoteOutcome::RolledBack { .. } => format!("Voting failed. {}", state),
        VoteOutcome::Ignored(IgnoreReason::Disabled) => {
            "Voting is closed for this report.".to_string()
        }
        VoteOutcome::Ignored(IgnoreReason::Pending) => {
            "Previous vote is still being sent.".to_string()
        }
        VoteOutcome::Discarded => format!("Report was refreshed. {}", state),
    }
}

pub fn page_footer<T>(page: &Page<T>) -> String {
    match page.next_page() {
        Some(next) => format!(
            "Page {} of {} items. Next page: --page {}",
            page.page, page.total, next
        ),
        None => format!("Page {} of {} items.", page.page, page.total),
    }
}

pub fn wallet(wallet: &Wallet, transactions: &[WalletTransaction]) -> String {
    let mut text = format!(
        "Balance: {} points (lifetime {})\n",
        wallet.balance, wallet.lifetime_points
    );
    for t in transactions {
        let _ = writeln!(
            text,
            "  {} {:+} {}",
            t.created_at.format("%Y-%m-%d"),
            t.amount,
            t.description
        );
    }
    text
}

pub fn notification_line(notification: &Notification) -> String {
    let marker = if notification.is_read { ' ' } else { '*' };
    format!(
        "{} #{} {}: {}",
        marker, notification.id, notification.title, notification.message
    )
}

pub fn stats(stats: &StatsSummary) -> String {
    format!(
        "Reports: {}\nResolved: {}\nIn progress: {}\nPending: {}\nResolution rate: {:.1} %",
        stats.total_reports,
        stats.resolved_reports,
        stats.in_progress_reports,
        stats.pending_reports,
        stats.resolution_rate * 100.0,
    )
}

pub fn agency(agency: &Agency) -> String {
    let mut text = format!("#{} {}", agency.id, agency.name);
    if let Some(email) = &agency.contact_email {
        let _ = write!(text, " <{}>", email);
    }
    if !agency.categories.is_empty() {
        let categories: Vec<&str> = agency.categories.iter().map(|c| c.as_str()).collect();
        let _ = write!(text, " [{}]", categories.join(", "));
    }
    text
}

pub fn user(user: &User) -> String {
    let mut text = format!("{} <{}>", user.full_name, user.email);
    if let Some(phone) = &user.phone {
        let _ = write!(text, " {}", phone);
    }
    text
}
