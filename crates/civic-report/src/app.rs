use std::{process::ExitCode, sync::Arc};

use api_client::models::{NewReport, UpdateUser};
use config::{
    Config,
    args::{AppMode, ListReportsArgs, NotificationsArgs, PageArgs, VoteArgs},
};
use error_stack::{Result, ResultExt};
use model::{AgencyId, NotificationId, ReportId};
use report_client::{
    ApiClient, ClientError,
    services::{
        PageRequest, agencies, comments, media, notifications, reports, stats, users, wallet,
    },
    session::Session,
    vote::{VoteControl, VoteOutcome},
};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::output;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Client error")]
    Client,
    #[error("Login required. Use --email and --password.")]
    LoginRequired,
    #[error("Login failed")]
    Login,
}

pub struct CivicReportApp {
    config: Arc<Config>,
}

impl CivicReportApp {
    pub fn new(config: Config) -> Self {
        Self {
            config: config.into(),
        }
    }

    fn init_logging(&self) {
        let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let log_with_timestamp_layer = if self.config.log_timestamp() {
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_filter(filter()),
            )
        } else {
            None
        };

        let log_without_timestamp_layer = if self.config.log_timestamp() {
            None
        } else {
            Some(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr)
                    .with_filter(filter()),
            )
        };

        tracing_subscriber::registry()
            .with(log_with_timestamp_layer)
            .with(log_without_timestamp_layer)
            .init();
    }

    pub async fn run(self) -> ExitCode {
        self.init_logging();

        info!(
            "{} version: {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );

        match self.run_mode().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{:?}", e);
                ExitCode::FAILURE
            }
        }
    }

    async fn run_mode(&self) -> Result<(), AppError> {
        let api = ApiClient::from_config(&self.config).change_context(AppError::Client)?;
        api.print_to_log();
        let mut session = Session::new(api);

        if let Some(credentials) = self.config.credentials() {
            session
                .login(&credentials.email, &credentials.password)
                .await
                .change_context(AppError::Login)?;
        } else if self.config.mode().login_required() {
            return Err(AppError::LoginRequired.into());
        }

        let result = self
            .handle_mode(&session)
            .await
            .change_context(AppError::Client);

        if session.is_logged_in() {
            if let Err(e) = session.logout().await {
                debug!("Logout failed: {:?}", e);
            }
        }

        result
    }

    fn page(&self, args: &PageArgs) -> Result<PageRequest, ClientError> {
        PageRequest::new(args.page, args.per_page.unwrap_or(self.config.per_page()))
    }

    async fn handle_mode(&self, session: &Session) -> Result<(), ClientError> {
        let api = session.api();
        match self.config.mode() {
            AppMode::Reports(args) => self.list_reports(api, args).await,
            AppMode::MyReports(args) => {
                let page = reports::list_my_reports(api, self.page(args)?).await?;
                for report in &page.items {
                    println!("{}", output::report_line(report));
                }
                println!("{}", output::page_footer(&page));
                Ok(())
            }
            AppMode::Report(args) => {
                let id = ReportId::new(args.report_id);
                let comment_page = PageRequest::first(self.config.per_page())?;
                let (report, comments, media) = futures::try_join!(
                    reports::report(api, id),
                    comments::list_comments(api, id, comment_page),
                    media::list_report_media(api, id),
                )?;
                print!("{}", output::report_details(&report, &comments.items, &media));
                Ok(())
            }
            AppMode::NewReport(args) => {
                let report = reports::create_report(
                    api,
                    NewReport {
                        title: args.title.clone(),
                        description: args.description.clone(),
                        category: args.category,
                        latitude: args.latitude,
                        longitude: args.longitude,
                        address: args.address.clone(),
                    },
                )
                .await?;
                println!("Created {}", output::report_line(&report));

                let all_agencies = agencies::list_agencies(api).await?;
                let handling = agencies::agencies_for_category(&all_agencies, report.category);
                if !handling.is_empty() {
                    println!("Agencies handling {} reports:", report.category);
                    for agency in handling {
                        println!("  {}", output::agency(agency));
                    }
                }
                Ok(())
            }
            AppMode::Vote(args) => self.vote(api, args).await,
            AppMode::Comment(args) => {
                let comment =
                    comments::add_comment(api, ReportId::new(args.report_id), &args.content)
                        .await?;
                println!("Comment #{} added", comment.id);
                Ok(())
            }
            AppMode::Wallet(args) => {
                let balance = wallet::wallet(api).await?;
                let page = wallet::transactions(api, self.page(args)?).await?;
                print!("{}", output::wallet(&balance, &page.items));
                println!("{}", output::page_footer(&page));
                Ok(())
            }
            AppMode::Notifications(args) => self.notifications(api, args).await,
            AppMode::Stats => {
                let summary = stats::summary(api).await?;
                println!("{}", output::stats(&summary));
                Ok(())
            }
            AppMode::Agencies(args) => {
                match args.agency_id {
                    Some(id) => {
                        let agency = agencies::agency(api, AgencyId::new(id)).await?;
                        println!("{}", output::agency(&agency));
                        if let Some(description) = &agency.description {
                            println!("{}", description);
                        }
                    }
                    None => {
                        for agency in agencies::list_agencies(api).await? {
                            println!("{}", output::agency(&agency));
                        }
                    }
                }
                Ok(())
            }
            AppMode::Profile(args) => {
                let user = if args.full_name.is_some() || args.phone.is_some() {
                    users::update_current_user(
                        api,
                        UpdateUser {
                            full_name: args.full_name.clone(),
                            phone: args.phone.clone(),
                        },
                    )
                    .await?
                } else {
                    users::current_user(api).await?
                };
                println!("{}", output::user(&user));
                Ok(())
            }
        }
    }

    async fn list_reports(&self, api: &ApiClient, args: &ListReportsArgs) -> Result<(), ClientError> {
        let filter = api_client::models::ReportFilter {
            status: args.status,
            category: args.category,
        };
        let page = reports::list_reports(api, self.page(&args.page)?, filter).await?;
        for report in &page.items {
            println!("{}", output::report_line(report));
        }
        println!("{}", output::page_footer(&page));
        Ok(())
    }

    /// Load the report, vote with the optimistic control and reload the
    /// report if the vote was rolled back.
    async fn vote(&self, api: &ApiClient, args: &VoteArgs) -> Result<(), ClientError> {
        let id = ReportId::new(args.report_id);
        let report = reports::report(api, id).await?;
        let mut control = VoteControl::from_report(&report);

        let outcome = control.cast_vote(args.intent, api).await;
        if outcome.needs_reload() {
            match reports::report(api, id).await {
                Ok(report) => control.reset(report.vote_state()),
                Err(e) => error!("Reloading report {} failed: {:?}", id, e),
            }
        }

        println!("{}", output::vote_outcome(&outcome, control.state()));
        match outcome {
            VoteOutcome::RolledBack { error, .. } => Err(error),
            _ => Ok(()),
        }
    }

    async fn notifications(
        &self,
        api: &ApiClient,
        args: &NotificationsArgs,
    ) -> Result<(), ClientError> {
        if let Some(id) = args.read {
            notifications::mark_read(api, NotificationId::new(id)).await?;
        }
        if args.read_all {
            notifications::mark_all_read(api).await?;
        }

        let page = notifications::list_notifications(api, self.page(&args.page)?).await?;
        for notification in &page.items {
            println!("{}", output::notification_line(notification));
        }
        println!("{}", output::page_footer(&page));
        println!("Unread: {}", notifications::unread_count(api).await?);
        Ok(())
    }
}
