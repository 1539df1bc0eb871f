//! Vote control with optimistic updates.
//!
//! A tap updates the local counters immediately and sends one request to
//! the server. If the request fails, the counters are restored from the
//! snapshot taken before the tap. Taps while a request is in flight are
//! ignored.

use std::sync::Arc;

use api_client::models::Report;
use async_trait::async_trait;
use error_stack::{Report as ErrorReport, Result};
use model::{ReportId, VoteIntent, VoteState};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    ApiClient, ClientError,
    optimistic::{self, Compensation},
    services,
};

/// Remote vote submission.
#[async_trait]
pub trait VoteSubmitter: Send + Sync {
    async fn submit_vote(&self, report_id: ReportId, intent: VoteIntent)
    -> Result<(), ClientError>;
}

#[async_trait]
impl VoteSubmitter for ApiClient {
    async fn submit_vote(
        &self,
        report_id: ReportId,
        intent: VoteIntent,
    ) -> Result<(), ClientError> {
        services::reports::submit_vote(self, report_id, intent).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Previous vote request is still in flight.
    Pending,
    Disabled,
}

#[derive(Debug)]
pub enum VoteOutcome {
    /// No request was sent and the state did not change.
    Ignored(IgnoreReason),
    /// Server accepted the vote. Contains the current state.
    Committed(VoteState),
    /// Server request failed and the state was restored.
    RolledBack {
        restored: VoteState,
        error: ErrorReport<ClientError>,
    },
    /// Control was reset while the request was in flight. The response
    /// was not applied.
    Discarded,
}

impl VoteOutcome {
    /// Local counters may differ from the server after a rollback,
    /// because other clients might have voted meanwhile.
    pub fn needs_reload(&self) -> bool {
        matches!(self, Self::RolledBack { .. })
    }
}

/// Vote which is applied locally and waits for the server response.
#[derive(Debug)]
#[must_use]
pub struct PendingVote {
    report_id: ReportId,
    intent: VoteIntent,
    compensation: Compensation<VoteState>,
    generation: u64,
}

impl PendingVote {
    pub fn report_id(&self) -> ReportId {
        self.report_id
    }

    pub fn intent(&self) -> VoteIntent {
        self.intent
    }

    /// State before the tap.
    pub fn snapshot(&self) -> &VoteState {
        self.compensation.snapshot()
    }
}

/// Vote counters of one report as seen by one user.
#[derive(Debug)]
pub struct VoteControl {
    report_id: ReportId,
    state: VoteState,
    pending: bool,
    disabled: bool,
    /// Incremented when the state is replaced with a new server snapshot.
    generation: u64,
}

impl VoteControl {
    pub fn new(report_id: ReportId, initial: VoteState) -> Self {
        Self {
            report_id,
            state: initial,
            pending: false,
            disabled: false,
            generation: 0,
        }
    }

    /// Control for a loaded report. Closed reports can not be voted.
    pub fn from_report(report: &Report) -> Self {
        let mut control = Self::new(report.id, report.vote_state());
        control.disabled = !report.is_votable();
        control
    }

    pub fn report_id(&self) -> ReportId {
        self.report_id
    }

    pub fn state(&self) -> VoteState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Replace local state with new server provided values. A request which
    /// is in flight will not modify the state when it completes, but the
    /// control stays pending until then.
    pub fn reset(&mut self, snapshot: VoteState) {
        self.state = snapshot;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Apply the tap locally and mark the control pending.
    pub fn begin(&mut self, intent: VoteIntent) -> std::result::Result<PendingVote, IgnoreReason> {
        if self.pending {
            return Err(IgnoreReason::Pending);
        }
        if self.disabled {
            return Err(IgnoreReason::Disabled);
        }

        let compensation = optimistic::apply(&mut self.state, |s| s.next_state(intent));
        self.pending = true;
        Ok(PendingVote {
            report_id: self.report_id,
            intent,
            compensation,
            generation: self.generation,
        })
    }

    /// Keep the optimistic state or restore the snapshot depending on
    /// the server response.
    pub fn finish(
        &mut self,
        pending: PendingVote,
        result: Result<(), ClientError>,
    ) -> VoteOutcome {
        self.pending = false;

        if pending.generation != self.generation {
            info!(
                "Vote response for report {} discarded, state was reset",
                pending.report_id
            );
            return VoteOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                pending.compensation.commit();
                debug!(
                    "Vote {} for report {} accepted",
                    pending.intent, pending.report_id
                );
                VoteOutcome::Committed(self.state)
            }
            Err(error) => {
                pending.compensation.compensate(&mut self.state);
                warn!(
                    "Vote {} for report {} failed, state restored: {:?}",
                    pending.intent, pending.report_id, error
                );
                VoteOutcome::RolledBack {
                    restored: self.state,
                    error,
                }
            }
        }
    }

    /// Vote and wait for the server response.
    pub async fn cast_vote(
        &mut self,
        intent: VoteIntent,
        submitter: &(impl VoteSubmitter + ?Sized),
    ) -> VoteOutcome {
        let pending = match self.begin(intent) {
            Ok(pending) => pending,
            Err(reason) => return VoteOutcome::Ignored(reason),
        };
        let result = submitter.submit_vote(pending.report_id, intent).await;
        self.finish(pending, result)
    }
}

/// [VoteControl] which can be used from multiple tasks. The lock is not
/// held while the request is in flight, so other tasks can read the
/// optimistic state and their taps are ignored.
#[derive(Debug, Clone)]
pub struct SharedVoteControl {
    control: Arc<Mutex<VoteControl>>,
}

impl SharedVoteControl {
    pub fn new(control: VoteControl) -> Self {
        Self {
            control: Arc::new(Mutex::new(control)),
        }
    }

    pub async fn state(&self) -> VoteState {
        self.control.lock().await.state()
    }

    pub async fn is_pending(&self) -> bool {
        self.control.lock().await.is_pending()
    }

    pub async fn reset(&self, snapshot: VoteState) {
        self.control.lock().await.reset(snapshot)
    }

    pub async fn cast_vote(
        &self,
        intent: VoteIntent,
        submitter: &(impl VoteSubmitter + ?Sized),
    ) -> VoteOutcome {
        let pending = {
            let mut control = self.control.lock().await;
            match control.begin(intent) {
                Ok(pending) => pending,
                Err(reason) => return VoteOutcome::Ignored(reason),
            }
        };
        let result = submitter.submit_vote(pending.report_id, intent).await;
        self.control.lock().await.finish(pending, result)
    }
}
