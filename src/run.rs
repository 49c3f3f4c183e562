//! Run orchestration.
//!
//! One planning run: clear the plan table, load the four snapshots, report
//! validation findings, compute plans, and emit them in session date order.
//! A load failure aborts the run; an emission failure is local to its
//! session — it is logged and the remaining sessions are still emitted.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::engine::SessionPlanner;
use crate::error::Result;
use crate::store::{DataProvider, PlanStore};
use crate::validation::validate_snapshot;

/// What happened to one session during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The plan was written to the store.
    Stored,
    /// No rehearsable scene; nothing to store.
    Skipped,
    /// The store rejected the plan record.
    Failed(String),
}

/// Per-session line of the run report.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub session_id: String,
    pub date: NaiveDate,
    pub scene_count: usize,
    pub needed_count: usize,
    pub not_needed_count: usize,
    pub outcome: SessionOutcome,
}

/// Result of one full run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// One report per loaded session, in date order.
    pub reports: Vec<SessionReport>,
}

impl RunSummary {
    /// Number of sessions considered.
    pub fn sessions(&self) -> usize {
        self.reports.len()
    }

    /// Number of plans written to the store.
    pub fn stored(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome == SessionOutcome::Stored)
            .count()
    }

    /// Number of plans the store rejected.
    pub fn failed(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, SessionOutcome::Failed(_)))
            .count()
    }
}

/// Runs one full planning pass for a show.
///
/// Load failures propagate; per-plan store failures are caught here so the
/// remaining sessions are still attempted.
pub async fn plan_show<P, S>(provider: &P, store: &S, include_past: bool) -> Result<RunSummary>
where
    P: DataProvider + Sync,
    S: PlanStore + Sync,
{
    store.clear_plans().await?;

    let actors = provider.load_actors().await?;
    let sessions = provider.load_sessions(include_past).await?;
    let scenes = provider.load_scenes().await?;
    let characters = provider.load_characters().await?;
    info!(
        actors = actors.len(),
        sessions = sessions.len(),
        scenes = scenes.len(),
        characters = characters.len(),
        "snapshot loaded"
    );

    if let Err(findings) = validate_snapshot(&sessions, &scenes, &characters, &actors) {
        for finding in &findings {
            warn!(kind = ?finding.kind, "{}", finding.message);
        }
    }

    let plans = SessionPlanner::new().plan_all(&sessions, &scenes, &characters, &actors);
    let plans_by_session: HashMap<&str, _> =
        plans.iter().map(|p| (p.session_id.as_str(), p)).collect();

    let mut order: Vec<usize> = (0..sessions.len()).collect();
    order.sort_by_key(|&i| sessions[i].date);

    let mut reports = Vec::with_capacity(sessions.len());
    for &i in &order {
        let session = &sessions[i];
        let plan = plans_by_session.get(session.id.as_str());
        let scene_count = plan.map_or(0, |p| p.scene_ids.len());
        info!(session = %session.id, date = %session.date, scenes = scene_count, "planning session");

        let (outcome, needed_count, not_needed_count) = match plan {
            None => (SessionOutcome::Skipped, 0, 0),
            Some(plan) => {
                let outcome = match store.create_plan(plan).await {
                    Ok(()) => SessionOutcome::Stored,
                    Err(e) => {
                        error!(session = %session.id, date = %session.date, "failed to store plan: {e}");
                        SessionOutcome::Failed(e.to_string())
                    }
                };
                (
                    outcome,
                    plan.needed_actor_ids.len(),
                    plan.not_needed_actor_ids.len(),
                )
            }
        };

        reports.push(SessionReport {
            session_id: session.id.clone(),
            date: session.date,
            scene_count,
            needed_count,
            not_needed_count,
            outcome,
        });
    }

    Ok(RunSummary { reports })
}
