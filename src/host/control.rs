use std::time::Duration;

use crate::plan::{PlanError, Planner};
use crate::session::SplitSession;
use crate::token::TokenCounter;

use super::debounce::RateLimit;
use super::surface::Surface;
use super::{COUNTER_REFRESH_INTERVAL, IDLE_LABEL};

/// State machine behind the injected send control.
///
/// With no split in flight, an activation plans the current draft. A draft
/// within budget goes straight back into the box. An over-budget draft puts
/// the framing instruction into the box and queues the content parts; each
/// further activation moves one part into the box and counts the label
/// down, until the control reverts to idle. Planning happens at most once
/// per submission; the queue is never re-planned mid-drain.
pub struct SendControl<C> {
    planner: Planner<C>,
    session: Option<SplitSession>,
    counter_limit: RateLimit,
}

impl<C: TokenCounter> SendControl<C> {
    pub fn new(planner: Planner<C>) -> Self {
        Self::with_counter_interval(planner, COUNTER_REFRESH_INTERVAL)
    }

    pub fn with_counter_interval(planner: Planner<C>, interval: Duration) -> Self {
        Self {
            planner,
            session: None,
            counter_limit: RateLimit::new(interval),
        }
    }

    /// Whether a multi-part split is currently being drained
    pub fn split_in_flight(&self) -> bool {
        self.session.is_some()
    }

    /// One user action on the send control
    pub fn activate<S: Surface>(&mut self, surface: &mut S) -> Result<(), PlanError> {
        if let Some(mut session) = self.session.take() {
            if let Some(part) = session.advance() {
                surface.set_draft(&part);
            }
            if session.is_exhausted() {
                surface.set_send_label(IDLE_LABEL);
            } else {
                surface.set_send_label(&session.progress_label());
                self.session = Some(session);
            }
            return Ok(());
        }

        let draft = surface.draft();
        let mut parts = match self.planner.plan(&draft) {
            Ok(parts) => parts,
            // An empty box is not an error from the control's point of view
            Err(PlanError::EmptyInput) => return Ok(()),
            Err(err) => {
                // Block sending; the host renders the failure state
                surface.set_send_enabled(false);
                return Err(err);
            }
        };

        if parts.len() == 1 {
            surface.set_draft(&parts.remove(0));
            return Ok(());
        }

        // The framing send goes straight into the box; the content parts
        // wait their turn in the session
        surface.set_draft(&parts.remove(0));
        let session = SplitSession::new(parts);
        surface.set_send_label(&session.progress_label());
        self.session = Some(session);
        Ok(())
    }

    /// Refresh the live token counter, at most once per configured interval
    pub fn refresh_counter<S: Surface>(&mut self, surface: &mut S) {
        if !self.counter_limit.ready() {
            return;
        }
        match self.planner.report(&surface.draft()) {
            Ok(report) => {
                surface.set_counter(&format!("{} tokens", report.tokens), report.over_budget);
            }
            Err(_) => {
                surface.set_send_enabled(false);
                surface.set_counter("tokens unavailable", false);
            }
        }
    }
}
