//! Studio session use case
//!
//! Validates form input, runs the plan and keeps the latest result for
//! redisplay.

use crate::config::PlanParams;
use crate::ports::model_client::ModelClient;
use crate::ports::plan_store::PlanStore;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::run_plan::{RunPlanInput, RunPlanUseCase};
use std::sync::Arc;
use studio_domain::{BriefDraft, BriefError, DesignPlan};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur when submitting a brief
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Invalid brief: {0}")]
    Validation(#[from] BriefError),
}

/// One user's working session: submit briefs, read back the latest plan.
pub struct StudioSession<C: ModelClient + 'static> {
    run_plan: RunPlanUseCase<C>,
    store: Arc<dyn PlanStore>,
}

impl<C: ModelClient + 'static> StudioSession<C> {
    pub fn new(run_plan: RunPlanUseCase<C>, store: Arc<dyn PlanStore>) -> Self {
        Self { run_plan, store }
    }

    pub fn params(&self) -> &PlanParams {
        self.run_plan.params()
    }

    /// Validate the draft and, if it passes, run a full plan.
    ///
    /// A rejected draft issues no model requests and leaves the stored plan
    /// untouched.
    pub async fn submit(
        &self,
        draft: BriefDraft,
        want_images: bool,
    ) -> Result<Arc<DesignPlan>, SubmitError> {
        self.submit_with_progress(draft, want_images, &NoProgress)
            .await
    }

    pub async fn submit_with_progress(
        &self,
        draft: BriefDraft,
        want_images: bool,
        progress: &dyn ProgressNotifier,
    ) -> Result<Arc<DesignPlan>, SubmitError> {
        let brief = draft.validate().inspect_err(|e| {
            warn!("Rejected brief ({}): {}", e.field(), e);
        })?;

        let plan = self
            .run_plan
            .execute_with_progress(RunPlanInput { brief, want_images }, progress)
            .await;

        info!("Storing plan for redisplay");
        Ok(self.store.set(plan))
    }

    /// The most recently completed plan, if any
    pub fn latest(&self) -> Option<Arc<DesignPlan>> {
        self.store.get()
    }

    pub fn reset(&self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::plan_store::SessionPlanStore;
    use crate::use_cases::test_support::ScriptedClient;

    fn session() -> (Arc<ScriptedClient>, StudioSession<ScriptedClient>) {
        let client = Arc::new(ScriptedClient::echo());
        let run_plan = RunPlanUseCase::new(Arc::clone(&client), PlanParams::default());
        let store = Arc::new(SessionPlanStore::new());
        (client, StudioSession::new(run_plan, store))
    }

    #[tokio::test]
    async fn test_empty_description_issues_no_requests() {
        let (client, session) = session();

        let result = session.submit(BriefDraft::new("   "), true).await;

        assert!(matches!(
            result,
            Err(SubmitError::Validation(BriefError::EmptyDescription))
        ));
        assert_eq!(client.text_call_count(), 0);
        assert_eq!(client.image_call_count(), 0);
        assert!(session.latest().is_none());
    }

    #[tokio::test]
    async fn test_submit_stores_latest_plan() {
        let (_, session) = session();

        let first = session
            .submit(BriefDraft::new("Small home office"), false)
            .await
            .unwrap();
        assert!(Arc::ptr_eq(&first, &session.latest().unwrap()));

        let second = session
            .submit(BriefDraft::new("Kids bedroom").with_style("Boho"), false)
            .await
            .unwrap();
        let latest = session.latest().unwrap();
        assert!(Arc::ptr_eq(&second, &latest));
        assert_eq!(latest.brief.description(), "Kids bedroom");
    }

    #[tokio::test]
    async fn test_rejected_brief_keeps_previous_plan() {
        let (_, session) = session();
        session
            .submit(BriefDraft::new("Small home office"), false)
            .await
            .unwrap();

        let result = session
            .submit(BriefDraft::new("Hall").with_style("Gothic"), false)
            .await;

        assert!(matches!(
            result,
            Err(SubmitError::Validation(BriefError::UnknownStyle(_)))
        ));
        assert_eq!(
            session.latest().unwrap().brief.description(),
            "Small home office"
        );
    }

    #[tokio::test]
    async fn test_reset_clears_plan() {
        let (_, session) = session();
        session
            .submit(BriefDraft::new("Small home office"), false)
            .await
            .unwrap();

        session.reset();
        assert!(session.latest().is_none());
    }
}
