//! Run Plan use case
//!
//! Orchestrates the specialist agents, the client summary and the visuals
//! into one [`DesignPlan`].

use crate::config::{ExecutionMode, PlanParams};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::model_client::{ImageGeneration, ModelClient, TextCompletion};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use serde_json::json;
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use studio_domain::core::string::{preview, single_line};
use studio_domain::{
    AgentRequest, AgentResult, AgentRole, DesignPlan, ImageRequest, ImageRole, PlanPhase,
    RoomBrief, TextRole,
};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Failure reason recorded when an agent task ends without a result
const TASK_LOST: &str = "agent task did not complete";

/// Input for the RunPlan use case
#[derive(Debug, Clone)]
pub struct RunPlanInput {
    /// The validated room brief
    pub brief: RoomBrief,
    /// Whether moodboards (and the render) are generated
    pub want_images: bool,
}

impl RunPlanInput {
    pub fn new(brief: RoomBrief) -> Self {
        Self {
            brief,
            want_images: true,
        }
    }

    pub fn without_images(mut self) -> Self {
        self.want_images = false;
        self
    }
}

/// Use case for building a design plan
///
/// Never fails: every request that errors is captured as a failure marker in
/// its own slot and the remaining requests still run.
pub struct RunPlanUseCase<C: ModelClient + 'static> {
    client: Arc<C>,
    params: PlanParams,
    logger: Arc<dyn ConversationLogger>,
}

impl<C: ModelClient + 'static> RunPlanUseCase<C> {
    pub fn new(client: Arc<C>, params: PlanParams) -> Self {
        Self {
            client,
            params,
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Record prompts and results to a transcript
    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn params(&self) -> &PlanParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunPlanInput) -> DesignPlan {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunPlanInput,
        progress: &dyn ProgressNotifier,
    ) -> DesignPlan {
        let RunPlanInput { brief, want_images } = input;
        info!(
            "Starting design plan: style={}, want_images={}, mode={:?}",
            brief.style(),
            want_images,
            self.params.mode
        );
        debug!(
            "Brief: {}",
            preview(&single_line(brief.description()), 80)
        );

        // Phase 1: Specialists
        let specialists = self.phase_specialists(&brief, progress).await;

        // Phase 2: Summary (fed with the specialist results)
        let summary = self.phase_summary(&brief, &specialists, progress).await;

        let [architect, furniture, colors] = specialists;
        let mut plan = DesignPlan::new(brief, summary, architect, furniture, colors);

        // Phase 3: Visuals (optional)
        if want_images {
            let (moodboard, render) = self.phase_visuals(&plan.brief, progress).await;
            plan = plan.with_moodboard(moodboard);
            if let Some(render) = render {
                plan = plan.with_render(render);
            }
        } else {
            debug!("Skipping visuals phase");
        }

        let failed = plan.failed_results().count();
        if failed > 0 {
            warn!("Design plan finished with {} failed slot(s)", failed);
        } else {
            info!("Design plan complete");
        }
        self.logger.log(ConversationEvent::new(
            "plan_complete",
            json!({
                "results": plan.all_results().count(),
                "failed": failed,
                "visuals": plan.has_visuals(),
            }),
        ));

        plan
    }

    /// Phase 1: architect, furniture and colorist
    async fn phase_specialists(
        &self,
        brief: &RoomBrief,
        progress: &dyn ProgressNotifier,
    ) -> [AgentResult; 3] {
        info!("Phase 1: Specialists");
        progress.on_phase_start(PlanPhase::Specialists, TextRole::SPECIALISTS.len());

        let jobs = TextRole::SPECIALISTS
            .into_iter()
            .map(|role| {
                let (role, completion) =
                    self.text_completion(AgentRequest::specialist(role, brief));
                let job = Self::complete_text(
                    Arc::clone(&self.client),
                    Arc::clone(&self.logger),
                    role,
                    completion,
                );
                (role, job)
            })
            .collect();

        let mut results = self.fan_out(PlanPhase::Specialists, jobs, progress).await;

        progress.on_phase_complete(PlanPhase::Specialists);
        TextRole::SPECIALISTS.map(|role| {
            results
                .remove(&role)
                .unwrap_or_else(|| AgentResult::failure(role, TASK_LOST))
        })
    }

    /// Phase 2: client summary
    async fn phase_summary(
        &self,
        brief: &RoomBrief,
        specialists: &[AgentResult],
        progress: &dyn ProgressNotifier,
    ) -> AgentResult {
        info!("Phase 2: Summary");
        progress.on_phase_start(PlanPhase::Summary, 1);

        let (role, completion) = self.text_completion(AgentRequest::summary(brief, specialists));
        let result = Self::complete_text(
            Arc::clone(&self.client),
            Arc::clone(&self.logger),
            role,
            completion,
        )
        .await;

        progress.on_task_complete(
            PlanPhase::Summary,
            TextRole::Summarizer.into(),
            result.is_success(),
        );
        progress.on_phase_complete(PlanPhase::Summary);
        result
    }

    /// Phase 3: moodboard images and, when enabled, the full render
    async fn phase_visuals(
        &self,
        brief: &RoomBrief,
        progress: &dyn ProgressNotifier,
    ) -> (Vec<AgentResult>, Option<AgentResult>) {
        info!("Phase 3: Visuals");
        let mut roles = ImageRole::MOODBOARD.to_vec();
        if self.params.include_render {
            roles.push(ImageRole::Render);
        }
        progress.on_phase_start(PlanPhase::Visuals, roles.len());

        let jobs = roles
            .iter()
            .map(|&role| {
                let (role, generation) =
                    self.image_generation(ImageRequest::for_role(role, brief));
                let job = Self::generate_image(
                    Arc::clone(&self.client),
                    Arc::clone(&self.logger),
                    role,
                    generation,
                );
                (role, job)
            })
            .collect();

        let mut results = self.fan_out(PlanPhase::Visuals, jobs, progress).await;

        progress.on_phase_complete(PlanPhase::Visuals);

        let mut take = |role: ImageRole| {
            results
                .remove(&role)
                .unwrap_or_else(|| AgentResult::failure(role, TASK_LOST))
        };
        let moodboard = ImageRole::MOODBOARD.into_iter().map(&mut take).collect();
        let render = self.params.include_render.then(|| take(ImageRole::Render));
        (moodboard, render)
    }

    /// Run independent jobs according to the execution mode.
    ///
    /// Results are keyed by role; callers re-assemble them in role order.
    async fn fan_out<K, F>(
        &self,
        phase: PlanPhase,
        jobs: Vec<(K, F)>,
        progress: &dyn ProgressNotifier,
    ) -> HashMap<K, AgentResult>
    where
        K: Into<AgentRole> + Copy + Eq + Hash + Send + 'static,
        F: Future<Output = AgentResult> + Send + 'static,
    {
        let mut results = HashMap::with_capacity(jobs.len());

        match self.params.mode {
            ExecutionMode::Sequential => {
                for (role, job) in jobs {
                    let result = job.await;
                    progress.on_task_complete(phase, role.into(), result.is_success());
                    results.insert(role, result);
                }
            }
            ExecutionMode::Concurrent => {
                let roles: Vec<K> = jobs.iter().map(|(role, _)| *role).collect();
                let mut join_set = JoinSet::new();
                for (role, job) in jobs {
                    join_set.spawn(async move { (role, job.await) });
                }
                while let Some(joined) = join_set.join_next().await {
                    match joined {
                        Ok((role, result)) => {
                            progress.on_task_complete(phase, role.into(), result.is_success());
                            results.insert(role, result);
                        }
                        Err(e) => {
                            warn!("Task join error: {}", e);
                        }
                    }
                }

                // A panicked task never reports back; close its slot here
                for role in roles {
                    if results.contains_key(&role) {
                        continue;
                    }
                    let result = AgentResult::failure(role, TASK_LOST);
                    log_result(self.logger.as_ref(), &result);
                    progress.on_task_complete(phase, role.into(), false);
                    results.insert(role, result);
                }
            }
        }

        results
    }

    /// Turn a text request into a completion call with the role's
    /// temperature and the configured text model.
    fn text_completion(&self, request: AgentRequest) -> (TextRole, TextCompletion) {
        let completion = TextCompletion {
            model: self.params.models.text.clone(),
            temperature: self.params.sampling.temperature_for(request.role),
            system_instruction: request.system_instruction,
            user_content: request.user_content,
        };
        (request.role, completion)
    }

    /// Turn an image request into a generation call.
    fn image_generation(&self, request: ImageRequest) -> (ImageRole, ImageGeneration) {
        let generation = ImageGeneration {
            model: self.params.models.image.clone(),
            prompt: request.prompt,
            size: self.params.image_size,
            reference_photo: request.reference_photo,
        };
        (request.role, generation)
    }

    /// Issue one text request and capture its outcome
    async fn complete_text(
        client: Arc<C>,
        logger: Arc<dyn ConversationLogger>,
        role: TextRole,
        completion: TextCompletion,
    ) -> AgentResult {
        debug!("Agent {} -> {}", role.as_str(), completion.model);
        logger.log(ConversationEvent::new(
            "agent_request",
            json!({
                "role": role.as_str(),
                "model": completion.model.as_str(),
                "temperature": completion.temperature,
                "system": completion.system_instruction,
                "user": completion.user_content,
            }),
        ));

        let result = match client.complete_text(&completion).await {
            Ok(text) if text.trim().is_empty() => {
                warn!("Agent {} returned an empty response", role.as_str());
                AgentResult::failure(role, "model returned an empty response")
            }
            Ok(text) => {
                info!("Agent {} responded ({} bytes)", role.as_str(), text.len());
                AgentResult::text(role, text)
            }
            Err(e) => {
                warn!("Agent {} failed: {}", role.as_str(), e);
                AgentResult::failure(role, e.to_string())
            }
        };

        log_result(logger.as_ref(), &result);
        result
    }

    /// Issue one image request and capture its outcome
    async fn generate_image(
        client: Arc<C>,
        logger: Arc<dyn ConversationLogger>,
        role: ImageRole,
        generation: ImageGeneration,
    ) -> AgentResult {
        debug!("Image {} -> {} ({})", role.as_str(), generation.model, generation.size);
        logger.log(ConversationEvent::new(
            "agent_request",
            json!({
                "role": role.as_str(),
                "model": generation.model.as_str(),
                "size": generation.size.to_string(),
                "prompt": generation.prompt,
                "reference_photo": generation.reference_photo.is_some(),
            }),
        ));

        let result = match client.generate_image(&generation).await {
            Ok(bytes) if bytes.is_empty() => {
                warn!("Image {} came back empty", role.as_str());
                AgentResult::failure(role, "image payload was empty")
            }
            Ok(bytes) => {
                info!("Image {} generated ({} bytes)", role.as_str(), bytes.len());
                AgentResult::image(role, bytes)
            }
            Err(e) => {
                warn!("Image {} failed: {}", role.as_str(), e);
                AgentResult::failure(role, e.to_string())
            }
        };

        log_result(logger.as_ref(), &result);
        result
    }
}

fn log_result(logger: &dyn ConversationLogger, result: &AgentResult) {
    logger.log(ConversationEvent::new(
        "agent_result",
        json!({
            "role": result.role.as_str(),
            "ok": result.is_success(),
            "text": result.as_text(),
            "image_bytes": result.as_image().map(<[u8]>::len),
            "error": result.failure_reason(),
        }),
    ));
}
