//! Test doubles shared by the use case tests

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::model_client::{ClientError, ImageGeneration, ModelClient, TextCompletion};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use std::sync::Mutex;
use studio_domain::{AgentRole, PlanPhase};

/// How the scripted client answers a request that is not forced to fail
#[derive(Clone, Copy)]
enum Reply {
    /// Text echoes the user content, images echo the prompt bytes
    Echo,
    /// Every call fails with a connection error
    Fail,
    /// Empty text and empty image payloads
    Blank,
}

/// Mock client that records every call it receives
pub(crate) struct ScriptedClient {
    reply: Reply,
    /// Requests whose prompt contains one of these fragments fail
    fail_when: Vec<&'static str>,
    /// Requests whose prompt contains one of these fragments panic
    panic_when: Vec<&'static str>,
    text_calls: Mutex<Vec<TextCompletion>>,
    image_calls: Mutex<Vec<ImageGeneration>>,
}

impl ScriptedClient {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            fail_when: Vec::new(),
            panic_when: Vec::new(),
            text_calls: Mutex::new(Vec::new()),
            image_calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn echo() -> Self {
        Self::new(Reply::Echo)
    }

    pub(crate) fn failing() -> Self {
        Self::new(Reply::Fail)
    }

    pub(crate) fn blank() -> Self {
        Self::new(Reply::Blank)
    }

    pub(crate) fn failing_when(mut self, fragment: &'static str) -> Self {
        self.fail_when.push(fragment);
        self
    }

    pub(crate) fn panicking_when(mut self, fragment: &'static str) -> Self {
        self.panic_when.push(fragment);
        self
    }

    pub(crate) fn text_calls(&self) -> Vec<TextCompletion> {
        self.text_calls.lock().unwrap().clone()
    }

    pub(crate) fn image_calls(&self) -> Vec<ImageGeneration> {
        self.image_calls.lock().unwrap().clone()
    }

    pub(crate) fn text_call_count(&self) -> usize {
        self.text_calls.lock().unwrap().len()
    }

    pub(crate) fn image_call_count(&self) -> usize {
        self.image_calls.lock().unwrap().len()
    }

    fn panic_if_scripted(&self, prompt: &str) {
        if let Some(fragment) = self.panic_when.iter().find(|f| prompt.contains(**f)) {
            panic!("scripted panic on {fragment:?}");
        }
    }

    fn should_fail(&self, prompt: &str) -> bool {
        matches!(self.reply, Reply::Fail) || self.fail_when.iter().any(|f| prompt.contains(f))
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn complete_text(&self, request: &TextCompletion) -> Result<String, ClientError> {
        self.text_calls.lock().unwrap().push(request.clone());
        self.panic_if_scripted(&request.user_content);
        if self.should_fail(&request.user_content) {
            return Err(ClientError::Connection("connection refused".to_string()));
        }
        match self.reply {
            Reply::Blank => Ok("  \n".to_string()),
            _ => Ok(request.user_content.clone()),
        }
    }

    async fn generate_image(&self, request: &ImageGeneration) -> Result<Vec<u8>, ClientError> {
        self.image_calls.lock().unwrap().push(request.clone());
        self.panic_if_scripted(&request.prompt);
        if self.should_fail(&request.prompt) {
            return Err(ClientError::Connection("connection refused".to_string()));
        }
        match self.reply {
            Reply::Blank => Ok(Vec::new()),
            _ => Ok(request.prompt.clone().into_bytes()),
        }
    }
}

/// Logger that keeps the event types it saw
#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingLogger {
    pub(crate) fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}

/// Progress notifier that records phase starts and task outcomes
#[derive(Default)]
pub(crate) struct RecordingProgress {
    phases: Mutex<Vec<PlanPhase>>,
    outcomes: Mutex<Vec<(AgentRole, bool)>>,
}

impl RecordingProgress {
    pub(crate) fn phases(&self) -> Vec<PlanPhase> {
        self.phases.lock().unwrap().clone()
    }

    pub(crate) fn completed(&self) -> usize {
        self.outcomes.lock().unwrap().len()
    }

    pub(crate) fn failed(&self) -> usize {
        self.outcomes
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, ok)| !ok)
            .count()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_phase_start(&self, phase: PlanPhase, _total_tasks: usize) {
        self.phases.lock().unwrap().push(phase);
    }

    fn on_task_complete(&self, _phase: PlanPhase, role: AgentRole, success: bool) {
        self.outcomes.lock().unwrap().push((role, success));
    }

    fn on_phase_complete(&self, _phase: PlanPhase) {}
}
