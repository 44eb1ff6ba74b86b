//! Fake provider collaborators shared by unit and router tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::llm_client::{ImageGenerator, InlineImage, LlmError, TextGenerator};

/// Records every prompt and answers with a fixed reply, or fails every call.
pub struct FakeTextGenerator {
    reply: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeTextGenerator {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for FakeTextGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(LlmError::Api {
            status: 429,
            message: "quota exhausted".to_string(),
        })
    }
}

/// Answers with a fixed inline image, or reports that none was returned.
pub struct FakeImageGenerator {
    data: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeImageGenerator {
    pub fn returning(data: &str) -> Arc<Self> {
        Arc::new(Self {
            data: Some(data.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            data: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ImageGenerator for FakeImageGenerator {
    async fn generate_image(&self, prompt: &str) -> Result<InlineImage, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.data
            .clone()
            .map(|data| InlineImage {
                mime_type: "image/png".to_string(),
                data,
            })
            .ok_or(LlmError::NoImage)
    }
}

/// Parks every call until released, then reports completion.
/// Lets a test drop the request while the provider call is still in flight.
pub struct GatedGenerator {
    started: Notify,
    release: Notify,
    finished: Notify,
}

impl GatedGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            started: Notify::new(),
            release: Notify::new(),
            finished: Notify::new(),
        })
    }

    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    pub async fn wait_finished(&self) {
        self.finished.notified().await;
    }

    async fn pass_gate(&self) {
        self.started.notify_one();
        self.release.notified().await;
        self.finished.notify_one();
    }
}

#[async_trait]
impl TextGenerator for GatedGenerator {
    async fn generate_text(&self, _prompt: &str) -> Result<String, LlmError> {
        self.pass_gate().await;
        Ok("Late reply".to_string())
    }
}

#[async_trait]
impl ImageGenerator for GatedGenerator {
    async fn generate_image(&self, _prompt: &str) -> Result<InlineImage, LlmError> {
        self.pass_gate().await;
        Ok(InlineImage {
            mime_type: "image/png".to_string(),
            data: "bGF0ZQ==".to_string(),
        })
    }
}
