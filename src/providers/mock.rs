/*!
 * Mock provider implementations for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::responding(text)` - Always succeeds with the given text
 * - `MockProvider::scripted(responses)` - Replays responses in order
 * - `MockProvider::echo_translations()` - Answers batch prompts with aligned arrays
 * - `MockProvider::failing()` - Always fails with an error
 *
 * Every request is recorded so tests can assert on call counts and prompts.
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{CompletionRequest, Provider};

/// Behavior mode once the script is exhausted
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with the given text
    Fixed(String),
    /// Reads `"{i}. {sentence}"` lines from the prompt and returns a JSON
    /// array of `"[{i}] {sentence}"`
    EchoTranslations,
    /// Always fails with an API error
    Failing,
}

/// One scripted reply
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text
    Text(String),
    /// Fail with an API error carrying this message
    Error(String),
}

/// Mock provider for testing protocol behavior
#[derive(Debug, Clone)]
pub struct MockProvider {
    /// Behavior once the script is empty
    behavior: MockBehavior,
    /// Replies returned before falling back to `behavior`
    script: Arc<Mutex<VecDeque<MockReply>>>,
    /// Request counter
    request_count: Arc<AtomicUsize>,
    /// Every request received, in order
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    /// Artificial latency per call
    delay: Option<Duration>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            script: Arc::new(Mutex::new(VecDeque::new())),
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Create a mock that always answers with `text`
    pub fn responding(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed(text.into()))
    }

    /// Create a mock that replays `replies` in order, then fails
    pub fn scripted(replies: Vec<MockReply>) -> Self {
        let mock = Self::new(MockBehavior::Failing);
        mock.script.lock().extend(replies);
        mock
    }

    /// Create a mock that answers translation prompts with aligned arrays
    pub fn echo_translations() -> Self {
        Self::new(MockBehavior::EchoTranslations)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Add latency to every call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue another reply
    pub fn push_reply(&self, reply: MockReply) {
        self.script.lock().push_back(reply);
    }

    /// Number of `complete` calls so far
    pub fn call_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Copy of every request received
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().clone()
    }

    /// Prompt of the most recent request
    pub fn last_prompt(&self) -> Option<String> {
        self.requests.lock().last().map(|r| r.prompt.clone())
    }

    fn echo(prompt: &str) -> String {
        let items: Vec<String> = prompt
            .lines()
            .filter_map(|line| {
                let (index, text) = line.split_once(". ")?;
                index.parse::<usize>().ok()?;
                Some(format!("[{}] {}", index, text))
            })
            .collect();
        serde_json::Value::from(items).to_string()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.script.lock().pop_front();
        match scripted {
            Some(MockReply::Text(text)) => return Ok(text),
            Some(MockReply::Error(message)) => {
                return Err(ProviderError::ApiError { status_code: 500, message });
            }
            None => {}
        }

        match &self.behavior {
            MockBehavior::Fixed(text) => Ok(text.clone()),
            MockBehavior::EchoTranslations => Ok(Self::echo(&request.prompt)),
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated API failure".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
