use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use costcenter_core::{CostCenterConnector, CostCenterError, Header, Text, ToText};

/// Instruction for how a method should behave.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(CostCenterError),
    /// Wait, then behave as the inner instruction says.
    Delay(Duration, Box<MockBehavior<T>>),
    /// Hang indefinitely.
    Hang,
}

impl<T> MockBehavior<T> {
    /// Return `value` after `delay`.
    pub fn delayed(delay: Duration, value: T) -> Self {
        Self::Delay(delay, Box::new(Self::Return(value)))
    }
}

/// One call received by the dynamic mock, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    /// `headers(controlling_area, cost_center)`
    Headers {
        /// Controlling area argument.
        controlling_area: String,
        /// Cost center argument.
        cost_center: String,
    },
    /// `to_texts(link)`
    ToTexts {
        /// Link argument.
        link: String,
    },
    /// `texts(language, cost_center_name)`
    Texts {
        /// Language argument.
        language: String,
        /// Name fragment argument.
        cost_center_name: String,
    },
}

#[derive(Default)]
struct InternalState {
    headers: Option<MockBehavior<Vec<Header>>>,
    to_texts: Option<MockBehavior<Vec<ToText>>>,
    texts: Option<MockBehavior<Vec<Text>>>,
    calls: Vec<MockCall>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `headers` calls.
    pub async fn set_headers_behavior(&self, behavior: MockBehavior<Vec<Header>>) {
        self.state.lock().await.headers = Some(behavior);
    }

    /// Set the behavior for `to_texts` calls.
    pub async fn set_to_texts_behavior(&self, behavior: MockBehavior<Vec<ToText>>) {
        self.state.lock().await.to_texts = Some(behavior);
    }

    /// Set the behavior for `texts` calls.
    pub async fn set_texts_behavior(&self, behavior: MockBehavior<Vec<Text>>) {
        self.state.lock().await.texts = Some(behavior);
    }

    /// Calls received so far, in arrival order.
    pub async fn calls(&self) -> Vec<MockCall> {
        self.state.lock().await.calls.clone()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.headers = None;
        guard.to_texts = None;
        guard.texts = None;
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn CostCenterConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn CostCenterConnector>, controller)
    }

    /// Log `call` and take a snapshot of the behavior chosen by `pick`.
    ///
    /// The lock is released before the behavior runs, so a delayed or
    /// hanging call does not block concurrent ones.
    async fn enter<T: Clone>(
        &self,
        call: MockCall,
        pick: impl FnOnce(&InternalState) -> Option<MockBehavior<T>>,
    ) -> Option<MockBehavior<T>> {
        let mut guard = self.state.lock().await;
        guard.calls.push(call);
        pick(&guard)
    }

    async fn resolve<T>(
        &self,
        behavior: Option<MockBehavior<T>>,
        operation: &str,
    ) -> Result<T, CostCenterError> {
        let mut current = behavior;
        loop {
            match current {
                Some(MockBehavior::Return(v)) => return Ok(v),
                Some(MockBehavior::Fail(e)) => return Err(e),
                Some(MockBehavior::Delay(d, next)) => {
                    tokio::time::sleep(d).await;
                    current = Some(*next);
                }
                Some(MockBehavior::Hang) => return std::future::pending().await,
                None => {
                    return Err(CostCenterError::connector(
                        self.name,
                        format!("no behavior configured for {operation}"),
                    ));
                }
            }
        }
    }
}

#[async_trait]
impl CostCenterConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn headers(
        &self,
        controlling_area: &str,
        cost_center: &str,
    ) -> Result<Vec<Header>, CostCenterError> {
        let call = MockCall::Headers {
            controlling_area: controlling_area.to_string(),
            cost_center: cost_center.to_string(),
        };
        let behavior = self.enter(call, |s| s.headers.clone()).await;
        self.resolve(behavior, "headers").await
    }

    async fn to_texts(&self, link: &str) -> Result<Vec<ToText>, CostCenterError> {
        let call = MockCall::ToTexts {
            link: link.to_string(),
        };
        let behavior = self.enter(call, |s| s.to_texts.clone()).await;
        self.resolve(behavior, "to_texts").await
    }

    async fn texts(
        &self,
        language: &str,
        cost_center_name: &str,
    ) -> Result<Vec<Text>, CostCenterError> {
        let call = MockCall::Texts {
            language: language.to_string(),
            cost_center_name: cost_center_name.to_string(),
        };
        let behavior = self.enter(call, |s| s.texts.clone()).await;
        self.resolve(behavior, "texts").await
    }
}
