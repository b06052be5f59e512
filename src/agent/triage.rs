//! Triage dispatch and input guardrails
//!
//! Multi-step conversational routing as tagged-variant dispatch: a static
//! keyword table classifies the incoming message into a category, and the
//! handler registered for that category produces the reply. Guardrails run
//! before classification and can block a request outright.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;

use crate::protocol::{ExchangeError, Message};

use super::TaskAgent;

/// Verdict of a guardrail check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardrailVerdict {
    /// Let the request through
    Pass,

    /// Block the request with a reason
    Block {
        /// Why the request was blocked
        reason: String,
    },
}

impl GuardrailVerdict {
    /// Build a block verdict
    pub fn block(reason: impl Into<String>) -> Self {
        Self::Block {
            reason: reason.into(),
        }
    }
}

/// A pre-processing check that can block a request before triage
#[derive(Clone)]
pub struct Guardrail {
    /// Guardrail name, used in the error surfaced to the caller
    pub name: String,

    check: fn(&str) -> GuardrailVerdict,
}

impl Guardrail {
    /// Create a new guardrail over the first text part of a message
    pub fn new(name: impl Into<String>, check: fn(&str) -> GuardrailVerdict) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }

    /// Run the check against the given text
    pub fn check(&self, text: &str) -> GuardrailVerdict {
        (self.check)(text)
    }
}

impl std::fmt::Debug for Guardrail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guardrail").field("name", &self.name).finish()
    }
}

/// Agent that hands off to a specialist based on keyword classification
///
/// The routing policy is a static mapping table: each rule pairs a lowercase
/// keyword with a category, and each category has one registered handler.
/// Messages matching no rule go to the fallback handler.
pub struct TriageAgent {
    rules: Vec<(String, String)>,
    routes: HashMap<String, Arc<dyn TaskAgent>>,
    fallback: Arc<dyn TaskAgent>,
    guardrails: Vec<Guardrail>,
}

impl TriageAgent {
    /// Create a triage agent with the given fallback handler
    pub fn new(fallback: Arc<dyn TaskAgent>) -> Self {
        Self {
            rules: Vec::new(),
            routes: HashMap::new(),
            fallback,
            guardrails: Vec::new(),
        }
    }

    /// Add a classification rule mapping a keyword to a category
    pub fn with_rule(mut self, keyword: impl Into<String>, category: impl Into<String>) -> Self {
        self.rules.push((keyword.into().to_lowercase(), category.into()));
        self
    }

    /// Register the handler for a category
    pub fn with_route(mut self, category: impl Into<String>, agent: Arc<dyn TaskAgent>) -> Self {
        self.routes.insert(category.into(), agent);
        self
    }

    /// Add an input guardrail
    pub fn with_guardrail(mut self, guardrail: Guardrail) -> Self {
        self.guardrails.push(guardrail);
        self
    }

    /// Classify a message text into a category, if any rule matches
    ///
    /// Rules are checked in registration order; the first match wins.
    pub fn classify(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, category)| category.as_str())
    }
}

#[async_trait]
impl TaskAgent for TriageAgent {
    async fn reply(&self, message: &Message) -> Result<Message, ExchangeError> {
        let text = message.first_text().unwrap_or_default();

        for guardrail in &self.guardrails {
            if let GuardrailVerdict::Block { reason } = guardrail.check(text) {
                tracing::warn!(guardrail = %guardrail.name, %reason, "request blocked");
                return Err(ExchangeError::GuardrailBlocked {
                    name: guardrail.name.clone(),
                    reason,
                });
            }
        }

        let handler = match self.classify(text) {
            Some(category) => {
                tracing::debug!(%category, "handing off to specialist");
                self.routes.get(category).unwrap_or(&self.fallback)
            }
            None => &self.fallback,
        };

        handler.reply(message).await
    }
}
