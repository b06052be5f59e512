//! Agent handler abstractions
//!
//! A [`TaskAgent`] maps an incoming message to a reply message. The exchange
//! server holds one agent behind the task endpoint; composition (triage,
//! session recording) wraps agents in further agents.

pub mod clock;
pub mod registry;
pub mod triage;

use std::sync::Arc;

use async_trait::async_trait;

pub use clock::{TimeTeller, TimezonePolicy};
pub use registry::{Capability, CapabilityRegistry};
pub use triage::{Guardrail, GuardrailVerdict, TriageAgent};

use crate::{
    protocol::{ExchangeError, Message},
    session::{SessionKey, SessionStore},
};

/// A logical handler that accepts a message and produces a reply
#[async_trait]
pub trait TaskAgent: Send + Sync {
    /// Produce a reply to the given message
    ///
    /// Implementations return a message with [`Role::Agent`]; the server
    /// appends it to the response envelope after the original message.
    ///
    /// [`Role::Agent`]: crate::protocol::Role::Agent
    async fn reply(&self, message: &Message) -> Result<Message, ExchangeError>;
}

/// Agent wrapper that records each exchange into a session store
///
/// The store is passed in explicitly rather than constructed per process, so
/// the same handler can run against memory-backed or durable storage. The
/// exchange endpoint itself stays stateless; history recording is a concern
/// of the wrapped handler only.
pub struct SessionAgent<A> {
    inner: A,
    store: Arc<dyn SessionStore>,
    key: SessionKey,
}

impl<A: TaskAgent> SessionAgent<A> {
    /// Wrap an agent so that each user/agent exchange is appended to the
    /// session identified by `key`
    pub fn new(inner: A, store: Arc<dyn SessionStore>, key: SessionKey) -> Self {
        Self { inner, store, key }
    }
}

#[async_trait]
impl<A: TaskAgent> TaskAgent for SessionAgent<A> {
    async fn reply(&self, message: &Message) -> Result<Message, ExchangeError> {
        let reply = self.inner.reply(message).await?;

        self.store.append(&self.key, message.clone()).await;
        self.store.append(&self.key, reply.clone()).await;

        Ok(reply)
    }
}
