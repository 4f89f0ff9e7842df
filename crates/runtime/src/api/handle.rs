//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing. Every method sends one command
//! and awaits one reply, so calls from different clones are applied in the
//! order the worker receives them.
use tokio::sync::{broadcast, mpsc, oneshot};

use aim_core::{
    ActionRequest, ActorId, ActorTimer, AdvanceReport, ExecutionOutcome, SchedulerSnapshot, Speed,
    Timer,
};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn send<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Register an actor that is immediately ready.
    pub async fn register(&self, actor: ActorId, speed: Speed) -> Result<()> {
        self.register_with_timer(actor, speed, 0).await
    }

    /// Register an actor with an explicit starting timer.
    pub async fn register_with_timer(
        &self,
        actor: ActorId,
        speed: Speed,
        timer: Timer,
    ) -> Result<()> {
        let result = self
            .send(|reply| Command::Register {
                actor,
                speed,
                timer,
                reply,
            })
            .await?;
        Ok(result?)
    }

    /// Register an actor under a freshly allocated id.
    ///
    /// Without a stagger the runtime's configured default is used.
    pub async fn spawn(&self, speed: Speed, stagger: Option<Timer>) -> Result<ActorId> {
        let result = self
            .send(|reply| Command::Spawn {
                speed,
                stagger,
                reply,
            })
            .await?;
        Ok(result?)
    }

    pub async fn unregister(&self, actor: ActorId) -> Result<ActorTimer> {
        let result = self
            .send(|reply| Command::Unregister { actor, reply })
            .await?;
        Ok(result?)
    }

    /// The actor that should act now, or `None` when time must advance.
    pub async fn next_actor(&self) -> Result<Option<ActorId>> {
        self.send(|reply| Command::NextActor { reply }).await
    }

    /// Price the request through the catalog and charge it to the actor.
    pub async fn request_action(&self, request: ActionRequest) -> Result<ExecutionOutcome> {
        let result = self
            .send(|reply| Command::RequestAction { request, reply })
            .await?;
        Ok(result?)
    }

    /// Advance simulated time by exactly one tick.
    pub async fn advance_time(&self) -> Result<AdvanceReport> {
        self.send(|reply| Command::AdvanceTime { reply }).await
    }

    /// Query the current scheduler state (read-only snapshot)
    pub async fn snapshot(&self) -> Result<SchedulerSnapshot> {
        self.send(|reply| Command::Snapshot { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use aim_runtime::Topic;
    ///
    /// let mut time_rx = handle.subscribe(Topic::Time);
    /// while let Ok(event) = time_rx.recv().await {
    ///     // Handle tick events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
