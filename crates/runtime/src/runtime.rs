//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up the command channel and
//! event bus, and exposes a builder-based API for clients to drive turns.

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use aim_core::{
    ActionCatalog, ActionRequest, AdvanceReport, ExecutionOutcome, GameConfig, SchedulerState,
    TurnError,
};

use crate::api::{ActionProvider, Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// What a single [`Runtime::step`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The ready actor acted.
    Acted {
        request: ActionRequest,
        execution: ExecutionOutcome,
    },
    /// Nobody was ready, so time moved forward one tick.
    Advanced(AdvanceReport),
}

/// Main runtime that orchestrates the scheduler
///
/// [`RuntimeHandle`] provides a cloneable façade for clients; the runtime
/// itself owns the worker task and the action provider.
pub struct Runtime {
    handle: RuntimeHandle,
    provider: Option<Box<dyn ActionProvider>>,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Execute a single scheduling step.
    ///
    /// Asks for the ready actor; if there is none, advances one tick.
    /// Otherwise the provider chooses the action, which is then requested.
    /// Fails with `NoActors` when nothing is registered, since time would
    /// advance forever.
    pub async fn step(&mut self) -> Result<StepOutcome> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(RuntimeError::ProviderNotSet)?;

        let Some(actor) = self.handle.next_actor().await? else {
            let snapshot = self.handle.snapshot().await?;
            if snapshot.actors.is_empty() {
                return Err(TurnError::no_actors(snapshot.tick).into());
            }
            let report = self.handle.advance_time().await?;
            return Ok(StepOutcome::Advanced(report));
        };

        let snapshot = self.handle.snapshot().await?;
        let request = provider.provide_action(actor, &snapshot).await?;
        if request.actor != actor {
            return Err(RuntimeError::InvalidActionActor {
                expected: actor,
                provided: request.actor,
            });
        }

        let execution = self.handle.request_action(request).await?;
        Ok(StepOutcome::Acted { request, execution })
    }

    /// Run up to `max_steps` steps, returning every outcome in order.
    pub async fn run(&mut self, max_steps: u64) -> Result<Vec<StepOutcome>> {
        let mut outcomes = Vec::new();
        for _ in 0..max_steps {
            outcomes.push(self.step().await?);
        }
        Ok(outcomes)
    }

    /// Set the action provider
    pub fn set_provider(&mut self, provider: impl ActionProvider + 'static) {
        self.provider = Some(Box::new(provider));
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker exits once every [`RuntimeHandle`] clone has been dropped,
    /// so callers must release their clones before awaiting this.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<SchedulerState>,
    catalog: Option<ActionCatalog>,
    provider: Option<Box<dyn ActionProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            catalog: None,
            provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required action catalog
    pub fn catalog(mut self, catalog: ActionCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Provide initial scheduler state (defaults to an empty schedule)
    pub fn initial_state(mut self, state: SchedulerState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the action provider used by [`Runtime::step`] (optional)
    pub fn provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime and spawn the simulation worker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Result<Runtime> {
        let catalog = self.catalog.ok_or(RuntimeError::MissingCatalog)?;
        let state = self.state.unwrap_or_default();

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker = SimulationWorker::new(
            state,
            catalog,
            self.config.game_config,
            command_rx,
            event_bus,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            provider: self.provider,
            sim_worker_handle,
        })
    }
}
