//! Simulation worker that owns the authoritative [`SchedulerState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), executes
//! them through [`TurnEngine`], and publishes events to the [`EventBus`].
//! Commands are handled one at a time, which is what serializes concurrent
//! callers.

use tokio::sync::{mpsc, oneshot};

use aim_core::{
    ActionCatalog, ActionRequest, ActorId, ActorTimer, AdvanceReport, CoreError, ExecuteError,
    ExecutionOutcome, GameConfig, SchedulerSnapshot, SchedulerState, Speed, Timer, TurnEngine,
};
use tracing::{debug, info, warn};

use crate::events::{ActionEvent, Event, EventBus, RosterEvent, TimeEvent};

type Reply<T> = oneshot::Sender<Result<T, ExecuteError>>;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Register an actor under a caller-chosen id.
    Register {
        actor: ActorId,
        speed: Speed,
        timer: Timer,
        reply: Reply<()>,
    },
    /// Register an actor under a freshly allocated id. A missing stagger
    /// falls back to the configured default.
    Spawn {
        speed: Speed,
        stagger: Option<Timer>,
        reply: Reply<ActorId>,
    },
    Unregister {
        actor: ActorId,
        reply: Reply<ActorTimer>,
    },
    /// Select the actor that should act now.
    NextActor {
        reply: oneshot::Sender<Option<ActorId>>,
    },
    RequestAction {
        request: ActionRequest,
        reply: Reply<ExecutionOutcome>,
    },
    /// Advance simulated time by exactly one tick.
    AdvanceTime {
        reply: oneshot::Sender<AdvanceReport>,
    },
    /// Read-only copy of the current state.
    Snapshot {
        reply: oneshot::Sender<SchedulerSnapshot>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Register { .. } => "register",
            Command::Spawn { .. } => "spawn",
            Command::Unregister { .. } => "unregister",
            Command::NextActor { .. } => "next_actor",
            Command::RequestAction { .. } => "request_action",
            Command::AdvanceTime { .. } => "advance_time",
            Command::Snapshot { .. } => "snapshot",
        }
    }
}

/// Background task that processes scheduling commands.
pub struct SimulationWorker {
    state: SchedulerState,
    catalog: ActionCatalog,
    config: GameConfig,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        state: SchedulerState,
        catalog: ActionCatalog,
        config: GameConfig,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            actors = state.timers().len(),
            actions = catalog.len(),
            tick = %state.tick(),
            "SimulationWorker initialized"
        );

        Self {
            state,
            catalog,
            config,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Exits once every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        info!(tick = %self.state.tick(), "SimulationWorker stopped");
    }

    fn engine(&mut self) -> TurnEngine<'_> {
        TurnEngine::new(&mut self.state, &self.catalog)
    }

    fn handle_command(&mut self, cmd: Command) {
        let name = cmd.name();
        debug!(command = name, tick = %self.state.tick(), "handling command");

        let delivered = match cmd {
            Command::Register {
                actor,
                speed,
                timer,
                reply,
            } => {
                let result = self.engine().register_with_timer(actor, speed, timer);
                if result.is_ok() {
                    self.publish_registered(actor);
                }
                reply.send(result).is_ok()
            }
            Command::Spawn {
                speed,
                stagger,
                reply,
            } => {
                let stagger = stagger.unwrap_or(self.config.default_stagger);
                let result = self.engine().spawn(speed, Some(stagger));
                if let Ok(actor) = result {
                    self.publish_registered(actor);
                }
                reply.send(result).is_ok()
            }
            Command::Unregister { actor, reply } => {
                let result = self.engine().unregister(actor);
                if let Ok(removed) = &result {
                    self.event_bus.publish(Event::Roster(RosterEvent::ActorRemoved {
                        actor,
                        timer: removed.timer,
                        tick: self.state.tick(),
                    }));
                }
                reply.send(result).is_ok()
            }
            Command::NextActor { reply } => {
                let next = self.engine().next_actor();
                reply.send(next).is_ok()
            }
            Command::RequestAction { request, reply } => {
                let result = self.handle_action(request);
                reply.send(result).is_ok()
            }
            Command::AdvanceTime { reply } => {
                let report = self.engine().request_advance_time();
                self.event_bus
                    .publish(Event::Time(TimeEvent::TickAdvanced(report.clone())));
                reply.send(report).is_ok()
            }
            Command::Snapshot { reply } => {
                let snapshot = SchedulerSnapshot::from_state(&self.state);
                reply.send(snapshot).is_ok()
            }
        };

        if !delivered {
            debug!(command = name, "reply channel closed (caller dropped)");
        }
    }

    fn handle_action(&mut self, request: ActionRequest) -> Result<ExecutionOutcome, ExecuteError> {
        let tick = self.state.tick();
        let result = self.engine().request_action(&request);
        match result {
            Ok(execution) => {
                self.event_bus
                    .publish(Event::Action(ActionEvent::ActionApplied {
                        request,
                        execution,
                        tick,
                    }));
                Ok(execution)
            }
            Err(error) => {
                if error.is_not_ready() {
                    debug!(actor = %request.actor, %error, "action requested out of turn");
                } else {
                    warn!(
                        actor = %request.actor,
                        action = %request.action,
                        code = error.error_code(),
                        %error,
                        "action rejected"
                    );
                }
                self.event_bus
                    .publish(Event::Action(ActionEvent::ActionRejected {
                        request,
                        code: error.error_code().to_string(),
                        message: error.to_string(),
                        tick,
                    }));
                Err(error)
            }
        }
    }

    fn publish_registered(&self, actor: ActorId) {
        if let Ok((timer, speed)) = self.state.timers().get(actor) {
            self.event_bus
                .publish(Event::Roster(RosterEvent::ActorRegistered {
                    actor,
                    speed,
                    timer,
                    tick: self.state.tick(),
                }));
        }
    }
}
