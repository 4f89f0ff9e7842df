//! Plain-text and JSON-lines output of a played session.

use std::io::Write;

use anyhow::Result;

use aim_content::RosterBinding;
use aim_core::{ActorId, SchedulerSnapshot};
use aim_runtime::StepOutcome;

/// Writes session progress to any [`Write`] sink.
pub struct Renderer<W> {
    out: W,
    json: bool,
}

impl<W: Write> Renderer<W> {
    pub fn text(out: W) -> Self {
        Self { out, json: false }
    }

    pub fn json(out: W) -> Self {
        Self { out, json: true }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self, snapshot: &SchedulerSnapshot, binding: &RosterBinding) -> Result<()> {
        if self.json {
            let line = serde_json::json!({ "step": 0, "snapshot": snapshot });
            writeln!(self.out, "{line}")?;
            return Ok(());
        }

        writeln!(self.out, "== tick {} ==", snapshot.tick)?;
        for actor in &snapshot.actors {
            writeln!(
                self.out,
                "  {:<20} timer {:>4}  speed {}",
                label(binding, actor.id),
                actor.timer,
                actor.speed
            )?;
        }
        Ok(())
    }

    pub fn step(
        &mut self,
        step: u64,
        outcome: &StepOutcome,
        snapshot: &SchedulerSnapshot,
        binding: &RosterBinding,
    ) -> Result<()> {
        if self.json {
            let line = serde_json::json!({
                "step": step,
                "outcome": outcome,
                "snapshot": snapshot,
            });
            writeln!(self.out, "{line}")?;
            return Ok(());
        }

        match outcome {
            StepOutcome::Acted { request, execution } => writeln!(
                self.out,
                "[{:>3}] tick {:>3}  {} {} (cost {}, timer {} -> {})",
                step,
                snapshot.tick,
                label(binding, request.actor),
                request.action,
                execution.outcome.cost,
                execution.outcome.timer_before,
                execution.outcome.timer_after,
            )?,
            StepOutcome::Advanced(report) => {
                let ready: Vec<_> = report
                    .newly_ready
                    .iter()
                    .map(|id| label(binding, *id))
                    .collect();
                if ready.is_empty() {
                    writeln!(self.out, "[{:>3}] tick {:>3}  time passes", step, report.tick)?;
                } else {
                    writeln!(
                        self.out,
                        "[{:>3}] tick {:>3}  time passes; ready: {}",
                        step,
                        report.tick,
                        ready.join(", ")
                    )?;
                }
            }
        }
        Ok(())
    }
}

fn label(binding: &RosterBinding, actor: ActorId) -> String {
    match binding.name_of(actor) {
        Some(name) => format!("{name} {actor}"),
        None => actor.to_string(),
    }
}
