//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{ActionEvent, RosterEvent, TimeEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Registrations and removals
    Roster,
    /// Applied and rejected actions
    Action,
    /// Tick advancement
    Time,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Roster, Topic::Action, Topic::Time];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Roster(RosterEvent),
    Action(ActionEvent),
    Time(TimeEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Roster(_) => Topic::Roster,
            Event::Action(_) => Topic::Action,
            Event::Time(_) => Topic::Time,
        }
    }
}

#[derive(Debug)]
struct Channels {
    roster: broadcast::Sender<Event>,
    action: broadcast::Sender<Event>,
    time: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Roster => &self.roster,
            Topic::Action => &self.action,
            Topic::Time => &self.time,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; slow receivers observe
/// `RecvError::Lagged` instead of stalling the worker.
#[derive(Debug, Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(Channels {
                roster: broadcast::channel(capacity).0,
                action: broadcast::channel(capacity).0,
                time: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aim_core::{ActorId, Tick};

    fn removed(actor: u32) -> Event {
        Event::Roster(RosterEvent::ActorRemoved {
            actor: ActorId(actor),
            timer: 0,
            tick: Tick::ZERO,
        })
    }

    #[test]
    fn events_only_reach_their_topic() {
        let bus = EventBus::new();
        let mut roster_rx = bus.subscribe(Topic::Roster);
        let mut time_rx = bus.subscribe(Topic::Time);

        bus.publish(removed(3));

        assert_eq!(roster_rx.try_recv().unwrap(), removed(3));
        assert!(time_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        let bus = EventBus::with_capacity(1);
        bus.publish(removed(1));

        let mut rx = bus.subscribe(Topic::Roster);
        bus.publish(removed(2));
        assert_eq!(rx.try_recv().unwrap(), removed(2));
    }

    #[test]
    fn clones_share_channels() {
        let bus = EventBus::new();
        let mut rx = bus.clone().subscribe_multiple(&Topic::ALL);

        bus.publish(removed(7));
        let roster = rx.get_mut(&Topic::Roster).unwrap();
        assert_eq!(roster.try_recv().unwrap().topic(), Topic::Roster);
    }
}
