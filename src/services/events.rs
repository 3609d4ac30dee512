//! Host event bus
//!
//! Carries `HostEvent`s between the browser and the rest of the console.
//! Every event is tagged with where it came from; the forwarder passes
//! events from other sources on to the UI loop.

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use repobrowse::messages::HostEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOrigin {
    Browser,
    Console,
}

#[derive(Debug, Clone)]
pub struct Envelope {
    pub origin: EventOrigin,
    pub event: HostEvent,
}

#[derive(Clone)]
pub struct HostBus {
    tx: broadcast::Sender<Envelope>,
}

impl Default for HostBus {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    pub fn fire(&self, origin: EventOrigin, event: HostEvent) {
        info!("Host event from {:?}: {:?}", origin, event);
        // No subscribers is fine
        let _ = self.tx.send(Envelope { origin, event });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Envelope> {
        self.tx.subscribe()
    }
}

/// Spawn the task that feeds host events into the UI loop. The browser's
/// own events are not sent back to it.
pub fn spawn_event_forwarder(bus: &HostBus, event_tx: mpsc::UnboundedSender<Envelope>) {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(envelope) => {
                    if envelope.origin == EventOrigin::Browser {
                        continue;
                    }
                    debug!("Forwarding host event {:?}", envelope.event);
                    if event_tx.send(envelope).is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Host event forwarder skipped {} events", skipped);
                    // Something was missed; assume the repository changed
                    let envelope = Envelope {
                        origin: EventOrigin::Console,
                        event: HostEvent::RepositoryDirty,
                    };
                    if event_tx.send(envelope).is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}

/// Other tools signal a repository change with SIGUSR1
#[cfg(unix)]
pub fn spawn_signal_listener(bus: HostBus) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut usr1 = match signal(SignalKind::user_defined1()) {
            Ok(s) => s,
            Err(e) => {
                warn!("Cannot listen for SIGUSR1: {}", e);
                return;
            }
        };
        while usr1.recv().await.is_some() {
            bus.fire(EventOrigin::Console, HostEvent::RepositoryDirty);
        }
    });
}

#[cfg(not(unix))]
pub fn spawn_signal_listener(_bus: HostBus) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bus_delivers_to_subscribers() {
        let bus = HostBus::default();
        let mut rx = bus.subscribe();
        bus.fire(EventOrigin::Console, HostEvent::RepositoryDirty);
        let envelope = rx.try_recv().expect("subscriber should see the event");
        assert_eq!(envelope.event, HostEvent::RepositoryDirty);
    }

    #[tokio::test]
    async fn test_forwarder_skips_own_events() {
        let bus = HostBus::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_event_forwarder(&bus, tx);

        bus.fire(EventOrigin::Browser, HostEvent::RepositoryDirty);
        bus.fire(EventOrigin::Console, HostEvent::FavoritesChanged);

        let envelope = rx.recv().await.expect("forwarder should deliver console events");
        assert_eq!(envelope.origin, EventOrigin::Console);
        assert_eq!(envelope.event, HostEvent::FavoritesChanged);
    }
}
