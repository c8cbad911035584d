//! In-process event bus
//!
//! Components publish [`AppEvent`]s without knowing who listens. The app
//! drains its own subscription once per loop iteration.

use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Request an AI assistant to fill the current form
    OpenAiAutofill { context: &'static str },
    /// Switch the active form to OCR input
    ActivateOcrTab,
}

#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish to every current subscriber; returns how many received it
    pub fn publish(&self, event: AppEvent) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(broadcast::error::SendError(event)) => {
                tracing::debug!("No subscriber for {event:?}");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_subscriber_receives_event() {
        let bus = EventBus::default();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        assert_eq!(bus.publish(AppEvent::ActivateOcrTab), 2);

        assert_eq!(first.recv().await.unwrap(), AppEvent::ActivateOcrTab);
        assert_eq!(second.recv().await.unwrap(), AppEvent::ActivateOcrTab);
    }

    #[test]
    fn test_publish_without_subscribers_is_harmless() {
        let bus = EventBus::default();
        assert_eq!(
            bus.publish(AppEvent::OpenAiAutofill {
                context: "legal-text"
            }),
            0
        );
    }

    #[test]
    fn test_late_subscriber_misses_earlier_events() {
        let bus = EventBus::default();
        let _early = bus.subscribe();
        bus.publish(AppEvent::ActivateOcrTab);
        let mut late = bus.subscribe();
        assert!(late.try_recv().is_err());
    }
}
