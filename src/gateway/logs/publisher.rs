use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes domain events as structured log records.
#[derive(Debug)]
pub struct LogPublisher {
    topic: String,
    published: AtomicUsize,
}

impl LogPublisher {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            published: AtomicUsize::new(0),
        }
    }

    pub fn published(&self) -> usize {
        self.published.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let created_at = event.created_at.to_string();
        info!(topic = self.topic.as_str(),
            event_id = event.event_id.as_str(),
            name = event.name.as_str(),
            key = event.key.as_str(),
            kind = ?event.kind,
            data = event.json_data.as_str(),
            created_at = created_at.as_str(),
            "domain event");
        self.published.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
