use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::LogPublisher;

// Events only go to the structured log; EventPublisher stays a trait so other sinks can be plugged in.
pub fn create_publisher() -> Box<dyn EventPublisher> {
    Box::new(LogPublisher::new("catalog"))
}
