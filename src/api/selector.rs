use tracing::debug;

use crate::core::MessageEvent;

/// Outcome of one latest-message selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// No topic is selected; nothing should render.
    Cleared,
    /// Keep the previously selected message (possibly none).
    Retained,
    /// Render this message next.
    Replaced(&'a MessageEvent),
}

/// Picks the message that drives the next redraw.
///
/// Only messages on `selected_topic` with a recognized chart schema are
/// considered. The last of them replaces `previous` when its receipt time is
/// strictly newer; equal receipt times keep `previous` so redelivered frames
/// do not trigger a redraw. The same policy applies to every accepted schema.
#[must_use]
pub fn select_latest<'a>(
    previous: Option<&MessageEvent>,
    selected_topic: Option<&str>,
    incoming: &'a [MessageEvent],
) -> Selection<'a> {
    let Some(topic) = selected_topic else {
        return Selection::Cleared;
    };

    let Some(latest) = incoming
        .iter()
        .rev()
        .find(|event| event.topic == topic && event.schema().is_some())
    else {
        return Selection::Retained;
    };

    match previous {
        Some(previous) if latest.receive_time <= previous.receive_time => Selection::Retained,
        _ => Selection::Replaced(latest),
    }
}

/// Stateful wrapper around [`select_latest`] holding the current selection.
#[derive(Debug, Clone, Default)]
pub struct LatestMessageSelector {
    current: Option<MessageEvent>,
}

impl LatestMessageSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<&MessageEvent> {
        self.current.as_ref()
    }

    /// Applies one frame of messages. Returns `true` when the selection changed.
    pub fn apply(&mut self, selected_topic: Option<&str>, incoming: &[MessageEvent]) -> bool {
        match select_latest(self.current.as_ref(), selected_topic, incoming) {
            Selection::Cleared => self.current.take().is_some(),
            Selection::Retained => false,
            Selection::Replaced(event) => {
                debug!(
                    topic = %event.topic,
                    sec = event.receive_time.sec(),
                    nsec = event.receive_time.nsec(),
                    "selected newer chart message"
                );
                self.current = Some(event.clone());
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}
