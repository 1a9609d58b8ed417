// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capture and replay of raw input sessions.
//!
//! An [`EventRecorder`] attached to a delegate (see
//! [`DelegateOptions::record_events`](crate::DelegateOptions::record_events))
//! keeps the most recent events it saw in a bounded ring buffer. The capture
//! can be inspected, serialized with the `serde` feature, and fed back into
//! any [`EventSink`] to reproduce a gesture without a device.
//!
//! Recording is a debugging aid and has no influence on dispatch.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::event::InputEvent;
use crate::{PointMap, Response, extract_points};

/// Anything that consumes raw input events.
pub trait EventSink {
    /// Dispatches one event.
    fn handle(&mut self, event: &InputEvent) -> Response;
}

/// One captured event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordedEvent {
    /// Sequence number in the capture, starting at zero.
    pub seq: u64,
    /// The event as delivered.
    pub event: InputEvent,
}

impl RecordedEvent {
    /// Contacts the event carried, as seen by the normalizer.
    #[must_use]
    pub fn points(&self) -> PointMap {
        extract_points(&self.event)
    }
}

/// Bounded ring buffer of recent input events.
#[derive(Clone, Debug)]
pub struct EventRecorder {
    capacity: usize,
    next_seq: u64,
    entries: VecDeque<RecordedEvent>,
}

impl EventRecorder {
    /// Default number of retained events.
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Creates a recorder retaining at most `capacity` events (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            next_seq: 0,
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
        }
    }

    /// Appends `event`, evicting the oldest entry when full.
    pub fn record(&mut self, event: &InputEvent) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(RecordedEvent {
            seq: self.next_seq,
            event: event.clone(),
        });
        self.next_seq += 1;
    }

    /// Maximum number of retained events.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retained events, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &RecordedEvent> + '_ {
        self.entries.iter()
    }

    /// Drops every retained event. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Copies the retained events out, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RecordedEvent> {
        self.entries.iter().cloned().collect()
    }

    /// Feeds every retained event, oldest first, into `sink`.
    pub fn replay(&self, sink: &mut impl EventSink) -> Vec<Response> {
        replay(self.entries.iter(), sink)
    }
}

impl Default for EventRecorder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

/// Feeds `events` into `sink` in order, returning each dispatch response.
pub fn replay<'a>(
    events: impl IntoIterator<Item = &'a RecordedEvent>,
    sink: &mut impl EventSink,
) -> Vec<Response> {
    events
        .into_iter()
        .map(|recorded| sink.handle(&recorded.event))
        .collect()
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::*;
    use crate::event::WheelInput;

    fn wheel(t: f64) -> InputEvent {
        InputEvent::Wheel(WheelInput::new(Point::ORIGIN, Vec2::new(0.0, 1.0), t))
    }

    #[test]
    fn ring_buffer_evicts_oldest() {
        let mut rec = EventRecorder::new(2);
        rec.record(&wheel(1.0));
        rec.record(&wheel(2.0));
        rec.record(&wheel(3.0));
        let seqs: Vec<u64> = rec.entries().map(|e| e.seq).collect();
        assert_eq!(seqs, [1, 2]);
        assert_eq!(rec.len(), 2);
    }

    #[test]
    fn replay_feeds_sink_in_order() {
        struct Times(Vec<f64>);
        impl EventSink for Times {
            fn handle(&mut self, event: &InputEvent) -> Response {
                self.0.push(event.time());
                Response::default()
            }
        }

        let mut rec = EventRecorder::default();
        for t in [5.0, 6.0, 7.0] {
            rec.record(&wheel(t));
        }
        let mut sink = Times(Vec::new());
        let responses = rec.replay(&mut sink);
        assert_eq!(responses.len(), 3);
        assert_eq!(sink.0, [5.0, 6.0, 7.0]);
    }
}
