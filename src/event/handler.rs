//! Event sources for the stats marquee.
//!
//! The handler owns the background tasks feeding its channel. They share one
//! cancellation token whose drop guard lives in the handler, so the terminal
//! poller and the frame clock stop on every path that drops the handler.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_stream::wrappers::IntervalStream;
use tokio_util::sync::{CancellationToken, DropGuard};

use super::{frame_interval, Event, EventDispatcher};

/// Stream of terminal and frame events.
pub struct EventHandler {
    /// Channel fed by the background tasks
    event_rx: mpsc::UnboundedReceiver<Event>,
    /// Token shared with the background tasks
    token: CancellationToken,
    /// Cancels the background tasks when the handler is dropped
    _guard: DropGuard,
}

impl EventHandler {
    /// Create a handler polling the terminal and ticking frames at
    /// `frame_rate_hz`.
    pub fn new(frame_rate_hz: u32) -> Self {
        Self::spawn(frame_rate_hz, true)
    }

    /// Create a handler that only produces [`Event::Frame`]s.
    pub fn frame_clock_only(frame_rate_hz: u32) -> Self {
        Self::spawn(frame_rate_hz, false)
    }

    fn spawn(frame_rate_hz: u32, poll_terminal: bool) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();

        if poll_terminal {
            spawn_terminal_poller(tx.clone(), token.child_token());
        }
        spawn_frame_clock(tx, frame_interval(frame_rate_hz), token.child_token());

        Self {
            event_rx: rx,
            _guard: token.clone().drop_guard(),
            token,
        }
    }

    /// Token cancelled when this handler is dropped.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    fn poll_event(&mut self, cx: &mut Context<'_>) -> Poll<Option<Event>> {
        Pin::new(&mut self.event_rx).poll_recv(cx)
    }
}

fn spawn_frame_clock(tx: mpsc::UnboundedSender<Event>, period: Duration, token: CancellationToken) {
    tokio::spawn(async move {
        let start = Instant::now();
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut ticks = IntervalStream::new(interval);

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                tick = ticks.next() => {
                    let Some(instant) = tick else { break };
                    let timestamp_ms = instant.duration_since(start).as_secs_f64() * 1000.0;
                    if tx.send(Event::Frame(timestamp_ms)).is_err() {
                        break;
                    }
                }
            }
        }

        tracing::debug!("frame clock stopped");
    });
}

fn spawn_terminal_poller(tx: mpsc::UnboundedSender<Event>, token: CancellationToken) {
    tokio::task::spawn_blocking(move || {
        let dispatcher = EventDispatcher::new();
        while !token.is_cancelled() {
            match dispatcher.next() {
                Ok(Some(event)) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "terminal poll failed");
                    std::thread::sleep(Duration::from_millis(10));
                }
            }
        }

        tracing::debug!("terminal poller stopped");
    });
}

// Stream for EventHandler
impl Stream for EventHandler {
    type Item = Event;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.poll_event(cx)
    }
}
