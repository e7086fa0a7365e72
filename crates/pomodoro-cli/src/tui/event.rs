use std::thread::JoinHandle;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

/// Terminal input consumed by the widget loop.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal was resized; the next frame picks up the new size.
    Resize(u16, u16),
}

/// Polls crossterm on a background thread and forwards input to the loop.
///
/// The thread exits once the receiving side is dropped.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    _handle: JoinHandle<()>,
}

impl EventHandler {
    pub fn new(poll_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = std::thread::spawn(move || loop {
            if event::poll(poll_rate).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(w, h)) => tx.send(AppEvent::Resize(w, h)),
                    _ => Ok(()),
                };
                if forwarded.is_err() {
                    return;
                }
            } else if tx.is_closed() {
                return;
            }
        });

        Self {
            rx,
            _handle: handle,
        }
    }

    /// Receiving end of the input channel. Yields `None` once the reader
    /// thread has stopped.
    pub fn receiver_mut(&mut self) -> &mut mpsc::UnboundedReceiver<AppEvent> {
        &mut self.rx
    }
}
