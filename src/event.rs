use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

pub enum AppEvent {
    Key(KeyEvent),
    /// Text delivered in one piece by bracketed paste.
    Paste(String),
    Tick,
    Resize,
}

/// Reads terminal events on a background thread and hands them to the UI
/// loop one at a time.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let _tx = tx.clone();

        thread::spawn(move || {
            loop {
                let next = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                        Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                        Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
                        Ok(_) => None,
                        Err(err) => {
                            tracing::warn!("terminal event read failed: {err}");
                            None
                        }
                    }
                } else {
                    Some(AppEvent::Tick)
                };

                if let Some(app_event) = next {
                    if tx.send(app_event).is_err() {
                        return;
                    }
                }
            }
        });

        Self { rx, _tx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}
