use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::event::TickKind;

/// Raw terminal happenings plus both recurring clocks, multiplexed onto one
/// channel so the main loop consumes everything in arrival order.
#[derive(Clone, Debug)]
pub enum PumpEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick(TickKind),
    Resize,
}

pub struct EventPump {
    rx: mpsc::UnboundedReceiver<PumpEvent>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventPump {
    pub fn new(metrics_rate: Duration, raise_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<PumpEvent>();

        let task = tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            let mut metrics_interval = tokio::time::interval(metrics_rate);
            let mut raise_interval = tokio::time::interval(raise_rate);

            loop {
                tokio::select! {
                    maybe_event = reader.next() => {
                        match maybe_event {
                            Some(Ok(evt)) => {
                                let mapped = match evt {
                                    CrosstermEvent::Key(key) => Some(PumpEvent::Key(key)),
                                    CrosstermEvent::Mouse(mouse) => Some(PumpEvent::Mouse(mouse)),
                                    CrosstermEvent::Resize(_, _) => Some(PumpEvent::Resize),
                                    _ => None,
                                };
                                if let Some(e) = mapped
                                    && tx.send(e).is_err()
                                {
                                    break;
                                }
                            }
                            Some(Err(_)) => break,
                            None => break,
                        }
                    }
                    _ = metrics_interval.tick() => {
                        if tx.send(PumpEvent::Tick(TickKind::Metrics)).is_err() {
                            break;
                        }
                    }
                    _ = raise_interval.tick() => {
                        if tx.send(PumpEvent::Tick(TickKind::Raise)).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, _task: task }
    }

    pub async fn next(&mut self) -> Option<PumpEvent> {
        self.rx.recv().await
    }
}
