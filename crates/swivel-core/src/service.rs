//! Carousel driver service.
//!
//! Runs the index state machine behind a single command queue: external
//! commands (next/prev/jump, geometry, hover pause/resume), the autoplay
//! timer, and the one-shot corrective jump all pass through one
//! `tokio::select!` loop, so transitions are applied strictly one at a
//! time in arrival order.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use crate::config::CarouselConfig;
use crate::machine::{Carousel, Correction, Transition};
use crate::translate::TranslationCommand;
use crate::Result;

/// Commands accepted by the service, from whichever surface drives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselCommand {
    Next,
    Prev,
    /// Jump straight to a real index (dot click)
    JumpTo(usize),
    /// Deliver the measured viewport width; the first call triggers the
    /// initial silent translation, later calls serve resizes
    SetViewportWidth(f32),
    /// Hover entered the viewport: suspend autoplay
    PauseAutoplay,
    /// Hover left the viewport: restart autoplay, cadence from now
    ResumeAutoplay,
}

/// Events emitted to the presentation layer after each applied change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// A translation to apply to the strip
    Moved(TranslationCommand),
    /// The index settled on a real panel
    Changed { current: usize, previous: usize },
    /// Autoplay started or stopped (config, hover, or teardown)
    Autoplay { running: bool },
}

/// Owns a [`Carousel`] and drives it from a command queue.
///
/// The panel set is fixed for the service's lifetime; hosts that need a
/// different set build a new service.
pub struct CarouselService {
    carousel: Carousel,
    config: CarouselConfig,
    event_tx: Option<mpsc::UnboundedSender<CarouselEvent>>,
}

impl CarouselService {
    pub fn new(panel_count: usize, config: CarouselConfig) -> Result<Self> {
        Ok(Self {
            carousel: Carousel::new(panel_count)?,
            config,
            event_tx: None,
        })
    }

    /// Set the event sender for UI notifications
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<CarouselEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// Send an event to the UI (if event channel is configured)
    fn send_event(&self, event: CarouselEvent) {
        if let Some(ref tx) = self.event_tx {
            if tx.send(event).is_err() {
                warn!("Failed to send carousel event: receiver dropped");
            }
        }
    }

    /// Process commands until the queue closes or shutdown is signalled.
    pub async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<CarouselCommand>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let period = Duration::from_millis(self.config.autoplay_interval_ms.max(1));

        // At most one autoplay deadline and one pending correction exist
        // at any time; both live here so teardown drops them together.
        let mut autoplay_due: Option<Instant> = None;
        let mut correction: Option<(Instant, Correction)> = None;

        if self.config.autoplay {
            autoplay_due = Some(Instant::now() + period);
            self.send_event(CarouselEvent::Autoplay { running: true });
        }

        info!(
            "Carousel started: {} panels, autoplay={} ({}ms)",
            self.carousel.track().real_len(),
            self.config.autoplay,
            self.config.autoplay_interval_ms
        );

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        info!("Carousel received shutdown signal");
                        break;
                    }
                }

                command = commands.recv() => {
                    let Some(command) = command else { break };
                    self.handle_command(command, &mut autoplay_due, &mut correction, period);
                }

                _ = time::sleep_until(autoplay_due.unwrap_or_else(Instant::now)), if autoplay_due.is_some() => {
                    debug!("Autoplay tick");
                    autoplay_due = Some(Instant::now() + period);
                    self.step(1, &mut correction);
                }

                _ = time::sleep_until(correction.map(|(due, _)| due).unwrap_or_else(Instant::now)), if correction.is_some() => {
                    if let Some((_, pending)) = correction.take() {
                        let settled = self.carousel.correct(pending);
                        self.emit(settled);
                    }
                }
            }
        }

        info!("Carousel stopped");
    }

    fn handle_command(
        &mut self,
        command: CarouselCommand,
        autoplay_due: &mut Option<Instant>,
        correction: &mut Option<(Instant, Correction)>,
        period: Duration,
    ) {
        match command {
            CarouselCommand::Next => self.step(1, correction),
            CarouselCommand::Prev => self.step(-1, correction),
            CarouselCommand::JumpTo(real) => {
                self.fold_pending_correction(correction);
                *correction = self
                    .carousel
                    .jump_to(real)
                    .and_then(|t| self.emit(t))
                    .map(|c| (Instant::now() + c.delay, c));
            }
            CarouselCommand::SetViewportWidth(width) => {
                let command = self.carousel.measure(width);
                self.send_event(CarouselEvent::Moved(command));
            }
            CarouselCommand::PauseAutoplay => {
                // Dropping the deadline is the pause: no tick can slip out
                // afterwards. Pausing a stopped driver is a no-op.
                if self.config.autoplay && autoplay_due.take().is_some() {
                    self.send_event(CarouselEvent::Autoplay { running: false });
                }
            }
            CarouselCommand::ResumeAutoplay => {
                if self.config.autoplay && autoplay_due.is_none() {
                    *autoplay_due = Some(Instant::now() + period);
                    self.send_event(CarouselEvent::Autoplay { running: true });
                }
            }
        }
    }

    /// Step the machine. A queued correction folds in first, so
    /// transitions stay serialized and the index never escapes the
    /// padded range.
    fn step(&mut self, delta: i32, correction: &mut Option<(Instant, Correction)>) {
        self.fold_pending_correction(correction);
        *correction = self
            .carousel
            .advance(delta)
            .and_then(|t| self.emit(t))
            .map(|c| (Instant::now() + c.delay, c));
    }

    /// Emit the transition's events; hand back the correction to schedule.
    fn emit(&self, transition: Transition) -> Option<Correction> {
        self.send_event(CarouselEvent::Moved(transition.command));
        if let Some(change) = transition.change {
            self.send_event(CarouselEvent::Changed {
                current: change.current,
                previous: change.previous,
            });
        }
        transition.correction
    }

    /// Corrections land on real slots, so folding never chains.
    fn fold_pending_correction(&mut self, correction: &mut Option<(Instant, Correction)>) {
        if let Some((_, pending)) = correction.take() {
            let settled = self.carousel.correct(pending);
            self.emit(settled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Harness {
        commands: mpsc::UnboundedSender<CarouselCommand>,
        events: mpsc::UnboundedReceiver<CarouselEvent>,
        shutdown: watch::Sender<bool>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn spawn(panel_count: usize, config: CarouselConfig) -> Harness {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let service = CarouselService::new(panel_count, config)
            .unwrap()
            .with_event_sender(event_tx);
        let handle = tokio::spawn(service.run(cmd_rx, shutdown_rx));

        Harness {
            commands: cmd_tx,
            events: event_rx,
            shutdown: shutdown_tx,
            handle,
        }
    }

    fn autoplay_config(interval_ms: u64) -> CarouselConfig {
        CarouselConfig {
            autoplay: true,
            autoplay_interval_ms: interval_ms,
            ..CarouselConfig::default()
        }
    }

    fn drain(events: &mut mpsc::UnboundedReceiver<CarouselEvent>) -> Vec<CarouselEvent> {
        let mut out = Vec::new();
        while let Ok(event) = events.try_recv() {
            out.push(event);
        }
        out
    }

    fn moved_count(events: &[CarouselEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, CarouselEvent::Moved(_)))
            .count()
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_measurement_translates_silently() {
        let mut harness = spawn(3, CarouselConfig::default());

        harness
            .commands
            .send(CarouselCommand::SetViewportWidth(300.0))
            .unwrap();
        time::sleep(Duration::from_millis(1)).await;

        let events = drain(&mut harness.events);
        assert_eq!(events.len(), 1);
        match events[0] {
            CarouselEvent::Moved(command) => {
                assert!(command.is_silent());
                assert_eq!(command.offset_px, -600.0);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_cadence() {
        let mut harness = spawn(3, autoplay_config(3000));

        time::sleep(Duration::from_millis(2900)).await;
        let events = drain(&mut harness.events);
        assert_eq!(moved_count(&events), 0);

        time::sleep(Duration::from_millis(200)).await;
        let events = drain(&mut harness.events);
        assert_eq!(moved_count(&events), 1);
        assert!(events.contains(&CarouselEvent::Changed {
            current: 1,
            previous: 0
        }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hover_pause_restarts_cadence_from_resume() {
        let mut harness = spawn(3, autoplay_config(3000));

        time::sleep(Duration::from_millis(1000)).await;
        harness.commands.send(CarouselCommand::PauseAutoplay).unwrap();
        time::sleep(Duration::from_millis(500)).await;
        harness.commands.send(CarouselCommand::ResumeAutoplay).unwrap();

        // 2.9s after resume: the pre-pause tick must not have slipped out.
        time::sleep(Duration::from_millis(2900)).await;
        let events = drain(&mut harness.events);
        assert_eq!(moved_count(&events), 0);

        time::sleep(Duration::from_millis(200)).await;
        let events = drain(&mut harness.events);
        assert_eq!(moved_count(&events), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_is_idempotent() {
        let mut harness = spawn(3, autoplay_config(3000));

        harness.commands.send(CarouselCommand::PauseAutoplay).unwrap();
        harness.commands.send(CarouselCommand::PauseAutoplay).unwrap();
        time::sleep(Duration::from_millis(1)).await;

        let events = drain(&mut harness.events);
        let stops = events
            .iter()
            .filter(|e| matches!(e, CarouselEvent::Autoplay { running: false }))
            .count();
        assert_eq!(stops, 1);

        // The service is still alive and responsive.
        harness.commands.send(CarouselCommand::Next).unwrap();
        time::sleep(Duration::from_millis(1)).await;
        assert_eq!(moved_count(&drain(&mut harness.events)), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_without_autoplay_is_a_no_op() {
        let mut harness = spawn(3, CarouselConfig::default());

        harness.commands.send(CarouselCommand::PauseAutoplay).unwrap();
        harness.commands.send(CarouselCommand::ResumeAutoplay).unwrap();
        time::sleep(Duration::from_millis(1)).await;

        assert!(drain(&mut harness.events).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrap_settles_after_slide_duration() {
        let mut harness = spawn(3, CarouselConfig::default());

        harness.commands.send(CarouselCommand::JumpTo(2)).unwrap();
        harness.commands.send(CarouselCommand::Next).unwrap();
        time::sleep(Duration::from_millis(100)).await;

        // Jump reported; the clone landing is provisional.
        let events = drain(&mut harness.events);
        assert!(events.contains(&CarouselEvent::Changed {
            current: 2,
            previous: 0
        }));
        assert!(!events
            .iter()
            .any(|e| matches!(e, CarouselEvent::Changed { current: 0, .. })));

        // After the slide elapses the corrective snap settles at real 0.
        time::sleep(Duration::from_millis(250)).await;
        let events = drain(&mut harness.events);
        assert!(events.contains(&CarouselEvent::Changed {
            current: 0,
            previous: 2
        }));
        match events[0] {
            CarouselEvent::Moved(command) => assert!(command.is_silent()),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_command_folds_pending_correction() {
        let mut harness = spawn(3, CarouselConfig::default());

        harness.commands.send(CarouselCommand::JumpTo(2)).unwrap();
        harness.commands.send(CarouselCommand::Next).unwrap();
        // Prev arrives well inside the 300ms correction window.
        harness.commands.send(CarouselCommand::Prev).unwrap();
        time::sleep(Duration::from_millis(1)).await;

        let events = drain(&mut harness.events);
        // The fold settles the wrap at real 0 before prev is applied.
        assert!(events.contains(&CarouselEvent::Changed {
            current: 0,
            previous: 2
        }));

        // Prev from real 0 heads into the head clone; its correction
        // settles at the last real panel.
        time::sleep(Duration::from_millis(350)).await;
        let events = drain(&mut harness.events);
        assert!(events.contains(&CarouselEvent::Changed {
            current: 2,
            previous: 0
        }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_timers() {
        let mut harness = spawn(3, autoplay_config(1000));

        harness.commands.send(CarouselCommand::JumpTo(2)).unwrap();
        harness.commands.send(CarouselCommand::Next).unwrap();
        time::sleep(Duration::from_millis(10)).await;
        drain(&mut harness.events);

        harness.shutdown.send(true).unwrap();
        harness.handle.await.unwrap();

        // Neither the pending correction nor the autoplay timer fired
        // after teardown.
        time::sleep(Duration::from_millis(5000)).await;
        assert!(drain(&mut harness.events).is_empty());
    }
}
