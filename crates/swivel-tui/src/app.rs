use std::sync::Arc;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use swivel_core::{AppConfig, CarouselCommand, CarouselEvent, PaddedTrack, PanelConfig};

use crate::geometry;
use crate::input::Action;
use crate::slide::SlideAnimator;

/// A renderable panel. The carousel core never sees its content; it only
/// counts ordinals.
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub body: Vec<String>,
}

impl Panel {
    pub fn new(title: impl Into<String>, body: &str) -> Self {
        Self {
            title: title.into(),
            body: body.lines().map(str::to_string).collect(),
        }
    }
}

impl From<&PanelConfig> for Panel {
    fn from(config: &PanelConfig) -> Self {
        Self::new(config.title.clone(), &config.body)
    }
}

/// Mouse hit zones recorded during the last draw
#[derive(Debug, Clone, Default)]
pub struct HitZones {
    pub viewport: Rect,
    pub left_arrow: Rect,
    pub right_arrow: Rect,
    pub dots: Vec<Rect>,
}

/// Application state for the carousel UI
pub struct App {
    pub config: Arc<AppConfig>,
    pub panels: Vec<Panel>,
    /// Padded layout order as real ordinals: `[n-1, 0, 1, ..., n-1, 0]`
    pub render_order: Vec<usize>,
    /// Last settled real index (drives dots and the status bar)
    pub current: usize,
    pub previous: Option<usize>,
    pub slide: SlideAnimator,
    pub unit_width: f32,
    pub autoplay_running: bool,
    pub hovering: bool,
    pub hit_zones: HitZones,
    pub should_quit: bool,
    measured: bool,
    commands: mpsc::UnboundedSender<CarouselCommand>,
}

impl App {
    pub fn new(
        config: Arc<AppConfig>,
        panels: Vec<Panel>,
        commands: mpsc::UnboundedSender<CarouselCommand>,
    ) -> anyhow::Result<Self> {
        let track = PaddedTrack::new(panels.len())?;
        Ok(Self {
            config,
            panels,
            render_order: track.render_order(),
            current: 0,
            previous: None,
            slide: SlideAnimator::new(),
            unit_width: 0.0,
            autoplay_running: false,
            hovering: false,
            hit_zones: HitZones::default(),
            should_quit: false,
            measured: false,
            commands,
        })
    }

    fn send(&self, command: CarouselCommand) {
        if self.commands.send(command).is_err() {
            warn!("Carousel service gone, dropping {:?}", command);
        }
    }

    /// Probe the viewport width at draw time. The first call delivers the
    /// mount measurement (triggering the initial silent translation);
    /// later calls only fire when a resize changed the width.
    pub fn probe_geometry(&mut self, viewport: Rect) {
        let width = geometry::unit_width(viewport);
        if !self.measured || (width - self.unit_width).abs() > f32::EPSILON {
            self.measured = true;
            self.unit_width = width;
            self.send(CarouselCommand::SetViewportWidth(width));
        }
    }

    /// Advance the slide animation; call once per loop iteration
    pub fn update_slide(&mut self) -> f32 {
        self.slide.update()
    }

    /// Apply an event from the carousel service
    pub fn on_carousel_event(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Moved(command) => self.slide.apply(&command),
            CarouselEvent::Changed { current, previous } => {
                debug!("Settled on panel {} (from {})", current, previous);
                self.previous = Some(previous);
                self.current = current;
            }
            CarouselEvent::Autoplay { running } => self.autoplay_running = running,
        }
    }

    /// Apply a keyboard action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Next => self.send(CarouselCommand::Next),
            Action::Prev => self.send(CarouselCommand::Prev),
            Action::JumpTo(real) => self.send(CarouselCommand::JumpTo(real)),
            Action::ToggleAutoplay => {
                if self.autoplay_running {
                    self.send(CarouselCommand::PauseAutoplay);
                } else {
                    self.send(CarouselCommand::ResumeAutoplay);
                }
            }
            Action::None => {}
        }
    }

    /// Hover tracking and click dispatch against the recorded hit zones
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                let inside = self.hit_zones.viewport.contains(position);
                if inside != self.hovering {
                    self.hovering = inside;
                    if inside {
                        self.send(CarouselCommand::PauseAutoplay);
                    } else {
                        self.send(CarouselCommand::ResumeAutoplay);
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(real) = self
                    .hit_zones
                    .dots
                    .iter()
                    .position(|dot| dot.contains(position))
                {
                    self.send(CarouselCommand::JumpTo(real));
                } else if self.hit_zones.left_arrow.contains(position) {
                    self.send(CarouselCommand::Prev);
                } else if self.hit_zones.right_arrow.contains(position) {
                    self.send(CarouselCommand::Next);
                }
            }
            _ => {}
        }
    }
}
