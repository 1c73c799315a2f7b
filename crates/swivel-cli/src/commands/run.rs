use std::io;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Args;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};
use tokio::sync::{mpsc, watch};
use tracing::debug;

use swivel_core::{AppConfig, CarouselService, DotsColor, DotsSize};
use swivel_tui::{
    app::{App, HitZones, Panel},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    widgets::{ArrowsWidget, DotsWidget, StatusBarWidget, ViewportWidget},
};

#[derive(Args, Default, Clone)]
pub struct RunArgs {
    /// Advance automatically on the configured interval
    #[arg(long)]
    pub autoplay: bool,

    /// Autoplay interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Hide the indicator dots
    #[arg(long)]
    pub no_dots: bool,

    /// Active dot color: default, primary, success, danger
    #[arg(long)]
    pub dots_color: Option<String>,

    /// Dot size: normal, small, large
    #[arg(long)]
    pub dots_size: Option<String>,

    /// Show prev/next arrow controls
    #[arg(long)]
    pub arrows: bool,
}

pub async fn run(mut config: AppConfig, args: RunArgs) -> Result<()> {
    apply_overrides(&mut config, &args)?;
    let config = Arc::new(config);

    let panels: Vec<Panel> = if config.panels.is_empty() {
        demo_panels()
    } else {
        config.panels.iter().map(Panel::from).collect()
    };
    debug!("Starting carousel with {} panels", panels.len());

    // Wire the carousel service to the UI
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let service = CarouselService::new(panels.len(), config.carousel.clone())?
        .with_event_sender(event_tx);
    let service_handle = tokio::spawn(service.run(command_rx, shutdown_rx));

    // Create app state
    let mut app = App::new(config.clone(), panels, command_tx)?;
    let keymap = Keymap::from_config(&config.keymap);
    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Swivel")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        // Apply carousel events delivered since the last frame (non-blocking)
        while let Ok(event) = event_rx.try_recv() {
            app.on_carousel_event(event);
        }

        // Advance the slide animation
        app.update_slide();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: viewport + dots row + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(size);

            // Optional arrow gutters beside the viewport
            let (left_arrow, viewport, right_arrow) = if app.config.carousel.arrows {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Min(1),
                        Constraint::Length(3),
                    ])
                    .split(main_layout[0]);
                (columns[0], columns[1], columns[2])
            } else {
                (Rect::default(), main_layout[0], Rect::default())
            };

            // The first draw doubles as the mount-time geometry probe;
            // later draws only re-send the width after a resize.
            app.probe_geometry(viewport);

            let dots = if app.config.carousel.dots {
                DotsWidget::layout(
                    main_layout[1],
                    app.panels.len(),
                    app.config.carousel.dots_size,
                )
            } else {
                Vec::new()
            };
            app.hit_zones = HitZones {
                viewport,
                left_arrow,
                right_arrow,
                dots,
            };

            // Render widgets
            ViewportWidget::render(frame, viewport, &app);
            ArrowsWidget::render(frame, left_arrow, right_arrow, &app);
            DotsWidget::render(frame, main_layout[1], &app);
            StatusBarWidget::render(frame, main_layout[2], &app);
        })?;

        // Handle events
        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &keymap);
                    app.handle_action(action);
                }
                AppEvent::Mouse(mouse) => app.on_mouse(mouse),
                AppEvent::Resize(_, _) => {
                    // The next draw re-probes geometry with the new width
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Stop the carousel before tearing down the terminal; this cancels
    // the autoplay timer and any pending corrective jump together.
    let _ = shutdown_tx.send(true);
    let _ = service_handle.await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn apply_overrides(config: &mut AppConfig, args: &RunArgs) -> Result<()> {
    if args.autoplay {
        config.carousel.autoplay = true;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.carousel.autoplay_interval_ms = interval_ms;
    }
    if args.no_dots {
        config.carousel.dots = false;
    }
    if let Some(ref color) = args.dots_color {
        config.carousel.dots_color = match color.as_str() {
            "default" => DotsColor::Default,
            "primary" => DotsColor::Primary,
            "success" => DotsColor::Success,
            "danger" => DotsColor::Danger,
            other => return Err(anyhow!("Unknown dots color: {}", other)),
        };
    }
    if let Some(ref size) = args.dots_size {
        config.carousel.dots_size = match size.as_str() {
            "normal" => DotsSize::Normal,
            "small" => DotsSize::Small,
            "large" => DotsSize::Large,
            other => return Err(anyhow!("Unknown dots size: {}", other)),
        };
    }
    if args.arrows {
        config.carousel.arrows = true;
    }
    Ok(())
}

fn demo_panels() -> Vec<Panel> {
    vec![
        Panel::new(
            "Welcome",
            "A looping carousel for the terminal.\n\nPanels slide left on command or on a timer\nand wrap around seamlessly.",
        ),
        Panel::new(
            "Navigate",
            "h / l or the arrow keys move between panels.\n\nDigits 1-9 jump straight to a panel,\nlike clicking an indicator dot.",
        ),
        Panel::new(
            "Autoplay",
            "Run with --autoplay to advance automatically.\n\nHovering the pointer over the viewport\npauses the rotation; leaving resumes it.",
        ),
        Panel::new(
            "Configure",
            "Colors, dots, arrows, keys, and panels\nlive in ~/.config/swivel/config.toml.\n\nStart from `swivel config init`.",
        ),
    ]
}
