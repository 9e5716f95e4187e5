//! tallypad entry point
//!
//! Wires the layers together: parses the CLI, loads display settings,
//! acquires the terminal and runs the synchronous event loop. Each
//! input event is fully handled (state mutation plus redraw) before the
//! next one is read.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tallypad::app::{AppController, ControlFlow};
use tallypad::config::{DisplaySettings, LeadingZeroMode};
use tallypad::input;
use tallypad::platform::{TerminalGuard, install_panic_hook};
use tallypad::ui;

#[derive(Debug, Parser)]
#[command(
    name = "tallypad",
    about = "A keyboard-driven pocket calculator for the terminal"
)]
struct Cli {
    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore a second leading zero during entry
    #[arg(long)]
    suppress_leading_zeros: bool,

    /// Show "0" on the current line when nothing is entered
    #[arg(long)]
    show_idle_zero: bool,

    /// Do not capture mouse events (keyboard only)
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        anyhow::bail!("tallypad needs an interactive terminal (TTY)");
    }

    let mut settings =
        DisplaySettings::load(cli.config.as_deref()).context("loading configuration")?;
    if cli.suppress_leading_zeros {
        settings.leading_zeros = LeadingZeroMode::Suppress;
    }
    if cli.show_idle_zero {
        settings.show_idle_zero = true;
    }
    tracing::debug!(?settings, "starting");

    install_panic_hook();
    let mut guard = TerminalGuard::new(!cli.no_mouse)?;
    let mut controller = AppController::new(settings);

    run(&mut guard, &mut controller)
}

/// The synchronous event loop: draw, block on one event, apply, repeat
fn run(guard: &mut TerminalGuard, controller: &mut AppController) -> anyhow::Result<()> {
    loop {
        let display = controller.display_frame();

        // The keypad is rebuilt from the drawn layout so mouse
        // hit-testing always matches what is on screen, including after
        // a resize.
        let mut keypad = ui::Keypad::default();
        guard.terminal().draw(|frame| {
            let layout = ui::split(frame.area());
            keypad = ui::Keypad::layout(layout.keypad);
            ui::draw(frame, &display, &keypad, &layout);
        })?;

        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = input::map_key_event(&key) {
                    if controller.handle_action(action) == ControlFlow::Quit {
                        return Ok(());
                    }
                }
            }
            Event::Mouse(mouse) => {
                if let Some(command) = input::map_mouse_event(&mouse, &keypad) {
                    controller.handle_command(command);
                }
            }
            // Redrawn at the top of the next iteration
            Event::Resize(..) => {}
            _ => {}
        }
    }
}
