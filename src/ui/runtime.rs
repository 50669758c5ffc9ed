use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::binding::provide;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::slices::demo_setup;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: &Config) -> Result<()> {
    let (store, actions) = demo_setup(config.demo.initial_counter)?;
    let mut app = App::new(&store, actions)?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.demo.tick_ms);
    let events = EventHandler::new(tick_rate);
    info!(tick_ms = config.demo.tick_ms, "demo started");

    let result = provide(&store, || -> Result<()> {
        loop {
            if app.take_dirty() {
                terminal.draw(|frame| draw(frame, &app))?;
            }

            match events.next(tick_rate) {
                Ok(AppEvent::Key(key)) => handle_key(&mut app, key)?,
                Ok(AppEvent::Tick) => {}
                Ok(AppEvent::Resize) => app.mark_dirty(),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if app.should_quit() {
                break;
            }
        }
        Ok(())
    });

    drop(guard);
    info!("demo stopped");
    result
}
