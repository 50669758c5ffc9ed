//! Key handling for the demo views.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::binding::ambient_dispatch;
use crate::store::StoreError;
use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if matches!(key.code, KeyCode::Char('q')) || is_ctrl_char(key, 'c') {
        app.request_quit();
        return Ok(());
    }

    if app.is_authenticated() {
        handle_counter_key(app, key)
    } else {
        handle_login_key(app, key)
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    if matches!(key.code, KeyCode::Enter) {
        ambient_dispatch(app.actions().login.create())?;
        app.clear_status();
    }
    Ok(())
}

fn handle_counter_key(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    match key.code {
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('k') => {
            ambient_dispatch(app.actions().increase.create())?;
            app.clear_status();
        }
        KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('j') => {
            // View-level floor. The reducer itself allows negatives.
            if app.counter() == 0 {
                debug!("decrease refused at zero");
                app.set_status("Counter is already at zero");
            } else {
                ambient_dispatch(app.actions().decrease.create())?;
                app.clear_status();
            }
        }
        KeyCode::Esc => {
            ambient_dispatch(app.actions().logout.create())?;
            app.clear_status();
        }
        _ => {}
    }
    Ok(())
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
