use crate::app::{
    action::Action, command::Command, features, input::map_event_to_action, reducer,
    state::AppState, ui,
};
use crate::domain::launcher::Collaborators;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

pub const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    collaborators: Collaborators,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, collaborators, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    collaborators: Collaborators,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        if app_state.should_quit {
            break;
        }

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Some(command) = reducer::update(&mut app_state, action) {
                handle_command(command, &collaborators, action_tx.clone())?;
            }
        }
    }

    shutdown(terminal, &mut app_state, &mut action_rx).await
}

// Every active launch is asked to stop; the loop returns once all of their
// completions have come back.
async fn shutdown<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    action_rx: &mut mpsc::Receiver<Action>,
) -> Result<()> {
    let signalled = app_state.dispatcher.shutdown();
    tracing::info!(signalled, "shutting down");

    let mut interval = interval(TICK_RATE);
    while app_state.dispatcher.active_count() > 0 {
        terminal.draw(|f| {
            ui::draw(f, app_state);
        })?;

        tokio::select! {
            _ = interval.tick() => {}
            received = action_rx.recv() => match received {
                Some(action @ Action::LaunchFinished(..)) => {
                    reducer::update(app_state, action);
                }
                Some(_) => {}
                None => break,
            },
        }
    }

    tracing::info!("all launches stopped");
    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    collaborators: &Collaborators,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    features::handler::handle_command(command, collaborators, tx)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
