use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    r#loop::TICK_RATE,
    state::AppState,
};
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Tick => return tick(state),
        Action::LaunchFinished(id, outcome) => {
            if let Some(error) = state.dispatcher.finish(id, outcome) {
                state.push_notification(error);
            }
            return None;
        }
        _ => {}
    }

    let features: [fn(&mut AppState, &Action) -> UpdateResult; 4] = [
        features::ui::update,
        features::navigation::update,
        features::search::update,
        features::system::update,
    ];
    for feature in features {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }

    tracing::trace!(?action, "unhandled action");
    None
}

fn tick(state: &mut AppState) -> Option<Command> {
    state.frame_count = state.frame_count.wrapping_add(1);
    state.header.set_clock(chrono::Local::now());

    // Status messages fade after a few seconds.
    if state.status_message.is_some() {
        let now = Instant::now();
        match state.status_clear_time {
            None => state.status_clear_time = Some(now + STATUS_TTL),
            Some(at) if now >= at => {
                state.status_message = None;
                state.status_clear_time = None;
            }
            Some(_) => {}
        }
    }

    if let Some(command) = features::ui::advance_splash(state) {
        return Some(command);
    }

    if state.frame_count % ticks_per_refresh(state.settings.stats.interval_secs) == 1 {
        return Some(Command::RefreshStats);
    }
    None
}

fn ticks_per_refresh(interval_secs: u64) -> u64 {
    let tick_ms = TICK_RATE.as_millis() as u64;
    (interval_secs.saturating_mul(1000) / tick_ms).max(2)
}
