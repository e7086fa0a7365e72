use std::time::Duration;

use pomodoro_core::storage::UiConfig;
use pomodoro_core::{IntervalTickSource, Preset, TimerEngine, TimerView};
use tokio::sync::mpsc;

use super::event::{AppEvent, EventHandler};
use super::keys::{map_key, KeyAction};
use super::mount;
use super::shell::ShellStyle;
use super::Tui;

/// How often the input thread checks whether the loop is still listening.
const INPUT_POLL: Duration = Duration::from_millis(100);

#[derive(Debug)]
enum Step {
    Tick,
    Input(AppEvent),
    InputClosed,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Widget loop: redraw, then wait for either a tick or a key.
///
/// The engine holds the only tick subscription; it is released on pause, at
/// every phase boundary and when the engine is dropped on exit.
pub async fn run(
    terminal: &mut Tui,
    preset: Preset,
    ui: &UiConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let style = ShellStyle::from_config(ui);
    let mut engine = TimerEngine::new(preset, IntervalTickSource::default());
    let mut input = EventHandler::new(INPUT_POLL);

    loop {
        let view = TimerView::from_state(engine.state());
        terminal.draw(|frame| mount::render(frame, &view, &style))?;

        let step = next_step(&mut engine, input.receiver_mut()).await;
        if handle_step(&mut engine, step) == Flow::Quit {
            break;
        }
    }

    Ok(())
}

/// Wait for whichever comes first. While the timer is paused the tick branch
/// never resolves, so only input can wake the loop.
async fn next_step(
    engine: &mut TimerEngine<IntervalTickSource>,
    input: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Step {
    tokio::select! {
        _ = engine.ticks_mut().next_tick() => Step::Tick,
        event = input.recv() => event.map(Step::Input).unwrap_or(Step::InputClosed),
    }
}

fn handle_step(engine: &mut TimerEngine<IntervalTickSource>, step: Step) -> Flow {
    match step {
        Step::Tick => {
            if let Some(event) = engine.tick() {
                tracing::trace!(?event, "tick");
            }
        }
        Step::Input(AppEvent::Key(key)) => match map_key(key, engine.state().preset()) {
            Some(KeyAction::Dispatch(intent)) => {
                tracing::debug!(?intent, "user intent");
                engine.dispatch(intent);
            }
            Some(KeyAction::Quit) => return Flow::Quit,
            None => {}
        },
        Step::Input(AppEvent::Resize(width, height)) => {
            tracing::debug!(width, height, "terminal resized");
        }
        Step::InputClosed => {
            tracing::warn!("terminal input closed, unmounting");
            return Flow::Quit;
        }
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::time::timeout;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_only_arrive_while_running() {
        let mut engine = TimerEngine::new(Preset::Short, IntervalTickSource::default());
        let (tx, mut rx) = mpsc::unbounded_channel();

        // Idle: nothing wakes the loop.
        assert!(timeout(Duration::from_secs(5), next_step(&mut engine, &mut rx))
            .await
            .is_err());

        tx.send(key(KeyCode::Char(' '))).unwrap();
        let step = next_step(&mut engine, &mut rx).await;
        assert!(matches!(step, Step::Input(_)));
        assert_eq!(handle_step(&mut engine, step), Flow::Continue);
        assert!(engine.state().is_active());

        let step = next_step(&mut engine, &mut rx).await;
        assert!(matches!(step, Step::Tick));
        handle_step(&mut engine, step);
        assert_eq!(engine.state().time_left(), 1499);

        tx.send(key(KeyCode::Char(' '))).unwrap();
        let step = next_step(&mut engine, &mut rx).await;
        handle_step(&mut engine, step);
        assert!(!engine.state().is_active());

        // Paused: no tick for well over a period.
        assert!(timeout(Duration::from_secs(10), next_step(&mut engine, &mut rx))
            .await
            .is_err());
        assert_eq!(engine.state().time_left(), 1499);

        tx.send(key(KeyCode::Char('q'))).unwrap();
        let step = next_step(&mut engine, &mut rx).await;
        assert_eq!(handle_step(&mut engine, step), Flow::Quit);
    }

    #[tokio::test(start_paused = true)]
    async fn closed_input_unmounts() {
        let mut engine = TimerEngine::new(Preset::Short, IntervalTickSource::default());
        let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
        drop(tx);

        let step = next_step(&mut engine, &mut rx).await;
        assert!(matches!(step, Step::InputClosed));
        assert_eq!(handle_step(&mut engine, step), Flow::Quit);
    }
}
