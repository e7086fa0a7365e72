use pomodoro_core::{Intent, Preset};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Intent),
    Quit,
}

/// Map a key press to what the widget should do. `current` is the selected
/// preset, needed for left/right cycling.
pub fn map_key(key: KeyEvent, current: Preset) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }

    let intent = match key.code {
        KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Enter => Intent::Toggle,
        KeyCode::Char('r') => Intent::Reset,
        KeyCode::Char('1') => Intent::SelectPreset(Preset::Short),
        KeyCode::Char('2') => Intent::SelectPreset(Preset::Medium),
        KeyCode::Char('3') => Intent::SelectPreset(Preset::Long),
        KeyCode::Right | KeyCode::Tab => Intent::SelectPreset(current.next()),
        KeyCode::Left | KeyCode::BackTab => Intent::SelectPreset(current.previous()),
        KeyCode::Char('q') | KeyCode::Esc => return Some(KeyAction::Quit),
        _ => return None,
    };
    Some(KeyAction::Dispatch(intent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn space_toggles() {
        assert_eq!(
            map_key(press(KeyCode::Char(' ')), Preset::Short),
            Some(KeyAction::Dispatch(Intent::Toggle))
        );
    }

    #[test]
    fn digits_select_presets() {
        assert_eq!(
            map_key(press(KeyCode::Char('3')), Preset::Short),
            Some(KeyAction::Dispatch(Intent::SelectPreset(Preset::Long)))
        );
    }

    #[test]
    fn arrows_cycle_from_current() {
        assert_eq!(
            map_key(press(KeyCode::Right), Preset::Long),
            Some(KeyAction::Dispatch(Intent::SelectPreset(Preset::Short)))
        );
        assert_eq!(
            map_key(press(KeyCode::Left), Preset::Medium),
            Some(KeyAction::Dispatch(Intent::SelectPreset(Preset::Short)))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q')), Preset::Short), Some(KeyAction::Quit));
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                Preset::Short
            ),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn releases_and_unbound_keys_are_ignored() {
        let mut release = press(KeyCode::Char('r'));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release, Preset::Short), None);
        assert_eq!(map_key(press(KeyCode::Char('x')), Preset::Short), None);
    }
}
