//! Presentation model.
//!
//! [`TimerView`] is everything the widget shows, computed from a
//! [`TimerState`] alone. Renderers draw it; they never read the state.

use serde::Serialize;

use crate::timer::{Preset, TimerState, CYCLES_PER_SET};

pub const TITLE: &str = "Pomodoro Timer";

/// One entry of the preset selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetOption {
    pub preset: Preset,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerView {
    /// `MM:SS`, both fields zero-padded to two digits.
    pub time_text: String,
    pub fill_percentage: f64,
    pub phase_label: &'static str,
    pub cycle_label: String,
    pub toggle_label: &'static str,
    pub reset_label: &'static str,
    pub message: String,
    pub presets: Vec<PresetOption>,
}

impl TimerView {
    pub fn from_state(state: &TimerState) -> Self {
        Self {
            time_text: format_clock(state.time_left()),
            fill_percentage: state.fill_percentage(),
            phase_label: state.phase().label(),
            cycle_label: format!("Cycle: {} / {}", state.cycle_count() + 1, CYCLES_PER_SET),
            toggle_label: if state.is_active() { "Pause" } else { "Start" },
            reset_label: "Reset",
            message: state.message().to_string(),
            presets: Preset::ALL
                .iter()
                .map(|&preset| PresetOption {
                    preset,
                    label: preset.label(),
                    selected: preset == state.preset(),
                })
                .collect(),
        }
    }

    /// Fill as a 0.0..=1.0 ratio, for gauges.
    pub fn fill_ratio(&self) -> f64 {
        (self.fill_percentage / 100.0).clamp(0.0, 1.0)
    }

    /// Plain-text rendering, one field per line.
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            TITLE.to_string(),
            self.time_text.clone(),
            self.phase_label.to_string(),
            self.cycle_label.clone(),
            format!("Progress: {:.1}%", self.fill_percentage),
        ];
        if !self.message.is_empty() {
            lines.push(self.message.clone());
        }
        lines.push(format!("[{}] [{}]", self.toggle_label, self.reset_label));
        let presets: Vec<String> = self
            .presets
            .iter()
            .map(|p| {
                if p.selected {
                    format!("({})", p.label)
                } else {
                    p.label.clone()
                }
            })
            .collect();
        lines.push(presets.join("  "));
        lines.join("\n")
    }
}

/// Format seconds as `MM:SS`. Minutes grow past two digits for long phases.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(7200), "120:00");
    }

    #[test]
    fn idle_view_labels() {
        let view = TimerView::from_state(&TimerState::default());
        assert_eq!(view.time_text, "25:00");
        assert_eq!(view.phase_label, "Work Time");
        assert_eq!(view.cycle_label, "Cycle: 1 / 4");
        assert_eq!(view.toggle_label, "Start");
        assert_eq!(view.reset_label, "Reset");
        assert_eq!(view.fill_ratio(), 0.0);
    }

    #[test]
    fn running_view_shows_pause() {
        let mut state = TimerState::default();
        state.toggle();
        let view = TimerView::from_state(&state);
        assert_eq!(view.toggle_label, "Pause");
    }

    #[test]
    fn break_view_after_work_phase() {
        let mut state = TimerState::default();
        state.toggle();
        for _ in 0..1500 {
            state.tick();
        }
        let view = TimerView::from_state(&state);
        assert_eq!(view.time_text, "05:00");
        assert_eq!(view.phase_label, "Break Time");
        assert_eq!(view.fill_ratio(), 1.0);
        assert!(!view.message.is_empty());
        assert!(view.to_text().contains(&view.message));
    }

    #[test]
    fn exactly_one_preset_selected() {
        let view = TimerView::from_state(&TimerState::new(Preset::Medium));
        let selected: Vec<_> = view.presets.iter().filter(|p| p.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].preset, Preset::Medium);
        assert_eq!(selected[0].label, "60m / 10m");
    }

    #[test]
    fn text_view_marks_selected_preset() {
        let text = TimerView::from_state(&TimerState::new(Preset::Long)).to_text();
        assert!(text.starts_with(TITLE));
        assert!(text.contains("120:00"));
        assert!(text.contains("(120m / 15m)"));
        assert!(text.contains("[Start] [Reset]"));
    }
}
