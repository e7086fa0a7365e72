use std::str::FromStr;

use pomodoro_core::storage::UiConfig;
use pomodoro_core::view::TITLE;
use pomodoro_core::TimerView;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Widget};

pub const SHELL_WIDTH: u16 = 44;

/// Appearance settings taken from `[ui]`.
#[derive(Debug, Clone)]
pub struct ShellStyle {
    pub accent: Color,
    pub show_presets: bool,
}

impl ShellStyle {
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            accent: Color::from_str(&ui.accent_color).unwrap_or(Color::Green),
            show_presets: ui.show_presets,
        }
    }

    /// Rows the shell needs, borders included.
    pub fn height(&self) -> u16 {
        if self.show_presets {
            14
        } else {
            13
        }
    }
}

impl Default for ShellStyle {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

/// The widget body: time, progress gauge, labels, controls and preset selector.
pub struct ShellWidget<'a> {
    view: &'a TimerView,
    style: &'a ShellStyle,
}

impl<'a> ShellWidget<'a> {
    pub fn new(view: &'a TimerView, style: &'a ShellStyle) -> Self {
        Self { view, style }
    }

    fn controls(&self) -> Line<'static> {
        let key = Style::default().fg(Color::DarkGray);
        let button = Style::default()
            .fg(self.style.accent)
            .add_modifier(Modifier::BOLD);
        Line::from(vec![
            Span::styled("[space] ", key),
            Span::styled(self.view.toggle_label, button),
            Span::raw("   "),
            Span::styled("[r] ", key),
            Span::styled(
                self.view.reset_label,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn preset_selector(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, option) in self.view.presets.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if option.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(self.style.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("{} {}", i + 1, option.label), style));
        }
        Line::from(spans)
    }
}

impl Widget for ShellWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let outer = Block::default()
            .title(format!(" {TITLE} "))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL);
        let inner = outer.inner(area);
        outer.render(area, buf);

        let mut constraints = vec![
            Constraint::Length(1), // time
            Constraint::Length(1),
            Constraint::Length(3), // gauge
            Constraint::Length(1), // phase
            Constraint::Length(1), // cycle
            Constraint::Length(1), // message
            Constraint::Length(1),
            Constraint::Length(1), // controls
        ];
        if self.style.show_presets {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1)); // key hint
        let rows = Layout::vertical(constraints).split(inner);

        Paragraph::new(Line::from(Span::styled(
            self.view.time_text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(rows[0], buf);

        Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(self.style.accent))
            .ratio(self.view.fill_ratio())
            .label(format!("{:.0}%", self.view.fill_percentage))
            .render(rows[2], buf);

        Paragraph::new(self.view.phase_label)
            .alignment(Alignment::Center)
            .render(rows[3], buf);
        Paragraph::new(self.view.cycle_label.clone())
            .alignment(Alignment::Center)
            .render(rows[4], buf);
        Paragraph::new(Line::from(Span::styled(
            self.view.message.clone(),
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center)
        .render(rows[5], buf);

        Paragraph::new(self.controls())
            .alignment(Alignment::Center)
            .render(rows[7], buf);

        let hint = Style::default().fg(Color::DarkGray);
        let mut keys = Vec::new();
        let mut next = 8;
        if self.style.show_presets {
            Paragraph::new(self.preset_selector())
                .alignment(Alignment::Center)
                .render(rows[next], buf);
            next += 1;
            keys.push(Span::styled("[←/→] preset  ", hint));
        }
        keys.push(Span::styled("[q] quit", hint));

        Paragraph::new(Line::from(keys))
            .alignment(Alignment::Center)
            .render(rows[next], buf);
    }
}
