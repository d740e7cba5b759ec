//! UI rendering
//!
//! Rendering functions that draw the current state into a terminal frame.
//! Nothing here changes state.

pub mod name_field;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus, UiState};

/// Render the application UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let ui = app.ui();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name field
            Constraint::Length(3), // Button
            Constraint::Length(3), // Greeting
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(area);

    frame.render_widget(app.name_field().textarea(), chunks[0]);
    render_button(frame, chunks[1], ui);

    let greeting = Paragraph::new(app.state().greeting())
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(greeting, chunks[2]);

    render_hints(frame, chunks[4], ui);

    if ui.help_visible {
        render_help_overlay(frame, area, ui);
    }

    if let Some(ref error) = ui.error {
        render_error_overlay(frame, area, error, ui);
    }
}

fn render_button(frame: &mut Frame, area: Rect, ui: &UiState) {
    let focused = ui.focus == Focus::Button;
    let style = match (focused, ui.config.colors) {
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        (false, _) => Style::default(),
    };

    let button = Paragraph::new(Span::styled(" Increment Age ", style))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(button, area);
}

fn render_hints(frame: &mut Frame, area: Rect, ui: &UiState) {
    let hints = match ui.focus {
        Focus::Name => "Tab: Button | F1: Help | Esc: Quit",
        Focus::Button => "Enter/Space: Increment | Tab: Name | F1: Help | q: Quit",
    };

    let style = if ui.config.colors {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
    };

    frame.render_widget(Paragraph::new(Line::from(Span::styled(hints, style))), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, ui: &UiState) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  Tab      - Next control"),
        Line::from("  F1       - Toggle help"),
        Line::from("  Esc      - Close overlay / Quit"),
        Line::from("  Ctrl+C   - Quit"),
        Line::from(""),
        Line::from("Button:"),
        Line::from("  Enter    - Increment age"),
        Line::from("  q        - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let border_style = if ui.config.colors {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, ui: &UiState) {
    let popup_area = centered_rect(70, 30, area);

    let accent = if ui.config.colors {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let error_text = vec![
        Line::from(Span::styled("Error", accent.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(accent),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
