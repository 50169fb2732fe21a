//! TUI rendering with ratatui

use super::app::{App, Modal};
use super::theme::Theme;
use crate::core::{KEYBOARD_LAYOUT, LetterCell, Row};
use crate::game::{HELP_TEXT, Scheduler, SettingKey};
use crate::output::formatters::{distribution_bar, format_countdown};
use crate::storage::Storage;
use crate::wordlists::Clock;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: Storage, T: Scheduler, C: Clock>(f: &mut Frame, app: &App<S, T, C>) {
    let theme = app.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(3),  // Popups
            Constraint::Length(5),  // Keyboard
            Constraint::Min(1),     // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_popups(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if let Some(modal) = app.modal {
        render_modal(f, app, modal);
    }
}

fn render_header<S: Storage, T: Scheduler, C: Clock>(
    f: &mut Frame,
    app: &App<S, T, C>,
    area: Rect,
) {
    let title = if app.session.settings().daily_mode {
        "NERDLE (daily)"
    } else {
        "NERDLE"
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(app.theme.empty)),
        );
    f.render_widget(header, area);
}

fn tile(cell: LetterCell, theme: &Theme) -> Span<'static> {
    let text = format!(" {} ", cell.letter.unwrap_or('·'));
    let style = match theme.fill(cell.status) {
        Some(fill) => Style::default()
            .fg(Color::White)
            .bg(fill)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    };
    Span::styled(text, style)
}

fn board_line(row: &Row, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.cells().len() * 2);
    for &cell in row.cells() {
        spans.push(tile(cell, theme));
        spans.push(Span::raw(" "));
    }
    spans.pop();
    Line::from(spans)
}

fn render_board<S: Storage, T: Scheduler, C: Clock>(f: &mut Frame, app: &App<S, T, C>, area: Rect) {
    let mut lines = Vec::new();
    for row in app.session.grid().rows() {
        lines.push(board_line(row, &app.theme));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(board, area);
}

fn render_popups<S: Storage, T: Scheduler, C: Clock>(
    f: &mut Frame,
    app: &App<S, T, C>,
    area: Rect,
) {
    let lines: Vec<Line> = app
        .popups
        .iter()
        .map(|p| {
            Line::from(Span::styled(
                p.text.clone(),
                Style::default()
                    .fg(app.theme.background)
                    .bg(app.theme.text)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_keyboard<S: Storage, T: Scheduler, C: Clock>(
    f: &mut Frame,
    app: &App<S, T, C>,
    area: Rect,
) {
    let hints = app.session.hints();
    let lines: Vec<Line> = KEYBOARD_LAYOUT
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .chars()
                .map(|key| {
                    tile(
                        LetterCell {
                            letter: Some(key),
                            status: hints.get(key),
                        },
                        &app.theme,
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_status<S: Storage, T: Scheduler, C: Clock>(
    f: &mut Frame,
    app: &App<S, T, C>,
    area: Rect,
) {
    let state = app.session.state();
    let mode = if state.hard_mode { "Hard" } else { "Normal" };
    let help_text = format!(
        "{mode} | Enter: Submit | F1: Help | F2: Stats | F3: Settings | F5: New Game | Esc: Quit"
    );

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// A rectangle of at most `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_modal<S: Storage, T: Scheduler, C: Clock>(
    f: &mut Frame,
    app: &App<S, T, C>,
    modal: Modal,
) {
    let (title, lines) = match modal {
        Modal::Help => (" How to play ", help_lines()),
        Modal::Settings { selected } => (" Settings ", settings_lines(app, selected)),
        Modal::Stats => (" Statistics ", stats_lines(app)),
    };

    let area = centered(f.area(), 64, 20);
    let panel = Paragraph::new(lines)
        .style(Style::default().fg(app.theme.text).bg(app.theme.background))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(Clear, area);
    f.render_widget(panel, area);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = HELP_TEXT.iter().map(|&text| Line::from(text)).collect();
    lines.push(Line::from(""));
    lines.push(Line::from("Esc or Enter to close"));
    lines
}

fn settings_lines<S: Storage, T: Scheduler, C: Clock>(
    app: &App<S, T, C>,
    selected: usize,
) -> Vec<Line<'static>> {
    let settings = app.session.settings();
    let mut lines = Vec::new();

    for (i, key) in SettingKey::ALL.into_iter().enumerate() {
        let marker = if i == selected { "▶ " } else { "  " };
        let value = if settings.get(key) { "[on] " } else { "[off]" };
        let style = if i == selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{value} {}", key.label()), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("        {}", key.description()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("Up/Down: select | Enter: toggle | Esc: close"));
    lines
}

fn stats_lines<S: Storage, T: Scheduler, C: Clock>(app: &App<S, T, C>) -> Vec<Line<'static>> {
    let stats = app.session.stats();
    let mut lines = vec![
        Line::from(format!(
            "Played: {}   Win %: {}   Current streak: {}   Max streak: {}",
            stats.played,
            stats.win_percent(),
            stats.current_streak,
            stats.max_streak
        )),
        Line::from(""),
        Line::from("Guess distribution"),
    ];

    let max = stats.max_bucket();
    for (i, &count) in stats.win_distribution.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled(
                distribution_bar(count, max, 30),
                Style::default().fg(app.theme.palette.correct),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    if let Some(secret) = app.session.secret().filter(|_| app.session.is_finished()) {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("The word was {}", secret.word)));
    }

    if app.session.settings().daily_mode {
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "Next NERDLE in {}",
            format_countdown(app.session.time_until_next_daily())
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("F5: New Game | Esc: close"));
    lines
}
