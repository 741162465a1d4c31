//! Terminal rendering for CardioQA.
//!
//! `ui` lays out the screen; the answer pane lives in [`response`] and the
//! sidebar in [`sidebar`]. Rendering only reads `AppState` (apart from
//! clamping the scroll offset) and never triggers requests.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::events::newline_key_label;
use crate::state::{AppState, LifecycleState};
use crate::theme::{Theme, theme};

pub mod response;
pub mod sidebar;

/// Braille spinner shown while a request is in flight.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Medical disclaimer shown above the question pane.
pub const DISCLAIMER: &str = "Educational information only. Not a substitute for professional medical advice. \
     In an emergency call your local emergency number.";

/// What: Render the whole CardioQA screen.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state (mutable so the response scroll can be clamped).
///
/// Details:
/// - Main column: header, disclaimer, question, status block (error or loading only), answer.
/// - Right column: endpoint, example questions and key help.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(area);

    let status_h: u16 = match app.controller.state() {
        LifecycleState::Loading { .. } | LifecycleState::Failure { .. } => 3,
        _ => 0,
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(status_h),
            Constraint::Min(3),
        ])
        .split(columns[0]);

    render_header(f, rows[0], &th);
    render_disclaimer(f, rows[1], &th);
    render_question(f, rows[2], app, &th);
    if status_h > 0 {
        render_status(f, rows[3], app, &th);
    }
    response::render_response(f, rows[4], app, &th);
    sidebar::render_sidebar(f, columns[1], app, &th);
}

fn render_header(f: &mut Frame, area: Rect, th: &Theme) {
    let title = Line::from(vec![
        Span::styled(
            "CardioQA",
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  cardiac health question answering",
            Style::default().fg(th.subtext0),
        ),
    ]);
    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(th.overlay1)),
    );
    f.render_widget(header, area);
}

fn render_disclaimer(f: &mut Frame, area: Rect, th: &Theme) {
    let p = Paragraph::new(Span::styled(DISCLAIMER, Style::default().fg(th.yellow)))
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(th.mantle));
    f.render_widget(p, area);
}

fn render_question(f: &mut Frame, area: Rect, app: &AppState, th: &Theme) {
    let loading = app.controller.state().is_loading();
    let ready = app.controller.can_submit();
    let title = if loading {
        "Question (request in flight)".to_string()
    } else if ready {
        format!(
            "Question (Enter to ask, {} for newline)",
            newline_key_label(app.keyboard_enhanced)
        )
    } else {
        "Question (at least 5 characters)".to_string()
    };
    let border = if ready { th.sapphire } else { th.overlay1 };
    let draft = app.controller.draft();
    let lines: Vec<Line> = draft
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.text))))
        .collect();
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(border)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner_h = area.height.saturating_sub(2);
    let line_count = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let top = line_count.saturating_sub(inner_h);
    f.render_widget(Paragraph::new(lines).block(block).scroll((top, 0)), area);

    // Cursor at the end of the draft
    let last = draft.rsplit('\n').next().unwrap_or_default();
    let col = u16::try_from(last.width()).unwrap_or(u16::MAX);
    let row = line_count.saturating_sub(1).saturating_sub(top);
    let max_x = area.x + area.width.saturating_sub(2);
    let max_y = area.y + area.height.saturating_sub(2);
    let x = (area.x + 1).saturating_add(col).min(max_x);
    let y = (area.y + 1).saturating_add(row).min(max_y);
    f.set_cursor_position(Position::new(x, y));
}

fn render_status(f: &mut Frame, area: Rect, app: &AppState, th: &Theme) {
    let (line, color) = match app.controller.state() {
        LifecycleState::Loading { .. } => {
            let frame = SPINNER[app.spinner_frame % SPINNER.len()];
            (
                Line::from(vec![
                    Span::styled(format!("{frame} "), Style::default().fg(th.sapphire)),
                    Span::styled(
                        "Analyzing Medical Data...",
                        Style::default().fg(th.subtext0),
                    ),
                ]),
                th.sapphire,
            )
        }
        LifecycleState::Failure { message } => (
            Line::from(vec![
                Span::styled(
                    "Error: ",
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(message.clone(), Style::default().fg(th.text)),
            ]),
            th.red,
        ),
        _ => return,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    f.render_widget(
        Paragraph::new(line).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
