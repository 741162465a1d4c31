//! Sidebar: endpoint, example questions and key help.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::{AppState, EXAMPLE_QUESTIONS};
use crate::theme::Theme;

use crate::events::newline_key_label;

/// Key help rows; an empty key is filled with [`newline_key_label`].
const KEY_HELP: [(&str, &str); 6] = [
    ("Enter", "ask"),
    ("", "newline"),
    ("F1-F5", "use example"),
    ("PgUp/PgDn", "scroll answer"),
    ("Ctrl+L", "reset"),
    ("Esc", "quit"),
];

fn panel<'a>(title: &'a str, th: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(th.lavender)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
}

/// Render the sidebar into `area`.
pub fn render_sidebar(f: &mut Frame, area: Rect, app: &AppState, th: &Theme) {
    let help_h = u16::try_from(KEY_HELP.len()).unwrap_or(u16::MAX) + 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(help_h),
        ])
        .split(area);

    let endpoint = Paragraph::new(Span::styled(
        app.config.api_url.clone(),
        Style::default().fg(th.subtext0),
    ))
    .wrap(Wrap { trim: true })
    .block(panel("Service", th));
    f.render_widget(endpoint, rows[0]);

    let mut examples = Vec::new();
    for (idx, q) in EXAMPLE_QUESTIONS.iter().enumerate() {
        examples.push(Line::from(vec![
            Span::styled(
                format!("F{} ", idx + 1),
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            ),
            Span::styled((*q).to_string(), Style::default().fg(th.text)),
        ]));
    }
    f.render_widget(
        Paragraph::new(examples)
            .wrap(Wrap { trim: true })
            .block(panel("Examples", th)),
        rows[1],
    );

    let help: Vec<Line> = KEY_HELP
        .iter()
        .map(|&(key, what)| {
            let key = if key.is_empty() {
                newline_key_label(app.keyboard_enhanced)
            } else {
                key
            };
            Line::from(vec![
                Span::styled(format!("{key:<12}"), Style::default().fg(th.yellow)),
                Span::styled(what, Style::default().fg(th.subtext0)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(help).block(panel("Keys", th)), rows[2]);
}
