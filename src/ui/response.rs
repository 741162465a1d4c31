//! Answer pane: formatted answer text, metric chips and safety alerts.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::logic::{
    ConfidenceCategory, Inline, SafetyCategory, confidence_category, format_response,
    safety_category,
};
use crate::state::{AppState, QueryResponse};
use crate::theme::Theme;

/// Chip color for a safety band.
#[must_use]
pub const fn safety_color(category: SafetyCategory, th: &Theme) -> Color {
    match category {
        SafetyCategory::High => th.green,
        SafetyCategory::Moderate => th.yellow,
        SafetyCategory::Low => th.red,
    }
}

/// Chip color for a confidence band.
#[must_use]
pub const fn confidence_color(category: ConfidenceCategory, th: &Theme) -> Color {
    match category {
        ConfidenceCategory::High => th.blue,
        ConfidenceCategory::Medium => th.mauve,
        ConfidenceCategory::Low => th.peach,
    }
}

/// What: Convert parsed inline nodes into styled spans.
///
/// Inputs:
/// - `nodes`: One formatted line.
/// - `base`: Style for plain text; strong adds `BOLD`, emphasis adds `ITALIC`.
fn inline_spans(nodes: &[Inline], base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for node in nodes {
        match node {
            Inline::Text(t) => spans.push(Span::styled(t.clone(), base)),
            Inline::Emphasis(t) => {
                spans.push(Span::styled(t.clone(), base.add_modifier(Modifier::ITALIC)));
            }
            Inline::Strong(children) => {
                spans.extend(inline_spans(children, base.add_modifier(Modifier::BOLD)));
            }
        }
    }
    spans
}

fn chip(label: &str, value: String, color: Color, th: &Theme) -> [Span<'static>; 2] {
    [
        Span::styled(format!("{label} "), Style::default().fg(th.subtext0)),
        Span::styled(
            format!("{value}   "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]
}

/// What: Build every line of the answer pane for a successful response.
///
/// Inputs:
/// - `resp`: Response to show.
/// - `th`: Palette.
///
/// Output:
/// - Metric chips, a blank line, the formatted answer and, when present, the
///   "Safety Alerts" list.
#[must_use]
pub fn answer_lines(resp: &QueryResponse, th: &Theme) -> Vec<Line<'static>> {
    let safety = safety_category(resp.safety_score);
    let confidence = confidence_category(&resp.confidence);
    let mut chips = Vec::new();
    chips.extend(chip(
        "Safety",
        format!("{:.1}/100", resp.safety_score),
        safety_color(safety, th),
        th,
    ));
    chips.extend(chip(
        "Confidence",
        resp.confidence.clone(),
        confidence_color(confidence, th),
        th,
    ));
    chips.extend(chip(
        "Sources",
        resp.knowledge_sources.to_string(),
        th.lavender,
        th,
    ));
    chips.extend(chip(
        "Similarity",
        format!("{:.2}", resp.top_similarity),
        th.sapphire,
        th,
    ));
    chips.extend(chip(
        "Time",
        format!("{:.2}s", resp.response_time),
        th.overlay1,
        th,
    ));

    let mut lines = vec![Line::from(chips), Line::default()];
    let base = Style::default().fg(th.text);
    for nodes in format_response(&resp.response).lines() {
        lines.push(Line::from(inline_spans(nodes, base)));
    }

    if !resp.warnings.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Safety Alerts",
            Style::default().fg(th.peach).add_modifier(Modifier::BOLD),
        )));
        for w in &resp.warnings {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(th.peach)),
                Span::styled(w.clone(), Style::default().fg(th.text)),
            ]));
        }
    }
    lines
}

/// Render the answer pane, or a hint when there is nothing to show.
pub fn render_response(f: &mut Frame, area: Rect, app: &mut AppState, th: &Theme) {
    let lines = app.controller.state().response().map_or_else(
        || {
            vec![Line::from(Span::styled(
                "Ask a cardiac health question or pick an example with F1-F5.",
                Style::default().fg(th.subtext0),
            ))]
        },
        |resp| answer_lines(resp, th),
    );
    let max_scroll = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
    app.response_scroll = app.response_scroll.min(max_scroll);

    let block = Block::default()
        .title(Span::styled(
            "Answer (PgUp/PgDn to scroll)",
            Style::default().fg(th.lavender),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1));
    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.response_scroll, 0));
    f.render_widget(p, area);
}
