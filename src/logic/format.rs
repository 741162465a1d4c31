//! Safe inline formatting of answer text.
//!
//! Answers use a tiny inline syntax: `**strong**`, `*emphasis*`, and newlines
//! as hard line breaks. The text is parsed into a small AST first; renderers
//! either walk the AST (the terminal UI builds styled spans) or ask for
//! escaped markup via [`FormattedText::to_markup`]. Raw service text is never
//! emitted as live markup.

/// One inline node of a formatted line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    /// Plain text.
    Text(String),
    /// Emphasized text (`*x*`).
    Emphasis(String),
    /// Strong text (`**x**`), which may itself contain emphasis.
    Strong(Vec<Inline>),
}

/// Parsed answer: one entry per source line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattedText {
    lines: Vec<Vec<Inline>>,
}

impl FormattedText {
    /// Lines in display order; an empty line is an empty vector.
    #[must_use]
    pub fn lines(&self) -> &[Vec<Inline>] {
        &self.lines
    }

    /// What: Render the AST as escaped markup.
    ///
    /// Output:
    /// - `<strong>`, `<em>` and `<br/>` are the only tags produced; all text is escaped.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                out.push_str("<br/>");
            }
            for node in line {
                push_markup(node, &mut out);
            }
        }
        out
    }

    /// What: Render the AST as plain text with delimiters removed.
    ///
    /// Details:
    /// - Used by the one-shot CLI output where no styling is available.
    #[must_use]
    pub fn to_plain(&self) -> String {
        let mut lines = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            let mut text = String::new();
            for node in line {
                push_plain(node, &mut text);
            }
            lines.push(text);
        }
        lines.join("\n")
    }
}

/// What: Parse answer text into a [`FormattedText`].
///
/// Inputs:
/// - `text`: Raw `response` field from the service.
///
/// Output:
/// - One AST line per `\n`-separated source line.
///
/// Details:
/// - Pairs never span lines. A trailing `\r` on a line is dropped.
/// - Strong pairs (`**`) are matched first, left to right and non-greedy; emphasis
///   pairs (`*`) are then matched inside every strong and plain run, so the tree
///   is always well nested.
/// - Delimiters without a partner are kept as literal text.
#[must_use]
pub fn format_response(text: &str) -> FormattedText {
    let lines = text
        .split('\n')
        .map(|line| parse_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect();
    FormattedText { lines }
}

/// What: Escape characters that a markup surface would treat as structure.
///
/// Inputs:
/// - `text`: Untrusted text.
///
/// Output:
/// - Text with `& < > " '` replaced by entities.
#[must_use]
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn parse_line(line: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut rest = line;
    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("**") else {
            break;
        };
        push_emphasis_runs(&rest[..open], &mut out);
        let mut inner = Vec::new();
        push_emphasis_runs(&after[..close], &mut inner);
        out.push(Inline::Strong(inner));
        rest = &after[close + 2..];
    }
    push_emphasis_runs(rest, &mut out);
    out
}

fn push_emphasis_runs(segment: &str, out: &mut Vec<Inline>) {
    let mut rest = segment;
    while let Some(open) = rest.find('*') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('*') else {
            break;
        };
        push_text(&rest[..open], out);
        out.push(Inline::Emphasis(after[..close].to_string()));
        rest = &after[close + 1..];
    }
    push_text(rest, out);
}

fn push_text(text: &str, out: &mut Vec<Inline>) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(Inline::Text(text.to_string()));
    }
}

fn push_markup(node: &Inline, out: &mut String) {
    match node {
        Inline::Text(t) => out.push_str(&escape_markup(t)),
        Inline::Emphasis(t) => {
            out.push_str("<em>");
            out.push_str(&escape_markup(t));
            out.push_str("</em>");
        }
        Inline::Strong(children) => {
            out.push_str("<strong>");
            for child in children {
                push_markup(child, out);
            }
            out.push_str("</strong>");
        }
    }
}

fn push_plain(node: &Inline, out: &mut String) {
    match node {
        Inline::Text(t) | Inline::Emphasis(t) => out.push_str(t),
        Inline::Strong(children) => {
            for child in children {
                push_plain(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The canonical warning sample renders strong, emphasis and a line break.
    ///
    /// Inputs:
    /// - `"**Warning**: see *doctor*\nNow"`.
    ///
    /// Output:
    /// - `<strong>Warning</strong>: see <em>doctor</em><br/>Now`.
    fn format_strong_emphasis_and_break() {
        let formatted = format_response("**Warning**: see *doctor*\nNow");
        assert_eq!(
            formatted.to_markup(),
            "<strong>Warning</strong>: see <em>doctor</em><br/>Now"
        );
        assert_eq!(formatted.lines().len(), 2);
        assert_eq!(
            formatted.lines()[0],
            vec![
                Inline::Strong(vec![Inline::Text("Warning".into())]),
                Inline::Text(": see ".into()),
                Inline::Emphasis("doctor".into()),
            ]
        );
        assert_eq!(formatted.lines()[1], vec![Inline::Text("Now".into())]);
    }

    #[test]
    /// What: Structural characters from the service are escaped, never passed through.
    ///
    /// Inputs:
    /// - Text containing a script tag, an attribute quote and an ampersand, some inside emphasis.
    ///
    /// Output:
    /// - Only the formatter's own tags appear unescaped.
    fn format_escapes_structural_characters() {
        let markup =
            format_response("<script>alert('x')</script> & **<b>\"bold\"</b>**").to_markup();
        assert_eq!(
            markup,
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; \
             <strong>&lt;b&gt;&quot;bold&quot;&lt;/b&gt;</strong>"
        );
        assert!(!markup.contains("<script"));
        assert!(!markup.contains("<b>"));
    }

    #[test]
    /// What: Unpaired delimiters stay literal and pairs never cross lines.
    ///
    /// Inputs:
    /// - A lone `*`, a `**` opened on one line and closed on the next.
    ///
    /// Output:
    /// - No styling is applied across the line break.
    fn format_unpaired_delimiters_are_literal() {
        assert_eq!(format_response("2 * 3 = 6").to_markup(), "2 * 3 = 6");
        assert_eq!(
            format_response("**open\nclose**").to_markup(),
            "**open<br/>close**"
        );
    }

    #[test]
    /// What: Emphasis nested inside strong text stays nested.
    ///
    /// Inputs:
    /// - `"**Call *now* please**"`.
    ///
    /// Output:
    /// - `<strong>Call <em>now</em> please</strong>`.
    fn format_emphasis_inside_strong() {
        assert_eq!(
            format_response("**Call *now* please**").to_markup(),
            "<strong>Call <em>now</em> please</strong>"
        );
    }

    #[test]
    fn format_plain_strips_delimiters() {
        let formatted = format_response("⚠️ **MEDICAL DISCLAIMER**: *Educational* only.\r\nok");
        assert_eq!(
            formatted.to_plain(),
            "⚠️ MEDICAL DISCLAIMER: Educational only.\nok"
        );
    }

    #[test]
    fn format_is_deterministic_and_total() {
        for input in ["", "\n\n", "***", "****", "*a**b*", "**"] {
            assert_eq!(format_response(input), format_response(input));
        }
        assert_eq!(format_response("").lines(), &[Vec::<Inline>::new()]);
        assert_eq!(format_response("****").to_markup(), "<strong></strong>");
    }
}
