//! Event handling layer.
//!
//! Terminal events are first translated into a [`Command`] and then applied
//! to the [`AppState`]. All lifecycle transitions happen inside the
//! controller; this layer only decides *which* transition the user asked for
//! and forwards resulting dispatch/cancel orders to the query worker.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, EXAMPLE_QUESTIONS, WorkerCommand};


/// Lines scrolled by one `PageUp`/`PageDown`.
const SCROLL_STEP: u16 = 5;

/// User intent derived from a terminal event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Submit the current draft.
    Submit,
    /// Append a character to the draft.
    InsertChar(char),
    /// Append pasted text to the draft.
    InsertText(String),
    /// Append a literal newline to the draft.
    InsertNewline,
    /// Delete the last draft character.
    Backspace,
    /// Clear draft, answer and error.
    Reset,
    /// Replace the draft with the example question at this index.
    UseExample(usize),
    /// Scroll the answer up.
    ScrollUp,
    /// Scroll the answer down.
    ScrollDown,
    /// Leave the application.
    Quit,
}

/// What: Label of the newline key to advertise.
///
/// Inputs:
/// - `keyboard_enhanced`: Whether the terminal reports modifiers on `Enter`.
///
/// Output:
/// - `"Shift+Enter"` with enhancement, `"Alt+Enter"` otherwise.
///
/// Details:
/// - Legacy terminals send a bare `Enter` for `Shift+Enter`, which submits.
#[must_use]
pub const fn newline_key_label(keyboard_enhanced: bool) -> &'static str {
    if keyboard_enhanced {
        "Shift+Enter"
    } else {
        "Alt+Enter"
    }
}

/// What: Translate a key press into a [`Command`].
///
/// Inputs:
/// - `ke`: Key event from the terminal.
///
/// Output:
/// - `Some(Command)` for bound keys; `None` for releases, repeats of unbound keys and
///   everything else.
///
/// Details:
/// - `Enter` without modifiers submits; `Shift+Enter` and `Alt+Enter` insert a newline
///   and never submit.
#[must_use]
pub fn command_for_key(ke: &KeyEvent) -> Option<Command> {
    if ke.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Enter => {
            if ke
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT)
            {
                Some(Command::InsertNewline)
            } else if ke.modifiers.is_empty() {
                Some(Command::Submit)
            } else {
                None
            }
        }
        KeyCode::Char('c') if ctrl => Some(Command::Quit),
        KeyCode::Char('l') if ctrl => Some(Command::Reset),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(ch) => Some(Command::InsertChar(ch)),
        KeyCode::Backspace => Some(Command::Backspace),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::F(n @ 1..=5) => Some(Command::UseExample(usize::from(n) - 1)),
        KeyCode::PageUp => Some(Command::ScrollUp),
        KeyCode::PageDown => Some(Command::ScrollDown),
        _ => None,
    }
}

/// What: Apply a [`Command`] to the application state.
///
/// Inputs:
/// - `cmd`: Command to apply.
/// - `app`: Mutable application state.
/// - `worker_tx`: Channel to the query worker.
///
/// Output:
/// - `true` to request application exit; `false` otherwise.
///
/// Details:
/// - `Submit` forwards at most one dispatch; the controller ignores it while loading.
/// - `Reset` forwards a cancel order when it abandoned an in-flight request.
pub fn apply_command(
    cmd: Command,
    app: &mut AppState,
    worker_tx: &mpsc::UnboundedSender<WorkerCommand>,
) -> bool {
    match cmd {
        Command::Submit => {
            if let Some(dispatch) = app.controller.submit_draft() {
                app.response_scroll = 0;
                if worker_tx.send(WorkerCommand::Dispatch(dispatch)).is_err() {
                    tracing::error!("query worker is gone; dispatch dropped");
                }
            }
        }
        Command::InsertChar(ch) => app.controller.draft_mut().push(ch),
        Command::InsertText(text) => app.controller.draft_mut().push_str(&text),
        Command::InsertNewline => app.controller.draft_mut().push('\n'),
        Command::Backspace => {
            app.controller.draft_mut().pop();
        }
        Command::Reset => {
            app.response_scroll = 0;
            if let Some(generation) = app.controller.reset() {
                let _ = worker_tx.send(WorkerCommand::Cancel(generation));
            }
        }
        Command::UseExample(idx) => {
            if let Some(q) = EXAMPLE_QUESTIONS.get(idx) {
                app.controller.set_draft(*q);
            }
        }
        Command::ScrollUp => {
            app.response_scroll = app.response_scroll.saturating_sub(SCROLL_STEP);
        }
        Command::ScrollDown => {
            app.response_scroll = app.response_scroll.saturating_add(SCROLL_STEP);
        }
        Command::Quit => return true,
    }
    false
}

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    worker_tx: &mpsc::UnboundedSender<WorkerCommand>,
) -> bool {
    let cmd = match ev {
        CEvent::Key(ke) => command_for_key(&ke),
        CEvent::Paste(text) => Some(Command::InsertText(text)),
        _ => None,
    };
    cmd.is_some_and(|c| apply_command(c, app, worker_tx))
}
