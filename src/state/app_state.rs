//! Central `AppState` container for the terminal front end.

use crate::logic::LifecycleController;
use crate::theme::AppConfig;

/// Example questions offered in the sidebar (bound to `F1`–`F5`).
pub const EXAMPLE_QUESTIONS: [&str; 5] = [
    "What are the warning signs of a heart attack?",
    "How can I prevent cardiovascular disease?",
    "What should I do if I have chest pain?",
    "What are the symptoms of high blood pressure?",
    "How is stroke prevented and treated?",
];

/// State shared by the event, worker and rendering layers.
///
/// All lifecycle transitions go through [`AppState::controller`]; the remaining
/// fields are presentation-only.
#[derive(Debug)]
pub struct AppState {
    /// Query lifecycle state machine (single writer of the displayed state).
    pub controller: LifecycleController,
    /// Resolved configuration, shown in the sidebar.
    pub config: AppConfig,
    /// Vertical scroll offset of the answer paragraph.
    pub response_scroll: u16,
    /// Spinner frame advanced by ticks while a request is in flight.
    pub spinner_frame: usize,
    /// Terminal reports modifiers on `Enter`, so `Shift+Enter` is usable.
    pub keyboard_enhanced: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    /// What: Create state for a session using `config`.
    ///
    /// Inputs:
    /// - `config`: Resolved configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            controller: LifecycleController::new(),
            config,
            response_scroll: 0,
            spinner_frame: 0,
            keyboard_enhanced: false,
        }
    }
}
