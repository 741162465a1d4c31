use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Enter raw mode and the alternate screen, with bracketed paste enabled.
///
/// Output:
/// - `Ok(true)` when keyboard enhancement flags were pushed, so modified `Enter`
///   is reported with its modifiers; `Ok(false)` on legacy terminals.
///
/// Details:
/// - Legacy terminals send the same byte for `Enter` and `Shift+Enter`; only
///   `Alt+Enter` is distinguishable there.
pub fn setup_terminal() -> Result<bool> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            std::io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    tracing::debug!(keyboard_enhanced = enhanced, "terminal ready");
    Ok(enhanced)
}

/// Undo [`setup_terminal`]; `keyboard_enhanced` is its return value.
pub fn restore_terminal(keyboard_enhanced: bool) -> Result<()> {
    if keyboard_enhanced {
        execute!(std::io::stdout(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    Ok(())
}

/// What: Pass through a construction result, running `restore` first when it failed.
///
/// Inputs:
/// - `built`: Result of building something after the terminal was set up.
/// - `restore`: Undo step for the terminal setup.
///
/// Output:
/// - The built value, or the original error after `restore` ran.
///
/// Details:
/// - A failing `restore` is logged; the construction error is the one returned.
pub fn or_restore<T, E>(
    built: std::result::Result<T, E>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match built {
        Ok(v) => Ok(v),
        Err(e) => {
            if let Err(restore_err) = restore() {
                tracing::warn!(error = %restore_err, "failed to restore terminal");
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    /// What: A failed construction restores the terminal once and keeps its error.
    ///
    /// Inputs:
    /// - An `io::Error` result, then an `Ok` result, with a counting restore closure.
    ///
    /// Output:
    /// - Restore runs once for the error and never for the success.
    fn or_restore_runs_restore_only_on_error() {
        let restored = Cell::new(0);
        let failed: std::io::Result<u8> = Err(std::io::Error::other("no tty"));
        let err = or_restore(failed, || {
            restored.set(restored.get() + 1);
            Ok(())
        })
        .expect_err("error propagates");
        assert_eq!(err.to_string(), "no tty");
        assert_eq!(restored.get(), 1);

        let ok = or_restore(Ok::<u8, std::io::Error>(7), || {
            restored.set(restored.get() + 1);
            Ok(())
        })
        .expect("value passes through");
        assert_eq!(ok, 7);
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn or_restore_keeps_build_error_when_restore_fails() {
        let failed: std::io::Result<()> = Err(std::io::Error::other("backend"));
        let err = or_restore(failed, || Err("restore failed".into())).expect_err("error");
        assert_eq!(err.to_string(), "backend");
    }
}
