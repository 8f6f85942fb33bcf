//! Terminal detection utilities.
//!
//! Provides TTY detection and the color decision shared by every styling
//! helper.

use std::env;
use std::sync::atomic::{AtomicU8, Ordering};

const OVERRIDE_NONE: u8 = 0;
const OVERRIDE_ON: u8 = 1;
const OVERRIDE_OFF: u8 = 2;

static COLOR_OVERRIDE: AtomicU8 = AtomicU8::new(OVERRIDE_NONE);

/// Returns `true` if stdout is connected to a terminal (TTY).
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Forces color on (`Some(true)`), off (`Some(false)`), or restores
/// environment detection (`None`) for the rest of the process.
pub fn set_color_override(force: Option<bool>) {
    let value = match force {
        Some(true) => OVERRIDE_ON,
        Some(false) => OVERRIDE_OFF,
        None => OVERRIDE_NONE,
    };
    COLOR_OVERRIDE.store(value, Ordering::Relaxed);
}

/// Determines if ANSI color codes should be used.
///
/// An override set with [`set_color_override`] wins. Otherwise:
/// - `NO_COLOR` (any value): disables color (<https://no-color.org/>)
/// - `CLICOLOR=0`: disables color
/// - `TERM=dumb`: disables color
/// - `CLICOLOR_FORCE` (any value): forces color even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    match COLOR_OVERRIDE.load(Ordering::Relaxed) {
        OVERRIDE_ON => return true,
        OVERRIDE_OFF => return false,
        _ => {}
    }

    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if env::var("CLICOLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("TERM").as_deref() == Ok("dumb") {
        return false;
    }

    if env::var_os("CLICOLOR_FORCE").is_some() {
        return true;
    }

    is_tty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_environment() {
        set_color_override(Some(false));
        assert!(!supports_color());
        set_color_override(Some(true));
        assert!(supports_color());
        set_color_override(Some(false));
    }
}
