use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::Cli;

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(cli: &Cli) {
    let is_tty = std::io::stdout().is_terminal();
    let _ = UI_PREFS.set(UiPrefs {
        progress: is_tty && !cli.quiet && !cli.json,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { progress: false })
}
