//! Terminal palette
//!
//! Output code asks for a [`Role`] (what the text *is*) rather than a color,
//! and the active [`Theme`] decides how that role looks.

use owo_colors::{OwoColorize, Style};
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// What a piece of terminal text represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Banner and section rules
    Masthead,
    /// Article titles
    Headline,
    /// Author names
    Byline,
    /// Category names
    Section,
    /// Slugs, counters and other secondary detail
    Aside,
    /// Field labels in key/value lines
    Label,
    Accent,
    Done,
    Failed,
    Caution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    colored: bool,
}

impl Theme {
    /// Colors when stdout is a terminal and `NO_COLOR`/`CLICOLOR` allow it
    pub fn detect() -> Self {
        let colored = console::colors_enabled() && console::Term::stdout().is_term();
        Self { colored }
    }

    pub fn colored() -> Self {
        Self { colored: true }
    }

    pub fn plain() -> Self {
        Self { colored: false }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    pub fn style(&self, role: Role) -> Style {
        if !self.colored {
            return Style::new();
        }

        match role {
            Role::Masthead => Style::new().cyan().bold(),
            Role::Headline => Style::new().bold(),
            Role::Byline => Style::new().blue(),
            Role::Section => Style::new().magenta(),
            Role::Aside => Style::new().bright_black(),
            Role::Label => Style::new().white().dimmed(),
            Role::Accent => Style::new().magenta(),
            Role::Done => Style::new().green().bold(),
            Role::Failed => Style::new().red().bold(),
            Role::Caution => Style::new().yellow().bold(),
        }
    }

    pub fn paint(&self, role: Role, text: &str) -> String {
        text.style(self.style(role)).to_string()
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
