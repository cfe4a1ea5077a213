//! Terminal styling for notedraft output
//!
//! Everything printed by the CLI goes through a [`Tone`]: ids and networks
//! are accented, settings keys and post headings are muted, and only errors
//! are written for stderr. Color detection (`NO_COLOR`, `CLICOLOR`, TTY) is
//! left to `owo-colors`.

use indicatif::ProgressStyle;
use notedraft::types::{DraftDetails, Network};
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::{self, Display};
use std::sync::OnceLock;

/// Role of a piece of output text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Ids, networks, counts
    Accent,
    /// Completed actions
    Success,
    /// Failures
    Error,
    /// Dry runs and missing settings
    Warn,
    /// Keys, hints, post headings
    Muted,
    /// Section headers
    Emphasis,
}

impl Tone {
    const fn style(self) -> Style {
        match self {
            Self::Accent => Style::new().cyan(),
            Self::Success => Style::new().green(),
            Self::Error => Style::new().red(),
            Self::Warn => Style::new().yellow(),
            Self::Muted => Style::new().dimmed(),
            Self::Emphasis => Style::new().bold(),
        }
    }

    const fn stream(self) -> Stream {
        match self {
            Self::Error => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// A value rendered in a [`Tone`]
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    tone: Tone,
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.tone.style();
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.tone.stream(), |v| v.style(style))
        )
    }
}

/// Tone shortcuts for anything displayable
pub trait Stylize: Display {
    /// Render in `tone`
    fn tone(&self, tone: Tone) -> Styled<&Self> {
        Styled { value: self, tone }
    }

    /// [`Tone::Accent`]
    fn accent(&self) -> Styled<&Self> {
        self.tone(Tone::Accent)
    }

    /// [`Tone::Error`]
    fn error(&self) -> Styled<&Self> {
        self.tone(Tone::Error)
    }

    /// [`Tone::Muted`]
    fn muted(&self) -> Styled<&Self> {
        self.tone(Tone::Muted)
    }

    /// [`Tone::Emphasis`]
    fn emphasis(&self) -> Styled<&Self> {
        self.tone(Tone::Emphasis)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

const fn symbol(text: &'static str, tone: Tone) -> Styled<&'static str> {
    Styled { value: text, tone }
}

/// Green checkmark
pub const fn check() -> Styled<&'static str> {
    symbol("✓", Tone::Success)
}

/// Red cross, for stderr
pub const fn cross() -> Styled<&'static str> {
    symbol("✗", Tone::Error)
}

/// Step marker in verbose progress
pub const fn arrow() -> Styled<&'static str> {
    symbol("→", Tone::Accent)
}

/// List marker, highlighted for the stored social set
pub const fn marker(selected: bool) -> Styled<&'static str> {
    if selected {
        symbol("*", Tone::Accent)
    } else {
        symbol("○", Tone::Muted)
    }
}

/// Banner opening a dry-run preview
pub const fn dry_run_banner() -> Styled<&'static str> {
    symbol("Dry run - nothing will be sent", Tone::Warn)
}

/// Display names of `networks`, comma separated
pub fn network_list(networks: &[Network]) -> Styled<String> {
    let names: Vec<&str> = networks.iter().map(|n| n.display_name()).collect();
    Styled {
        value: names.join(", "),
        tone: Tone::Accent,
    }
}

/// Heading above one post of a draft, e.g. `Post 2/3`
pub fn post_heading(index: usize, total: usize) -> Styled<String> {
    Styled {
        value: format!("Post {}/{total}", index + 1),
        tone: Tone::Muted,
    }
}

/// Settings key as shown by `config show`
pub fn setting_key(key: &str) -> Styled<String> {
    Styled {
        value: format!("{key}:"),
        tone: Tone::Muted,
    }
}

/// Whether a secret is configured, without showing it
pub const fn secret_state(is_set: bool) -> Styled<&'static str> {
    if is_set {
        symbol("(set)", Tone::Success)
    } else {
        symbol("(not set)", Tone::Warn)
    }
}

/// Id of a created draft
pub fn draft_id(details: &DraftDetails) -> Styled<String> {
    Styled {
        value: details.id_string(),
        tone: Tone::Accent,
    }
}

/// Private draft URL, clickable where the terminal supports OSC 8
pub fn draft_link(url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}

/// Spinner shown while waiting on Typefully
pub fn network_spinner() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}
