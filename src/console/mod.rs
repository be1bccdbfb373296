//! Console rendering for the debate.
//!
//! The driver talks to a [`DebateView`] and is indifferent to how panels
//! are actually drawn; [`TermView`] is the ANSI terminal implementation.

/// Styling constants for panels, banners, and result messages.
pub mod theme;

use crossterm::style::Stylize;

use self::theme::PanelTheme;

/// Total panel width including borders
const PANEL_WIDTH: usize = 80;

/// Rendering sink for debate output.
///
/// Implementations must preserve call ordering; beyond that the core does
/// not care whether output is ANSI, plain text, or captured by a test.
pub trait DebateView {
    /// Print a plain banner/header line
    fn line(&mut self, text: &str);

    /// Render `text` in a bordered panel with the given title and styling
    fn panel(&mut self, text: &str, title: &str, theme: &PanelTheme);
}

/// ANSI terminal view drawing rounded panels on stdout
#[derive(Debug, Default)]
pub struct TermView;

impl TermView {
    /// Create a terminal view
    pub fn new() -> Self {
        Self
    }
}

impl DebateView for TermView {
    fn line(&mut self, text: &str) {
        println!("{}", text.bold());
    }

    fn panel(&mut self, text: &str, title: &str, theme: &PanelTheme) {
        let layout = compose_panel(text, title, PANEL_WIDTH);
        println!("{}", layout.top.as_str().with(theme.border));
        for body_line in &layout.body {
            println!(
                "{}{}{}",
                "\u{2502} ".with(theme.border),
                body_line.as_str().with(theme.text),
                " \u{2502}".with(theme.border),
            );
        }
        println!("{}", layout.bottom.as_str().with(theme.border));
    }
}

/// Uncolored panel geometry, separated out so layout is testable
#[derive(Debug, PartialEq)]
pub(crate) struct PanelLayout {
    pub(crate) top: String,
    pub(crate) body: Vec<String>,
    pub(crate) bottom: String,
}

pub(crate) fn compose_panel(text: &str, title: &str, width: usize) -> PanelLayout {
    let inner = width.saturating_sub(4).max(10);

    let mut top = format!("\u{256D}\u{2500} {title} ");
    let used = top.chars().count();
    if used < width - 1 {
        top.extend(std::iter::repeat('\u{2500}').take(width - 1 - used));
    }
    top.push('\u{256E}');

    let body = wrap_text(text, inner)
        .into_iter()
        .map(|line| {
            let pad = inner.saturating_sub(line.chars().count());
            format!("{line}{}", " ".repeat(pad))
        })
        .collect();

    let mut bottom = String::from('\u{2570}');
    bottom.extend(std::iter::repeat('\u{2500}').take(width - 2));
    bottom.push('\u{256F}');

    PanelLayout { top, body, bottom }
}

/// Greedy word wrap; words longer than the width are split hard.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();

            if current.is_empty() {
                current.push_str(word);
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = word.to_string();
            }

            // hard-split oversized words
            while current.chars().count() > width {
                let head: String = current.chars().take(width).collect();
                let tail: String = current.chars().skip(width).collect();
                lines.push(head);
                current = tail;
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
