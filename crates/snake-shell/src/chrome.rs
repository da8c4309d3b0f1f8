//! Static layout of the menu bar, toolbar and button panel.

use crate::control::Control;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Action(Control),
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub entries: Vec<Entry>,
}

pub fn menu_bar() -> Vec<Menu> {
    vec![
        Menu {
            title: "&File",
            entries: vec![
                Entry::Action(Control::Load),
                Entry::Action(Control::Save),
                Entry::Separator,
                Entry::Action(Control::Exit),
            ],
        },
        Menu {
            title: "Game",
            entries: vec![
                Entry::Action(Control::Start),
                Entry::Action(Control::Pause),
                Entry::Action(Control::Resume),
                Entry::Action(Control::Reset),
            ],
        },
    ]
}

pub fn toolbar() -> Vec<Entry> {
    vec![
        Entry::Action(Control::Load),
        Entry::Action(Control::Save),
        Entry::Separator,
        Entry::Action(Control::Start),
        Entry::Action(Control::Pause),
        Entry::Action(Control::Resume),
        Entry::Action(Control::Reset),
        Entry::Separator,
        Entry::Action(Control::Exit),
    ]
}

/// Vertical button column, top to bottom.
pub fn button_panel() -> [Control; 7] {
    [
        Control::Load,
        Control::Save,
        Control::Start,
        Control::Pause,
        Control::Resume,
        Control::Reset,
        Control::Exit,
    ]
}

/// `"&Load..."` -> `"Load..."`. A doubled `&&` stands for a literal ampersand.
pub fn strip_mnemonic(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut chars = label.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '&' {
            if chars.peek() == Some(&'&') {
                out.push('&');
                chars.next();
            }
            continue;
        }
        out.push(ch);
    }
    out
}

/// Accelerator character following the first single `&`, lowercased.
pub fn mnemonic(label: &str) -> Option<char> {
    let mut chars = label.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '&' {
            continue;
        }
        match chars.next() {
            Some('&') => continue,
            Some(next) => return Some(next.to_ascii_lowercase()),
            None => return None,
        }
    }
    None
}
