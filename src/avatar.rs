//! Initials avatars for people without a photo.
//!
//! Testimonial authors and photo-less profiles get a round badge with their
//! initials on a pastel background picked deterministically from the name.

use maud::{Markup, PreEscaped, html};

const COLORS: &[&str] = &[
    "#dc8a78", "#dd7878", "#ea76cb", "#eba0ac", "#ca9ee6", "#cba6f7", "#b4befe", "#8caaee",
    "#85c1dc", "#74c7ec", "#81c8be", "#94e2d5", "#a6d189", "#c6d57e", "#e5c890", "#fab387",
];

/// FNV-1a over the trimmed name.
fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

/// Up to two uppercase initials, skipping honorifics like "Dr." or "Prof.".
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name
        .split_whitespace()
        .filter(|w| !w.ends_with('.'))
        .collect();

    let picked: Vec<&str> = match words.as_slice() {
        [] => name.split_whitespace().take(1).collect(),
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };

    picked
        .iter()
        .filter_map(|w| w.chars().find(|c| c.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Background color for a name.
pub fn color(name: &str) -> &'static str {
    COLORS[(hash(name) % COLORS.len() as u64) as usize]
}

/// Generates SVG badge with initials.
pub fn generate_svg(name: &str, size: u32) -> String {
    let text = maud::html! { (initials(name)) }.into_string();
    let bg = color(name);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100" role="img"><circle cx="50" cy="50" r="50" fill="{bg}"/><text x="50" y="50" dy=".35em" text-anchor="middle" font-family="system-ui, sans-serif" font-size="40" font-weight="600" fill="#ffffff">{text}</text></svg>"##
    )
}

/// Inline avatar element.
pub fn render(name: &str, size: u32) -> Markup {
    html! { span class="avatar" title=(name) { (PreEscaped(generate_svg(name, size))) } }
}
