//! Page footer component

use maud::{Markup, html};

/// Renders footer with owner name and generator credit
pub fn footer(owner: &str) -> Markup {
    html! {
        footer class="site-footer" {
            span { "© " (owner) }
            span class="footer-separator" { "·" }
            span {
                "Built with "
                a href="https://crates.io/crates/folio" { "Folio" }
            }
        }
    }
}
