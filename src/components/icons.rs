//! Phosphor icon rendering for links and buttons

use maud::{Markup, html};

use crate::profile::LinkKind;

/// Returns Phosphor icon class for a contact link kind
pub fn link_icon_class(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Linkedin => "ph ph-linkedin-logo",
        LinkKind::Email => "ph ph-envelope-simple",
        LinkKind::Github => "ph ph-github-logo",
        LinkKind::Website => "ph ph-globe",
        LinkKind::Other => "ph ph-link",
    }
}

/// Returns CSS modifier giving each link kind its button color
pub fn link_modifier(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Linkedin => "link-linkedin",
        LinkKind::Email => "link-email",
        LinkKind::Github => "link-github",
        LinkKind::Website | LinkKind::Other => "link-other",
    }
}

/// Renders icon element for a Phosphor class
pub fn icon(class: &str) -> Markup {
    html! { i class=(class) aria-hidden="true" {} }
}

/// Whether a link leaves the page and should open in a new tab
///
/// `mailto:` and `tel:` links and site-relative paths stay in place.
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_icon_classes() {
        assert_eq!(link_icon_class(LinkKind::Github), "ph ph-github-logo");
        assert_eq!(link_icon_class(LinkKind::Email), "ph ph-envelope-simple");
        assert_eq!(link_icon_class(LinkKind::Other), "ph ph-link");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://www.linkedin.com/in/x"));
        assert!(!is_external("mailto:me@example.com"));
        assert!(!is_external("cv.pdf"));
    }

    #[test]
    fn test_icon_markup() {
        let html = icon("ph ph-globe").into_string();

        assert_eq!(html, "<i class=\"ph ph-globe\" aria-hidden=\"true\"></i>");
    }
}
