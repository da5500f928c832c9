//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;

/// Document head settings for one page
pub struct PageHead<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub stylesheets: &'a [&'a str],
    pub scripts: &'a [&'a str],
}

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, charset, viewport, meta description and asset loading
/// while the caller provides page-specific body content. Scripts are
/// deferred so they run after the slides exist.
///
/// # Arguments
///
/// * `head`: Title, description and asset paths
/// * `owner`: Portfolio owner name for the footer
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(head: PageHead<'_>, owner: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="scroll-smooth" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (head.title) }
                @if let Some(description) = head.description {
                    meta name="description" content=(description);
                }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for stylesheet in head.stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
                @for script in head.scripts {
                    script src=(script) defer {}
                }
            }
            body {
                div class="container" {
                    (body)
                }
                (footer(owner))
            }
        }
    }
}
