//! Project gallery card component

use maud::{Markup, html};

use crate::projects::ProjectRecord;

/// Renders single project card
///
/// The preview image appears only when resolution produced a loadable
/// URL. A project without one renders text only, with no placeholder.
pub fn project_card(project: &ProjectRecord, preview: Option<&str>) -> Markup {
    html! {
        article class="project-card" {
            @if let Some(src) = preview {
                img class="project-preview" src=(src) alt=(format!("{} preview", project.name()))
                    loading="lazy";
            }
            h3 class="project-name" { (project.name()) }
            p class="project-description" { (project.description()) }
            a class="project-link" href=(project.link()) target="_blank" rel="noopener noreferrer" {
                "View on GitHub"
            }
        }
    }
}

/// Wraps project cards in the responsive grid container
pub fn project_grid(cards: Markup) -> Markup {
    html! {
        div class="project-grid" {
            (cards)
        }
    }
}
