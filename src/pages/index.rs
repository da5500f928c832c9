//! Portfolio index page generation

use maud::{Markup, html};

use crate::components::gallery::gallery;
use crate::components::hero::hero;
use crate::components::layout::{PageHead, page_wrapper};
use crate::components::project_card::{project_card, project_grid};
use crate::components::sections::{certificates, faq, posts, section, skills, testimonials};
use crate::markdown::MarkdownRenderer;
use crate::profile::Profile;
use crate::projects::ProjectListing;

/// Stylesheet bundle written by the assets module
pub const STYLESHEET: &str = "assets/portfolio.css";

/// Carousel script written by the assets module
pub const CAROUSEL_SCRIPT: &str = "assets/carousel.js";

/// Data container for index page generation
pub struct IndexPageData<'a> {
    pub profile: &'a Profile,
    pub listing: &'a ProjectListing,
    /// Resolved preview per project, same order as the listing.
    pub previews: &'a [Option<String>],
}

/// Generates the portfolio index page
///
/// Assembles hero, projects, and every non-empty content block in the
/// order: projects, skills, certificates, blog, testimonials, gallery, FAQ.
/// The carousel script is only referenced when the gallery renders.
///
/// # Arguments
///
/// * `data`: Index page data container with all required fields
///
/// # Returns
///
/// Complete HTML markup for index page
pub fn generate(data: IndexPageData<'_>) -> Markup {
    let profile = data.profile;
    let markdown = MarkdownRenderer::new();
    let title = profile.page_title();
    let scripts: &[&str] = if profile.gallery.is_empty() {
        &[]
    } else {
        &[CAROUSEL_SCRIPT]
    };

    page_wrapper(
        PageHead {
            title: &title,
            description: profile.description.as_deref(),
            stylesheets: &[STYLESHEET],
            scripts,
        },
        &profile.name,
        html! {
            (hero(profile, &markdown))

            main class="sections" {
                (section("projects", "Projects", projects_body(data.listing, data.previews)))

                @if !profile.skills.is_empty() {
                    (section("skills", "Skills", skills(&profile.skills)))
                }
                @if !profile.certificates.is_empty() {
                    (section("certificates", "Certificates", certificates(&profile.certificates)))
                }
                @if !profile.posts.is_empty() {
                    (section("blog", "Blog", posts(&profile.posts, &markdown)))
                }
                @if !profile.testimonials.is_empty() {
                    (section("testimonials", "Testimonials", testimonials(&profile.testimonials)))
                }
                @if !profile.gallery.is_empty() {
                    (section("gallery", "Achievements Gallery", gallery(&profile.gallery, &markdown)))
                }
                @if !profile.faq.is_empty() {
                    (section("faq", "FAQ", faq(&profile.faq, &markdown)))
                }
            }
        },
    )
}

/// Renders loading notice, empty state, or the project grid
fn projects_body(listing: &ProjectListing, previews: &[Option<String>]) -> Markup {
    if listing.is_loading() {
        return html! { p class="loading-state" { "Loading projects..." } };
    }

    if listing.projects().is_empty() {
        return html! { p class="empty-state" { "No projects to show yet." } };
    }

    project_grid(html! {
        @for (index, project) in listing.projects().iter().enumerate() {
            @let preview = previews.get(index).and_then(|p| p.as_deref());
            (project_card(project, preview))
        }
    })
}
