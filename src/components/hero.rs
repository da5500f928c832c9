//! Hero header component

use maud::{Markup, PreEscaped, html};

use super::icons::{icon, is_external, link_icon_class, link_modifier};
use crate::avatar;
use crate::markdown::MarkdownRenderer;
use crate::profile::Profile;

/// Photo and avatar edge length in pixels
const PHOTO_SIZE: u32 = 160;

/// Renders hero section with photo, name, bio, documents and contact links
///
/// Profiles without a photo get an initials avatar. Document buttons carry
/// the `download` attribute unless disabled in the profile.
///
/// # Arguments
///
/// * `profile`: Portfolio owner content
/// * `markdown`: Renderer for the bio
///
/// # Returns
///
/// Hero header markup
pub fn hero(profile: &Profile, markdown: &MarkdownRenderer<'_>) -> Markup {
    html! {
        header class="hero" {
            @if let Some(photo) = &profile.photo {
                img class="hero-photo" src=(photo) alt=(format!("{} photo", profile.name))
                    width=(PHOTO_SIZE) height=(PHOTO_SIZE);
            } @else {
                div class="hero-photo hero-avatar" { (avatar::render(&profile.name, PHOTO_SIZE)) }
            }

            h1 class="hero-name" { (profile.name) }

            @if let Some(bio) = &profile.bio {
                div class="hero-bio" { (PreEscaped(markdown.render(bio))) }
            }

            @if !profile.documents.is_empty() {
                div class="hero-actions" {
                    @for doc in &profile.documents {
                        @if doc.download {
                            a class="button button-document" href=(doc.href) download {
                                (icon("ph ph-download-simple")) " " (doc.label)
                            }
                        } @else {
                            a class="button button-document" href=(doc.href) target="_blank" rel="noopener noreferrer" {
                                (icon("ph ph-file-text")) " " (doc.label)
                            }
                        }
                    }
                }
            }

            @if !profile.links.is_empty() {
                nav class="hero-links" {
                    @for link in &profile.links {
                        @let class = format!("button {}", link_modifier(link.kind));
                        @if is_external(&link.href) {
                            a class=(class) href=(link.href) target="_blank" rel="noopener noreferrer" {
                                (icon(link_icon_class(link.kind))) " " (link.label)
                            }
                        } @else {
                            a class=(class) href=(link.href) {
                                (icon(link_icon_class(link.kind))) " " (link.label)
                            }
                        }
                    }
                }
            }
        }
    }
}
