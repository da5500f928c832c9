//! Static content sections: skills, certificates, posts, testimonials, FAQ

use maud::{Markup, PreEscaped, html};

use super::icons::{icon, is_external};
use crate::avatar;
use crate::markdown::MarkdownRenderer;
use crate::profile::{Certificate, FaqEntry, Post, SkillGroup, Testimonial};

/// Testimonial author photo and avatar edge length in pixels
const AUTHOR_SIZE: u32 = 40;

/// Renders titled page section with anchor id
pub fn section(id: &str, title: &str, body: Markup) -> Markup {
    html! {
        section class=(format!("section section-{}", id)) id=(id) {
            h2 class="section-title" { (title) }
            (body)
        }
    }
}

/// Renders skill groups as columns of tag chips
pub fn skills(groups: &[SkillGroup]) -> Markup {
    html! {
        div class="skill-groups" {
            @for (index, group) in groups.iter().enumerate() {
                div class="skill-group" {
                    h3 class="skill-title" { (group.title) }
                    div class="skill-tags" {
                        @for item in &group.items {
                            span class=(format!("skill-tag tone-{}", index % 3)) { (item) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders certificate cards with optional badge image
pub fn certificates(certificates: &[Certificate]) -> Markup {
    html! {
        div class="card-grid" {
            @for cert in certificates {
                div class="certificate-card" {
                    @if let Some(image) = &cert.image {
                        img class="certificate-image" src=(image) alt=(cert.title) loading="lazy";
                    }
                    p class="certificate-title" { (cert.title) }
                    a class="certificate-link" href=(cert.href) target="_blank" rel="noopener noreferrer" {
                        "View Certificate"
                    }
                }
            }
        }
    }
}

/// Renders blog post teasers
pub fn posts(posts: &[Post], markdown: &MarkdownRenderer<'_>) -> Markup {
    html! {
        div class="card-grid card-grid-wide" {
            @for post in posts {
                article class="post-card" {
                    h3 class="post-title" { (post.title) }
                    @if !post.summary.trim().is_empty() {
                        div class="post-summary" { (PreEscaped(markdown.render(&post.summary))) }
                    }
                    @if is_external(&post.href) {
                        a class="post-link" href=(post.href) target="_blank" rel="noopener noreferrer" { "Read More" }
                    } @else {
                        a class="post-link" href=(post.href) { "Read More" }
                    }
                }
            }
        }
    }
}

/// Renders testimonial quotes with author attribution
///
/// Authors without a photo get an initials avatar. When the testimonial
/// has a link, the author name points to it.
pub fn testimonials(testimonials: &[Testimonial]) -> Markup {
    html! {
        div class="card-grid card-grid-wide" {
            @for testimonial in testimonials {
                blockquote class="testimonial" {
                    p class="testimonial-quote" { "“" (testimonial.quote) "”" }
                    div class="testimonial-author" {
                        @if let Some(photo) = &testimonial.photo {
                            img class="avatar" src=(photo) alt=(testimonial.author)
                                width=(AUTHOR_SIZE) height=(AUTHOR_SIZE);
                        } @else {
                            (avatar::render(&testimonial.author, AUTHOR_SIZE))
                        }
                        div {
                            @if let Some(href) = &testimonial.href {
                                a class="testimonial-name" href=(href) target="_blank" rel="noopener noreferrer" {
                                    (testimonial.author)
                                }
                            } @else {
                                p class="testimonial-name" { (testimonial.author) }
                            }
                            @if let Some(role) = &testimonial.role {
                                p class="testimonial-role" { (role) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders FAQ entries as collapsible details elements
pub fn faq(entries: &[FaqEntry], markdown: &MarkdownRenderer<'_>) -> Markup {
    html! {
        div class="faq-list" {
            @for entry in entries {
                details class="faq-entry" {
                    summary class="faq-question" {
                        (entry.question)
                        (icon("ph ph-caret-down faq-caret"))
                    }
                    div class="faq-answer" { (PreEscaped(markdown.render(&entry.answer))) }
                }
            }
        }
    }
}
