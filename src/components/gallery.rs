//! Achievements gallery carousel component

use maud::{Markup, PreEscaped, html};

use super::icons::icon;
use crate::carousel::Carousel;
use crate::markdown::MarkdownRenderer;
use crate::profile::Slide;

/// Renders gallery carousel with every slide present in the markup
///
/// The slide at the carousel's current index is marked active. Each slide
/// carries its wrapped `data-prev` and `data-next` targets, which the bundled
/// script follows when moving the `is-active` class. Galleries with a single
/// slide get no controls.
pub fn gallery(slides: &[Slide], markdown: &MarkdownRenderer<'_>) -> Markup {
    let carousel = Carousel::new(slides.len());

    html! {
        div class="carousel" data-carousel data-count=(carousel.len()) {
            div class="carousel-stage" {
                @if carousel.has_controls() {
                    button class="carousel-nav" type="button" data-carousel-prev aria-label="Previous" {
                        (icon("ph ph-caret-left"))
                    }
                }
                @for (index, slide) in slides.iter().enumerate() {
                    @let class = if index == carousel.current() { "carousel-slide is-active" } else { "carousel-slide" };
                    @let (prev, next) = carousel.neighbours(index);
                    figure class=(class) data-index=(index) data-prev=(prev) data-next=(next) {
                        img class="carousel-image" src=(slide.image) alt=(slide.caption) loading="lazy";
                        figcaption {
                            h4 class="carousel-caption" { (slide.caption) }
                            @if !slide.description.trim().is_empty() {
                                div class="carousel-description" { (PreEscaped(markdown.render(&slide.description))) }
                            }
                        }
                    }
                }
                @if carousel.has_controls() {
                    button class="carousel-nav" type="button" data-carousel-next aria-label="Next" {
                        (icon("ph ph-caret-right"))
                    }
                }
            }
            @if carousel.has_controls() {
                div class="carousel-dots" {
                    @for index in 0..carousel.len() {
                        @let class = if index == carousel.current() { "carousel-dot is-active" } else { "carousel-dot" };
                        button class=(class) type="button" data-carousel-go=(index)
                            aria-label=(format!("Go to slide {}", index + 1)) {}
                    }
                }
            }
        }
    }
}
