//! Reusable HTML components for the portfolio page
//!
//! Each block of the page (hero, project cards, content sections, gallery)
//! is a Maud component function so the index page only assembles them.

pub mod footer;
pub mod gallery;
pub mod hero;
pub mod icons;
pub mod layout;
pub mod project_card;
pub mod sections;
