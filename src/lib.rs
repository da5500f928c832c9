//! Static portfolio generator for GitHub accounts.

mod assets;
pub mod avatar;
pub mod carousel;
pub mod components;
mod config;
mod endpoints;
mod generators;
mod http;
mod markdown;
pub mod pages;
mod preview;
mod profile;
mod projects;

pub use assets::{copy_static_dir, write_assets};
pub use config::Config;
pub use endpoints::{DEFAULT_API_BASE, DEFAULT_BRANCH, DEFAULT_RAW_BASE, Endpoints, MAX_PER_PAGE};
pub use generators::{SiteOptions, SiteReport, generate_site, resolve_previews};
pub use http::{DEFAULT_TIMEOUT, FetchError, HttpClient, UreqClient};
pub use markdown::MarkdownRenderer;
pub use preview::{ImageResolution, PreviewResolver, absolutize, extract_first_image};
pub use profile::{
    Certificate, ContactLink, Document, FaqEntry, LinkKind, Post, Profile, SkillGroup, Slide,
    Testimonial,
};
pub use projects::{ListingError, ListingOutcome, ProjectListing, ProjectRecord, parse_listing};
