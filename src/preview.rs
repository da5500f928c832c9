//! Preview image resolution for project cards.
//!
//! Each project first tries its conventional `preview.png`. When that image
//! fails to load, the resolver reads the project README once and takes the
//! first embedded markdown image instead. Every failure after that ends in
//! no image at all; the card renders without one.

use std::sync::LazyLock;

use regex::Regex;

use crate::endpoints::Endpoints;
use crate::http::HttpClient;

/// First `![alt](target)` embed, capturing the target.
static MARKDOWN_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").expect("markdown image pattern is valid")
});

/// Absolute URL prefix: a scheme with authority (`https://`) or a `data:` URI.
static ABSOLUTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*://|(?i:data):)")
        .expect("absolute url pattern is valid")
});

/// Returns the target of the first embedded image in markdown text.
///
/// Only the first `![alt](target)` occurrence is considered. Surrounding
/// whitespace inside the parentheses is trimmed; an all-whitespace target
/// counts as no match.
pub fn extract_first_image(markdown: &str) -> Option<&str> {
    let target = MARKDOWN_IMAGE.captures(markdown)?.get(1)?.as_str().trim();
    (!target.is_empty()).then_some(target)
}

/// Resolves an image target against a project's raw content base.
///
/// Targets with a scheme and authority (`https://host/x`) and `data:` URIs
/// pass through unchanged. A colon alone does not make a target absolute,
/// so `shots:v2.png` is a repository path. Protocol relative targets
/// (`//host/path`) get `https:`. Anything else is a repository path: one
/// leading `./` and any leading `/` are stripped before joining onto
/// `base`, which must end with a slash.
pub fn absolutize(target: &str, base: &str) -> String {
    if ABSOLUTE_URL.is_match(target) {
        return target.to_string();
    }

    if let Some(rest) = target.strip_prefix("//") {
        return format!("https://{}", rest);
    }

    let path = target.strip_prefix("./").unwrap_or(target);
    format!("{}{}", base, path.trim_start_matches('/'))
}

/// Resolution state of one project's preview image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageResolution {
    /// Conventional preview URL, not yet known to fail.
    Conventional(String),
    /// Candidate taken from the README after the conventional URL failed.
    Fallback(String),
    /// Candidate that loaded; rendered on the card.
    Loaded(String),
    /// Nothing to render.
    NoImage,
}

/// Owns one project's preview image state.
///
/// The README is fetched at most once per resolver and a candidate that
/// failed is never tried again.
#[derive(Debug, Clone)]
pub struct PreviewResolver {
    project: String,
    conventional_url: String,
    readme_url: String,
    content_base: String,
    state: ImageResolution,
    fallback_attempted: bool,
}

impl PreviewResolver {
    /// Creates resolver starting at the project's conventional preview URL.
    pub fn new(project: &str, endpoints: &Endpoints) -> Self {
        let conventional_url = endpoints.preview_url(project);

        Self {
            project: project.to_string(),
            readme_url: endpoints.readme_url(project),
            content_base: endpoints.content_base(project),
            state: ImageResolution::Conventional(conventional_url.clone()),
            conventional_url,
            fallback_attempted: false,
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn state(&self) -> &ImageResolution {
        &self.state
    }

    /// Whether the README fallback has been used.
    pub fn fallback_attempted(&self) -> bool {
        self.fallback_attempted
    }

    /// URL to attempt or display, `None` once resolution gave up.
    pub fn candidate(&self) -> Option<&str> {
        match &self.state {
            ImageResolution::Conventional(url)
            | ImageResolution::Fallback(url)
            | ImageResolution::Loaded(url) => Some(url),
            ImageResolution::NoImage => None,
        }
    }

    /// Marks the current candidate as successfully loaded.
    pub fn image_loaded(&mut self) {
        self.state = match std::mem::replace(&mut self.state, ImageResolution::NoImage) {
            ImageResolution::Conventional(url) | ImageResolution::Fallback(url) => {
                ImageResolution::Loaded(url)
            }
            other => other,
        };
    }

    /// Records that the current candidate failed to load.
    ///
    /// The first failure before any fallback reads the README once and
    /// switches to its first embedded image. Any later failure, a README
    /// that cannot be fetched, or a README without an image ends in
    /// [`ImageResolution::NoImage`].
    pub fn image_failed(&mut self, client: &dyn HttpClient) {
        let previous = std::mem::replace(&mut self.state, ImageResolution::NoImage);

        self.state = match previous {
            ImageResolution::Conventional(_) | ImageResolution::Loaded(_)
                if !self.fallback_attempted =>
            {
                self.fallback_attempted = true;
                self.readme_candidate(client)
                    .map_or(ImageResolution::NoImage, ImageResolution::Fallback)
            }
            _ => ImageResolution::NoImage,
        };
    }

    /// Drives resolution to a terminal state by probing each candidate.
    ///
    /// Returns the loaded image URL, or `None` when no image should render.
    pub fn resolve(&mut self, client: &dyn HttpClient) -> Option<String> {
        loop {
            let url = match &self.state {
                ImageResolution::Loaded(url) => return Some(url.clone()),
                ImageResolution::NoImage => return None,
                ImageResolution::Conventional(url) | ImageResolution::Fallback(url) => url.clone(),
            };

            match client.probe_image(&url) {
                Ok(()) => self.image_loaded(),
                Err(e) => {
                    tracing::debug!(project = %self.project, "Preview failed: {e}");
                    self.image_failed(client);
                }
            }
        }
    }

    fn readme_candidate(&self, client: &dyn HttpClient) -> Option<String> {
        let readme = match client.get_text(&self.readme_url) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(project = %self.project, "README unavailable: {e}");
                return None;
            }
        };

        let Some(target) = extract_first_image(&readme) else {
            tracing::debug!(project = %self.project, "README has no embedded image");
            return None;
        };

        let url = absolutize(target, &self.content_base);
        if url == self.conventional_url {
            return None;
        }

        Some(url)
    }
}
