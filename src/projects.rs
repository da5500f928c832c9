//! Repository listing acquisition and filtering.

use serde::Deserialize;
use thiserror::Error;

use crate::endpoints::Endpoints;
use crate::http::{FetchError, HttpClient};

/// Repository shown in the project gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    name: String,
    description: String,
    link: String,
}

impl ProjectRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Repository page on the hosting site.
    pub fn link(&self) -> &str {
        &self.link
    }
}

/// Listing entry as returned by the API. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawRepository {
    name: String,
    description: Option<String>,
    html_url: String,
}

impl RawRepository {
    fn into_record(self) -> Option<ProjectRecord> {
        let description = self.description?;
        if description.trim().is_empty() {
            return None;
        }

        Some(ProjectRecord {
            name: self.name,
            description,
            link: self.html_url,
        })
    }
}

/// Reasons a listing attempt produced no projects.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("repository listing request failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("repository listing is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result of one [`ProjectListing::fetch`] attempt.
#[derive(Debug)]
pub enum ListingOutcome {
    /// Listing decoded; carries the number of projects kept.
    Loaded(usize),
    /// Listing unavailable; the project list is empty.
    Failed(ListingError),
}

/// Decodes a listing body and keeps entries with a description.
///
/// Remote ordering is preserved. Entries whose description is missing,
/// null, empty, or whitespace only are dropped.
///
/// # Errors
///
/// Returns [`ListingError::Malformed`] when the body is not a JSON array of
/// repository objects.
pub fn parse_listing(body: &str) -> Result<Vec<ProjectRecord>, ListingError> {
    let raw: Vec<RawRepository> = serde_json::from_str(body)?;
    Ok(raw.into_iter().filter_map(RawRepository::into_record).collect())
}

/// Project gallery contents plus the loading flag the page renders from.
#[derive(Debug, Clone)]
pub struct ProjectListing {
    loading: bool,
    projects: Vec<ProjectRecord>,
}

impl Default for ProjectListing {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectListing {
    /// Creates listing in loading state with no projects.
    pub fn new() -> Self {
        Self {
            loading: true,
            projects: Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Runs one listing attempt against the account's listing endpoint.
    ///
    /// Never fails: on any error the project list is left empty. The
    /// loading flag is cleared exactly once per call regardless of outcome.
    pub fn fetch(&mut self, client: &dyn HttpClient, endpoints: &Endpoints) -> ListingOutcome {
        self.loading = true;
        self.projects.clear();

        let url = endpoints.listing_url();
        let result = client
            .get_text(&url)
            .map_err(ListingError::from)
            .and_then(|body| parse_listing(&body));

        self.loading = false;

        match result {
            Ok(projects) => {
                tracing::info!(
                    account = endpoints.account(),
                    count = projects.len(),
                    "Listed projects"
                );
                let count = projects.len();
                self.projects = projects;
                ListingOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::warn!("{e}");
                ListingOutcome::Failed(e)
            }
        }
    }
}
