//! Site generation pipeline.
//!
//! One run lists the account's projects, resolves a preview per project,
//! renders the index page and writes it next to the bundled assets.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{copy_static_dir, write_assets};
use crate::endpoints::Endpoints;
use crate::http::HttpClient;
use crate::pages::index::{IndexPageData, generate};
use crate::preview::PreviewResolver;
use crate::profile::Profile;
use crate::projects::{ListingOutcome, ProjectListing};

/// Inputs of one generation run besides the remote client.
pub struct SiteOptions<'a> {
    pub endpoints: &'a Endpoints,
    pub profile: &'a Profile,
    pub output: &'a Path,
    pub static_dir: Option<&'a Path>,
}

/// Summary of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub index_path: PathBuf,
    /// Projects kept after description filtering.
    pub projects: usize,
    /// Projects whose card shows a preview image.
    pub previews: usize,
    /// Previews that came from a README fallback.
    pub readme_previews: usize,
    /// Static files copied into the output.
    pub static_files: usize,
    /// Whether the repository listing could not be loaded.
    pub listing_failed: bool,
}

/// Resolves one preview per project, in listing order.
///
/// Each project gets its own resolver; no state is shared between them.
///
/// # Returns
///
/// Preview URL per project (`None` when no image renders) and the number
/// of previews taken from README fallbacks
pub fn resolve_previews(
    listing: &ProjectListing,
    client: &dyn HttpClient,
    endpoints: &Endpoints,
) -> (Vec<Option<String>>, usize) {
    let mut readme_previews = 0;

    let previews = listing
        .projects()
        .iter()
        .map(|project| {
            let mut resolver = PreviewResolver::new(project.name(), endpoints);
            let url = resolver.resolve(client);
            tracing::debug!(project = resolver.project(), preview = ?url, "Preview resolved");
            if url.is_some() && resolver.fallback_attempted() {
                readme_previews += 1;
            }
            url
        })
        .collect();

    (previews, readme_previews)
}

/// Generates the portfolio site into the output directory.
///
/// Remote failures never abort the run: an unavailable listing renders an
/// empty gallery and unresolvable previews render cards without images.
///
/// # Errors
///
/// Returns error if the output directory, assets, or index page cannot be
/// written, or if static files cannot be copied.
pub fn generate_site(options: SiteOptions<'_>, client: &dyn HttpClient) -> Result<SiteReport> {
    let output = options.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    // Generated files must win over static files with the same name.
    let static_files = match options.static_dir {
        Some(dir) => {
            if dir.join("index.html").is_file() {
                tracing::warn!(
                    "Static index.html in {} is replaced by the generated page",
                    dir.display()
                );
            }
            copy_static_dir(dir, output)
                .with_context(|| format!("Failed to copy static files from {}", dir.display()))?
        }
        None => 0,
    };

    let mut listing = ProjectListing::new();
    let listing_failed = matches!(
        listing.fetch(client, options.endpoints),
        ListingOutcome::Failed(_)
    );

    let (previews, readme_previews) = resolve_previews(&listing, client, options.endpoints);
    let preview_count = previews.iter().filter(|p| p.is_some()).count();
    tracing::info!(
        "Resolved {} of {} previews ({} from README)",
        preview_count,
        previews.len(),
        readme_previews
    );

    let html = generate(IndexPageData {
        profile: options.profile,
        listing: &listing,
        previews: &previews,
    });

    let index_path = output.join("index.html");
    fs::write(&index_path, html.into_string())
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    write_assets(&output.join("assets")).context("Failed to write assets")?;

    Ok(SiteReport {
        index_path,
        projects: listing.projects().len(),
        previews: preview_count,
        readme_previews,
        static_files,
        listing_failed,
    })
}
