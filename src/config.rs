//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::endpoints::{DEFAULT_API_BASE, DEFAULT_RAW_BASE, Endpoints, MAX_PER_PAGE};
use crate::profile::Profile;

/// Static directory picked up when `--static-dir` is not given.
const DEFAULT_STATIC_DIR: &str = "public";

/// Command line configuration for Folio.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Config {
    /// GitHub account whose public repositories fill the project gallery
    pub account: String,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Profile TOML with bio, links, skills and other page content
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Directory copied into the output (photo, PDFs, certificate images)
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Branch holding preview.png and README.md in each repository
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Repositories requested from the listing endpoint
    #[arg(long, default_value_t = MAX_PER_PAGE, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub per_page: u8,

    /// Repository listing API base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Raw content base URL
    #[arg(long, default_value = DEFAULT_RAW_BASE)]
    pub raw_base: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the account is blank, the page size is out of
    /// range, the timeout is zero, or a given profile or static directory
    /// does not exist.
    pub fn validate(&self) -> Result<()> {
        if self.account.trim().is_empty() {
            bail!("Account name must not be empty");
        }

        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            bail!("Page size must be between 1 and {}", MAX_PER_PAGE);
        }

        if self.timeout == 0 {
            bail!("Timeout must be at least one second");
        }

        if let Some(profile) = &self.profile
            && !profile.is_file()
        {
            bail!("Profile file does not exist: {}", profile.display());
        }

        if let Some(dir) = &self.static_dir
            && !dir.is_dir()
        {
            bail!("Static directory does not exist: {}", dir.display());
        }

        Ok(())
    }

    /// Returns remote endpoints for the configured account and hosts.
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.account.trim())
            .with_hosts(&self.api_base, &self.raw_base)
            .with_branch(&self.branch)
            .with_per_page(self.per_page)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Returns static directory to copy: the explicit one, or `public`
    /// when it exists in the working directory.
    pub fn static_source(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.static_dir {
            return Some(dir.clone());
        }

        let fallback = PathBuf::from(DEFAULT_STATIC_DIR);
        fallback.is_dir().then_some(fallback)
    }

    /// Loads profile from file, or derives a minimal one from the account.
    ///
    /// # Errors
    ///
    /// Returns error if the profile file cannot be read or is invalid.
    pub fn load_profile(&self) -> Result<Profile> {
        match &self.profile {
            Some(path) => Profile::load(path),
            None => {
                let endpoints = self.endpoints();
                Ok(Profile::for_account(
                    endpoints.account(),
                    &endpoints.profile_url(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            account: "octocat".to_string(),
            output: PathBuf::from("dist"),
            profile: None,
            static_dir: None,
            branch: "main".to_string(),
            per_page: 100,
            api_base: DEFAULT_API_BASE.to_string(),
            raw_base: DEFAULT_RAW_BASE.to_string(),
            timeout: 10,
            no_open: true,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_default_config() {
        // Arrange
        let config = config();

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Default configuration should be valid");
    }

    #[test]
    fn test_validate_blank_account() {
        let mut config = config();
        config.account = "  ".to_string();

        let result = config.validate();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Account"));
    }

    #[test]
    fn test_validate_page_size_range() {
        let mut config = config();
        config.per_page = 0;
        assert!(config.validate().is_err());

        config.per_page = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_profile() {
        let mut config = config();
        config.profile = Some(PathBuf::from("/nonexistent/profile.toml"));

        let result = config.validate();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Profile file"));
    }

    #[test]
    fn test_validate_missing_static_dir() {
        let mut config = config();
        config.static_dir = Some(PathBuf::from("/nonexistent/public"));

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoints_from_config() {
        // Arrange
        let mut config = config();
        config.branch = "gh-pages".to_string();
        config.per_page = 20;

        // Act
        let endpoints = config.endpoints();

        // Assert
        assert_eq!(
            endpoints.listing_url(),
            "https://api.github.com/users/octocat/repos?per_page=20"
        );
        assert_eq!(endpoints.branch(), "gh-pages");
    }

    #[test]
    fn test_load_profile_without_file() {
        let profile = config().load_profile().expect("Minimal profile");

        assert_eq!(profile.name, "octocat");
        assert_eq!(profile.links[0].href, "https://github.com/octocat");
    }

    #[test]
    fn test_parse_from_args() {
        // Act
        let config = Config::try_parse_from([
            "folio",
            "octocat",
            "-o",
            "site",
            "--per-page",
            "50",
            "--no-open",
        ])
        .expect("Arguments should parse");

        // Assert
        assert_eq!(config.account, "octocat");
        assert_eq!(config.output, PathBuf::from("site"));
        assert_eq!(config.per_page, 50);
        assert!(config.no_open);
        assert_eq!(config.branch, "main");
    }

    #[test]
    fn test_parse_rejects_large_page_size() {
        let result = Config::try_parse_from(["folio", "octocat", "--per-page", "200"]);

        assert!(result.is_err());
    }
}
