//! Remote URL construction for one account.

/// Default repository listing API host.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default raw content host.
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

/// Default branch holding preview images and READMEs.
pub const DEFAULT_BRANCH: &str = "main";

/// Largest page size the listing endpoint accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Conventional preview image file name at repository root.
const PREVIEW_FILE: &str = "preview.png";

/// Conventional readme file name at repository root.
const README_FILE: &str = "README.md";

/// Builds every remote URL a run needs for a single account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
    raw_base: String,
    account: String,
    branch: String,
    per_page: u8,
}

impl Endpoints {
    /// Creates endpoints on the public GitHub hosts.
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            raw_base: DEFAULT_RAW_BASE.to_string(),
            account: account.into(),
            branch: DEFAULT_BRANCH.to_string(),
            per_page: MAX_PER_PAGE,
        }
    }

    /// Overrides both hosts. Trailing slashes are ignored.
    pub fn with_hosts(mut self, api_base: &str, raw_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self.raw_base = raw_base.trim_end_matches('/').to_string();
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Sets listing page size, clamped to `1..=MAX_PER_PAGE`.
    pub fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Repository listing URL for the account.
    pub fn listing_url(&self) -> String {
        format!(
            "{}/users/{}/repos?per_page={}",
            self.api_base, self.account, self.per_page
        )
    }

    /// Base URL that relative paths inside a project resolve against,
    /// with trailing slash.
    pub fn content_base(&self, project: &str) -> String {
        format!(
            "{}/{}/{}/{}/",
            self.raw_base, self.account, project, self.branch
        )
    }

    /// Conventional preview image URL for a project.
    pub fn preview_url(&self, project: &str) -> String {
        format!("{}{}", self.content_base(project), PREVIEW_FILE)
    }

    /// Conventional README URL for a project.
    pub fn readme_url(&self, project: &str) -> String {
        format!("{}{}", self.content_base(project), README_FILE)
    }

    /// Profile page of the account on the hosting site.
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.account)
    }
}
