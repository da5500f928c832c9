//! Portfolio owner content loaded from a TOML profile.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Everything on the page that does not come from the repository host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    /// Suffix of the page title, e.g. "Portfolio".
    #[serde(default)]
    pub headline: Option<String>,
    /// Meta description for search engines and link previews.
    #[serde(default)]
    pub description: Option<String>,
    /// Hero text, markdown.
    #[serde(default)]
    pub bio: Option<String>,
    /// Hero photo, path inside the static directory or URL.
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub links: Vec<ContactLink>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub gallery: Vec<Slide>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

/// Downloadable file shown as a hero button (CV, thesis).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    pub label: String,
    pub href: String,
    #[serde(default = "default_true")]
    pub download: bool,
}

/// Contact link shown under the hero buttons.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub kind: LinkKind,
}

/// Icon family for a contact link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Linkedin,
    Email,
    Github,
    Website,
    #[default]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Certificate {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    pub href: String,
}

/// Blog article teaser.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Post {
    pub title: String,
    /// Teaser text, markdown.
    #[serde(default)]
    pub summary: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

/// Achievements gallery slide.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Slide {
    pub image: String,
    pub caption: String,
    /// Markdown.
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqEntry {
    pub question: String,
    /// Markdown.
    pub answer: String,
}

fn default_true() -> bool {
    true
}

impl Profile {
    /// Minimal profile for an account without a profile file.
    pub fn for_account(account: &str, profile_url: &str) -> Self {
        Self {
            name: account.to_string(),
            links: vec![ContactLink {
                label: "GitHub".to_string(),
                href: profile_url.to_string(),
                kind: LinkKind::Github,
            }],
            ..Self::default()
        }
    }

    /// Reads and validates profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid TOML for a
    /// profile, or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;

        let profile = Self::from_toml(&content)
            .with_context(|| format!("Invalid profile: {}", path.display()))?;

        Ok(profile)
    }

    /// Parses and validates profile TOML.
    ///
    /// # Errors
    ///
    /// Returns error on TOML syntax errors, unknown fields, or failed
    /// validation.
    pub fn from_toml(content: &str) -> Result<Self> {
        let profile: Self = toml::from_str(content).context("Failed to parse profile TOML")?;
        profile.validate()?;
        Ok(profile)
    }

    /// Page title shown in the browser tab.
    pub fn page_title(&self) -> String {
        match &self.headline {
            Some(headline) => format!("{} | {}", self.name, headline),
            None => self.name.clone(),
        }
    }

    /// Checks that required text and link targets are present.
    ///
    /// # Errors
    ///
    /// Returns error naming the first blank field found.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Profile name must not be blank");
        }

        for doc in &self.documents {
            require_target("document", &doc.label, &doc.href)?;
        }
        for link in &self.links {
            require_target("link", &link.label, &link.href)?;
        }
        for cert in &self.certificates {
            require_target("certificate", &cert.title, &cert.href)?;
        }
        for post in &self.posts {
            require_target("post", &post.title, &post.href)?;
        }
        for slide in &self.gallery {
            require_target("gallery slide", &slide.caption, &slide.image)?;
        }

        Ok(())
    }
}

fn require_target(kind: &str, label: &str, target: &str) -> Result<()> {
    if target.trim().is_empty() {
        bail!("Profile {} '{}' has no target", kind, label);
    }
    Ok(())
}
