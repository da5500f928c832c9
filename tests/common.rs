//! Shared test utilities for integration tests.
//!
//! Provides a scripted in-memory repository host so generation can be
//! exercised end to end without network access.

#![allow(dead_code)]

use folio::{FetchError, HttpClient};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

pub const ACCOUNT: &str = "me";
pub const LISTING_URL: &str = "https://api.github.com/users/me/repos?per_page=100";

/// Raw content URL for a file in one of the account's repositories.
pub fn raw_url(project: &str, file: &str) -> String {
    format!("https://raw.githubusercontent.com/{ACCOUNT}/{project}/main/{file}")
}

/// Scripted host: serves registered texts, loads registered images, and
/// records every request in order.
#[derive(Default)]
pub struct FakeHost {
    texts: HashMap<String, String>,
    images: HashSet<String>,
    gets: RefCell<Vec<String>>,
    probes: RefCell<Vec<String>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.texts.insert(url.into(), body.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.insert(url.into());
        self
    }

    /// Serves a listing body built from `(name, description)` pairs.
    pub fn with_listing(self, repos: &[(&str, Option<&str>)]) -> Self {
        let entries: Vec<String> = repos
            .iter()
            .map(|(name, description)| {
                let description = match description {
                    Some(d) => format!("\"{}\"", d),
                    None => "null".to_string(),
                };
                format!(
                    r#"{{"name": "{name}", "description": {description}, "html_url": "https://github.com/{ACCOUNT}/{name}", "stargazers_count": 3}}"#
                )
            })
            .collect();

        self.with_text(LISTING_URL, format!("[{}]", entries.join(",")))
    }

    pub fn gets(&self) -> Vec<String> {
        self.gets.borrow().clone()
    }

    pub fn probes(&self) -> Vec<String> {
        self.probes.borrow().clone()
    }

    /// Number of GET requests made for `url`.
    pub fn get_count(&self, url: &str) -> usize {
        self.gets.borrow().iter().filter(|u| *u == url).count()
    }

    /// Number of probes made for `url`.
    pub fn probe_count(&self, url: &str) -> usize {
        self.probes.borrow().iter().filter(|u| *u == url).count()
    }
}

impl HttpClient for FakeHost {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.gets.borrow_mut().push(url.to_string());
        self.texts.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    }

    fn probe_image(&self, url: &str) -> Result<(), FetchError> {
        self.probes.borrow_mut().push(url.to_string());
        if self.images.contains(url) {
            Ok(())
        } else {
            Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }
}
