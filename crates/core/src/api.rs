//! Read-only client for the portfolio CMS API.
//!
//! The backend owns persistence and editing; this client only hydrates the
//! content snapshot at startup. Every failure degrades to the built-in
//! sample content — the terminal must come up with or without a network.

use std::time::Duration;

use serde::Deserialize;

use crate::content::{
    AboutContent, ContactContent, EducationEntry, ExperienceEntry, HeroContent, PortfolioContent,
    Project, Skill,
};
use crate::error::FolioError;

/// One document from `GET /api/portfolio`. `content` is free-form JSON keyed
/// by `section_type`.
#[derive(Debug, Deserialize)]
struct SectionDoc {
    section_type: String,
    content: serde_json::Value,
    #[serde(default = "default_active")]
    is_active: bool,
}

fn default_active() -> bool {
    true
}

/// The backend stores `about.education` as a single object; the model keeps
/// a list so multiple entries render.
#[derive(Debug, Deserialize)]
struct AboutDoc {
    name: String,
    bio: String,
    #[serde(default)]
    education: Option<EducationEntry>,
    #[serde(default)]
    location: String,
    #[serde(default)]
    email: String,
}

impl From<AboutDoc> for AboutContent {
    fn from(doc: AboutDoc) -> Self {
        Self {
            name: doc.name,
            bio: doc.bio,
            education: doc.education.into_iter().collect(),
            location: doc.location,
            email: doc.email,
        }
    }
}

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FolioError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FolioError> {
        let url = format!("{}/api/{path}", self.base_url);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch every content collection, failing on the first error.
    pub async fn fetch_content(&self) -> Result<PortfolioContent, FolioError> {
        let mut content = PortfolioContent::sample();

        let sections: Vec<SectionDoc> = self.get_json("portfolio").await?;
        for doc in sections.into_iter().filter(|doc| doc.is_active) {
            apply_section(&mut content, doc)?;
        }

        let skills: Vec<Skill> = self.get_json("skills").await?;
        // An empty collection means "not seeded yet" — keep the defaults,
        // same as the original front end.
        if !skills.is_empty() {
            content.skills = skills;
        }
        content.projects = self.get_json("projects").await?;
        content.experience = self.get_json("experience").await?;
        Ok(content)
    }

    /// Fetch with graceful degradation: any failure keeps the sample content
    /// and logs a warning.
    pub async fn fetch_or_sample(&self) -> PortfolioContent {
        match self.fetch_content().await {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(%error, "backend unavailable, using built-in content");
                PortfolioContent::sample()
            }
        }
    }
}

fn apply_section(content: &mut PortfolioContent, doc: SectionDoc) -> Result<(), FolioError> {
    let section_type = doc.section_type;
    let invalid =
        |e: serde_json::Error| FolioError::Backend(format!("section '{section_type}': {e}"));
    match section_type.as_str() {
        "hero" => {
            content.hero = serde_json::from_value::<HeroContent>(doc.content).map_err(invalid)?;
        }
        "about" => {
            content.about = serde_json::from_value::<AboutDoc>(doc.content)
                .map_err(invalid)?
                .into();
        }
        "contact" => {
            content.contact =
                serde_json::from_value::<ContactContent>(doc.content).map_err(invalid)?;
        }
        other => {
            // skills/projects/experience arrive through their own endpoints.
            tracing::debug!(section_type = other, "ignoring portfolio section document");
        }
    }
    Ok(())
}
