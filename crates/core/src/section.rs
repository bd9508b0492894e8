//! Portfolio section identifiers.

use serde::{Deserialize, Serialize};

/// One named content view of the portfolio.
///
/// The set is closed: navigation requests carry a `Section`, so a target
/// outside this enum cannot be expressed. Callers that parse free-form
/// identifiers get `None` for anything unknown and fall back to
/// [`Section::Dashboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Dashboard,
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
    Help,
    Education,
    TechStack,
    Resume,
    Admin,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Section::Dashboard,
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
        Section::Help,
        Section::Education,
        Section::TechStack,
        Section::Resume,
        Section::Admin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
            Section::Help => "help",
            Section::Education => "education",
            Section::TechStack => "techstack",
            Section::Resume => "resume",
            Section::Admin => "admin",
        }
    }

    /// Display title used by section panes and the title bar.
    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
            Section::Help => "Help",
            Section::Education => "Education",
            Section::TechStack => "Tech Stack",
            Section::Resume => "Resume",
            Section::Admin => "Admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == normalized)
            .or(match normalized.as_str() {
                // The original app calls the landing view "home" in places.
                "home" => Some(Section::Hero),
                _ => None,
            })
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
