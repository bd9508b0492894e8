//! Portfolio content snapshots.
//!
//! Field shapes mirror the CMS API payloads so hydrated and built-in content
//! share one model. The sample profile below is what visitors see when the
//! backend is unreachable or the app runs offline.

use serde::{Deserialize, Serialize};

/// Landing banner content (`section_type = "hero"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    /// Canned lines typed out on the landing view.
    #[serde(default)]
    pub terminal_intro: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

/// Biography content (`section_type = "about"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub name: String,
    pub bio: String,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
}

/// Contact links (`section_type = "contact"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactContent {
    pub email: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// One of: languages, frameworks, databases, cloud, tools.
    pub category: String,
    /// 1..=5, rendered as a proficiency bar.
    pub proficiency: u8,
    #[serde(default)]
    pub years_experience: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_demo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Aggregated read-only snapshot handed to the dispatcher and the section
/// renderers. Rebuilt (cheaply cloned) per command submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub contact: ContactContent,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
}

impl PortfolioContent {
    /// Built-in profile used when the backend is unavailable.
    pub fn sample() -> Self {
        Self {
            hero: HeroContent {
                name: "Alex Moreno".to_string(),
                title: "Full Stack Developer & Problem Solver".to_string(),
                tagline: "Building reliable software, one commit at a time".to_string(),
                terminal_intro: vec![
                    "$ whoami".to_string(),
                    "Full Stack Developer & Problem Solver".to_string(),
                    "$ echo 'Welcome to my terminal portfolio'".to_string(),
                    "Welcome to my terminal portfolio".to_string(),
                ],
            },
            about: AboutContent {
                name: "Alex Moreno".to_string(),
                bio: "Software developer focused on full-stack web work and \
                      developer tooling. I like small, sharp programs and \
                      terminals more than I probably should."
                    .to_string(),
                education: vec![EducationEntry {
                    institution: "Conestoga College".to_string(),
                    degree: "Software Engineering Technology".to_string(),
                    year: "2023".to_string(),
                }],
                location: "Ontario, Canada".to_string(),
                email: "alex@example.dev".to_string(),
            },
            contact: ContactContent {
                email: "alex@example.dev".to_string(),
                linkedin: Some("https://linkedin.com/in/alexmoreno".to_string()),
                github: Some("https://github.com/alexmoreno".to_string()),
                twitter: Some("@alexmoreno".to_string()),
                phone: None,
            },
            skills: vec![
                skill("lang-python", "Python", "languages", 5),
                skill("lang-javascript", "JavaScript", "languages", 5),
                skill("lang-typescript", "TypeScript", "languages", 4),
                skill("lang-rust", "Rust", "languages", 3),
                skill("fw-react", "React", "frameworks", 5),
                skill("fw-node", "Node.js", "frameworks", 4),
                skill("fw-fastapi", "FastAPI", "frameworks", 4),
                skill("db-postgresql", "PostgreSQL", "databases", 4),
                skill("db-mongodb", "MongoDB", "databases", 3),
                skill("cloud-aws", "AWS", "cloud", 3),
                skill("cloud-docker", "Docker", "cloud", 3),
                skill("tool-git", "Git", "tools", 5),
                skill("tool-linux", "Linux", "tools", 4),
            ],
            projects: vec![
                Project {
                    id: "proj-termfolio".to_string(),
                    title: "Terminal Portfolio".to_string(),
                    description: "This very portfolio: an interactive terminal \
                                  over section navigation and canned responses."
                        .to_string(),
                    tech_stack: vec![
                        "Rust".to_string(),
                        "ratatui".to_string(),
                        "FastAPI".to_string(),
                    ],
                    github_url: Some("https://github.com/alexmoreno/folio".to_string()),
                    live_demo_url: None,
                    featured: true,
                },
                Project {
                    id: "proj-codesniff".to_string(),
                    title: "CodeSniff".to_string(),
                    description: "Automated code review assistant that comments \
                                  on pull requests with style and safety findings."
                        .to_string(),
                    tech_stack: vec![
                        "TypeScript".to_string(),
                        "Node.js".to_string(),
                        "OpenAI API".to_string(),
                    ],
                    github_url: None,
                    live_demo_url: Some("https://codesniff.example.dev".to_string()),
                    featured: true,
                },
                Project {
                    id: "proj-healthqr".to_string(),
                    title: "Emergency Health QR".to_string(),
                    description: "Digital health cards carrying critical medical \
                                  information behind a scannable QR code."
                        .to_string(),
                    tech_stack: vec![
                        "React".to_string(),
                        "Express".to_string(),
                        "MongoDB".to_string(),
                    ],
                    github_url: None,
                    live_demo_url: Some("https://healthqr.example.dev".to_string()),
                    featured: false,
                },
                Project {
                    id: "proj-logsvc".to_string(),
                    title: "Logging Service".to_string(),
                    description: "Small append-only logging service with \
                                  structured queries and retention policies."
                        .to_string(),
                    tech_stack: vec![
                        "Node.js".to_string(),
                        "Winston".to_string(),
                        "Docker".to_string(),
                    ],
                    github_url: Some("https://github.com/alexmoreno/logsvc".to_string()),
                    live_demo_url: None,
                    featured: false,
                },
            ],
            experience: vec![
                ExperienceEntry {
                    id: "exp-freelance".to_string(),
                    title: "Software Developer".to_string(),
                    company: "Freelance".to_string(),
                    location: "Remote".to_string(),
                    start_date: "2023-01".to_string(),
                    end_date: None,
                    is_current: true,
                    description: "Full-stack development for client projects, \
                                  from single-page apps to deployment pipelines."
                        .to_string(),
                    technologies: vec![
                        "React".to_string(),
                        "Node.js".to_string(),
                        "PostgreSQL".to_string(),
                        "AWS".to_string(),
                    ],
                },
                ExperienceEntry {
                    id: "exp-tutor".to_string(),
                    title: "Software Engineering Tutor".to_string(),
                    company: "Private Tutoring".to_string(),
                    location: "Remote".to_string(),
                    start_date: "2023-05".to_string(),
                    end_date: Some("2023-12".to_string()),
                    is_current: false,
                    description: "Coding instruction and mentorship covering \
                                  fundamentals through data structures."
                        .to_string(),
                    technologies: vec![
                        "Python".to_string(),
                        "JavaScript".to_string(),
                        "Java".to_string(),
                    ],
                },
                ExperienceEntry {
                    id: "exp-bots".to_string(),
                    title: "Community Bot Developer".to_string(),
                    company: "EsportsHub".to_string(),
                    location: "Remote".to_string(),
                    start_date: "2021-01".to_string(),
                    end_date: Some("2021-12".to_string()),
                    is_current: false,
                    description: "Built and maintained chat bots and server \
                                  automation for gaming communities."
                        .to_string(),
                    technologies: vec!["Discord.js".to_string(), "MongoDB".to_string()],
                },
            ],
        }
    }

    /// Skills grouped by category in a stable display order.
    pub fn skills_by_category(&self) -> Vec<(&'static str, Vec<&Skill>)> {
        const ORDER: &[(&str, &str)] = &[
            ("languages", "Languages"),
            ("frameworks", "Frameworks"),
            ("databases", "Databases"),
            ("cloud", "Cloud"),
            ("tools", "Tools"),
        ];
        ORDER
            .iter()
            .filter_map(|(key, label)| {
                let group: Vec<&Skill> = self
                    .skills
                    .iter()
                    .filter(|skill| skill.category == *key)
                    .collect();
                if group.is_empty() {
                    None
                } else {
                    Some((*label, group))
                }
            })
            .collect()
    }
}

fn skill(id: &str, name: &str, category: &str, proficiency: u8) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        proficiency,
        years_experience: None,
    }
}
