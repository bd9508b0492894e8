//! Section pane renderers.
//!
//! Each section turns the current content snapshot into styled lines. No
//! state lives here; the controller decides which section is showing.

use folio_core::{PortfolioContent, Section, Skill};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::output::TermTheme;

pub fn render_section(
    section: Section,
    content: &PortfolioContent,
    admin_mode: bool,
    theme: &TermTheme,
) -> Vec<Line<'static>> {
    match section {
        Section::Dashboard => render_dashboard(content, theme),
        Section::Hero => render_hero(content, theme),
        Section::About => render_about(content, theme),
        Section::Skills => render_skills(content, theme),
        Section::Projects => render_projects(content, theme),
        Section::Experience => render_experience(content, theme),
        Section::Contact => render_contact(content, theme),
        Section::Help => render_help(theme),
        Section::Education => render_education(content, theme),
        Section::TechStack => render_tech_stack(content, theme),
        Section::Resume => render_resume(content, theme),
        Section::Admin => render_admin(admin_mode, theme),
    }
}

fn heading(text: &str, theme: &TermTheme) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: impl Into<String>, theme: &TermTheme) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(theme.text_muted),
    ))
}

fn plain(text: impl Into<String>, theme: &TermTheme) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(theme.text_base),
    ))
}

fn blank() -> Line<'static> {
    Line::from("")
}

fn render_dashboard(content: &PortfolioContent, theme: &TermTheme) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(&format!("{} — {}", content.hero.name, content.hero.title), theme),
        blank(),
        plain(content.hero.tagline.clone(), theme),
        blank(),
        muted("At a glance:", theme),
        plain(format!("  {} skills across {} categories", content.skills.len(), content.skills_by_category().len()), theme),
        plain(format!("  {} projects ({} featured)", content.projects.len(), content.projects.iter().filter(|p| p.featured).count()), theme),
        plain(format!("  {} roles on the timeline", content.experience.len()), theme),
        blank(),
        muted("Type `help` for the command reference, or jump straight to a", theme),
        muted("section: about, skills, projects, experience, contact.", theme),
    ];
    lines.push(blank());
    lines.push(muted("Psst: try `matrix`, `coffee`, or `sudo su`.", theme));
    lines
}

fn render_hero(content: &PortfolioContent, theme: &TermTheme) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(&content.hero.name, theme),
        plain(content.hero.title.clone(), theme),
        blank(),
    ];
    if !content.hero.tagline.is_empty() {
        lines.push(muted(content.hero.tagline.clone(), theme));
        lines.push(blank());
    }
    for intro in &content.hero.terminal_intro {
        if intro.starts_with('$') {
            lines.push(Line::from(Span::styled(
                intro.clone(),
                Style::default().fg(theme.command_accent),
            )));
        } else {
            lines.push(plain(intro.clone(), theme));
        }
    }
    lines
}

fn render_about(content: &PortfolioContent, theme: &TermTheme) -> Vec<Line<'static>> {
    let about = &content.about;
    let mut lines = vec![heading(&about.name, theme), blank()];
    for paragraph in about.bio.split('\n') {
        lines.push(plain(paragraph.to_string(), theme));
    }
    lines.push(blank());
    if !about.location.is_empty() {
        lines.push(muted(format!("Location: {}", about.location), theme));
    }
    if !about.email.is_empty() {
        lines.push(muted(format!("Email:    {}", about.email), theme));
    }
    if !about.education.is_empty() {
        lines.push(blank());
        lines.push(heading("Education", theme));
        for entry in &about.education {
            lines.push(plain(
                format!("  {} — {} ({})", entry.degree, entry.institution, entry.year),
                theme,
            ));
        }
    }
    lines
}

fn proficiency_bar(skill: &Skill) -> String {
    let filled = usize::from(skill.proficiency.min(5));
    format!("[{}{}]", "█".repeat(filled), "░".repeat(5 - filled))
}

fn render_skills(content: &PortfolioContent, theme: &TermTheme) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Skills", theme)];
    for (label, group) in content.skills_by_category() {
        lines.push(blank());
        lines.push(Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(theme.command_accent),
        )));
        for skill in group {
            let years = skill
                .years_experience
                .map(|y| format!("  {y}y"))
                .unwrap_or_default();
            lines.push(plain(
                format!("  {:<14} {}{years}", skill.name, proficiency_bar(skill)),
                theme,
            ));
        }
    }
    lines
}

fn render_projects(content: &PortfolioContent, theme: &TermTheme) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Projects", theme)];
    for project in &content.projects {
        lines.push(blank());
        let star = if project.featured { " *" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("{}{star}", project.title),
            Style::default()
                .fg(theme.command_accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(plain(format!("  {}", project.description), theme));
        if !project.tech_stack.is_empty() {
            lines.push(muted(format!("  stack: {}", project.tech_stack.join(", ")), theme));
        }
        if let Some(url) = &project.github_url {
            lines.push(muted(format!("  code:  {url}"), theme));
        }
        if let Some(url) = &project.live_demo_url {
            lines.push(muted(format!("  demo:  {url}"), theme));
        }
    }
    lines
}

fn render_experience(content: &PortfolioContent, theme: &TermTheme) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Experience", theme)];
    for entry in &content.experience {
        lines.push(blank());
        let end = match (&entry.end_date, entry.is_current) {
            (_, true) => "present".to_string(),
            (Some(end), false) => end.clone(),
            (None, false) => "?".to_string(),
        };
        lines.push(Line::from(Span::styled(
            format!("{} @ {}", entry.title, entry.company),
            Style::default()
                .fg(theme.command_accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(muted(
            format!("  {} – {} | {}", entry.start_date, end, entry.location),
            theme,
        ));
        lines.push(plain(format!("  {}", entry.description), theme));
        if !entry.technologies.is_empty() {
            lines.push(muted(format!("  tech: {}", entry.technologies.join(", ")), theme));
        }
    }
    lines
}

fn render_contact(content: &PortfolioContent, theme: &TermTheme) -> Vec<Line<'static>> {
    let contact = &content.contact;
    let mut lines = vec![
        heading("Contact", theme),
        blank(),
        plain(format!("  email:    {}", contact.email), theme),
    ];
    if let Some(github) = &contact.github {
        lines.push(plain(format!("  github:   {github}"), theme));
    }
    if let Some(linkedin) = &contact.linkedin {
        lines.push(plain(format!("  linkedin: {linkedin}"), theme));
    }
    if let Some(twitter) = &contact.twitter {
        lines.push(plain(format!("  twitter:  {twitter}"), theme));
    }
    if let Some(phone) = &contact.phone {
        lines.push(plain(format!("  phone:    {phone}"), theme));
    }
    lines.push(blank());
    lines.push(muted("Always happy to talk shop.", theme));
    lines
}

fn render_help(theme: &TermTheme) -> Vec<Line<'static>> {
    const ROWS: &[(&str, &str)] = &[
        ("help", "show this command reference"),
        ("whoami / about", "who runs this terminal"),
        ("skills", "technical skills by category"),
        ("projects", "selected projects"),
        ("experience", "work history"),
        ("contact", "how to reach me"),
        ("education", "degrees and schools"),
        ("techstack", "tools this site is built with"),
        ("resume", "where to get the PDF"),
        ("dashboard", "overview landing view"),
        ("ls / pwd / cat", "pretend filesystem"),
        ("echo / date / uptime / ping", "the usual suspects"),
        ("git status / git log", "repo theater"),
        ("theme dark|light", "switch color scheme"),
        ("sudo su", "try your luck"),
        ("history", "commands you have run"),
        ("man <command>", "manual pages"),
        ("clear / cls", "wipe the screen"),
    ];
    let mut lines = vec![heading("Available commands", theme), blank()];
    for (command, blurb) in ROWS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {command:<28}"),
                Style::default().fg(theme.command_accent),
            ),
            Span::styled(blurb.to_string(), Style::default().fg(theme.text_base)),
        ]));
    }
    lines.push(blank());
    lines.push(muted("A few undocumented commands are hiding in here too.", theme));
    lines
}

fn render_education(content: &PortfolioContent, theme: &TermTheme) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Education", theme)];
    if content.about.education.is_empty() {
        lines.push(blank());
        lines.push(muted("Nothing on file yet.", theme));
        return lines;
    }
    for entry in &content.about.education {
        lines.push(blank());
        lines.push(Line::from(Span::styled(
            entry.degree.clone(),
            Style::default()
                .fg(theme.command_accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(plain(format!("  {} — {}", entry.institution, entry.year), theme));
    }
    lines
}

fn render_tech_stack(content: &PortfolioContent, theme: &TermTheme) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Tech Stack", theme),
        blank(),
        muted("Everything this portfolio touches, by layer:", theme),
    ];
    for (label, group) in content.skills_by_category() {
        let names: Vec<&str> = group.iter().map(|skill| skill.name.as_str()).collect();
        lines.push(plain(format!("  {:<11} {}", label, names.join(" · ")), theme));
    }
    lines.push(blank());
    lines.push(muted("This terminal itself: Rust, ratatui, crossterm, tokio.", theme));
    lines
}

fn render_resume(content: &PortfolioContent, theme: &TermTheme) -> Vec<Line<'static>> {
    vec![
        heading("Resume", theme),
        blank(),
        plain("A PDF copy of the resume is available on request.", theme),
        plain(format!("Drop a line at {} and it is yours.", content.contact.email), theme),
        blank(),
        muted("`experience` and `skills` cover most of it right here.", theme),
    ]
}

fn render_admin(admin_mode: bool, theme: &TermTheme) -> Vec<Line<'static>> {
    if !admin_mode {
        return vec![
            heading("Admin", theme),
            blank(),
            Line::from(Span::styled(
                "Access denied. This area requires elevated privileges.",
                Style::default().fg(theme.danger),
            )),
            muted("Hint: `sudo su` might open doors.", theme),
        ];
    }
    vec![
        heading("Admin", theme),
        blank(),
        Line::from(Span::styled(
            "Welcome, root.",
            Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        )),
        blank(),
        plain("Content editing lives in the CMS backend, not in this pane.", theme),
        plain("Point FOLIO_BACKEND_URL at the API and restart to hydrate.", theme),
        blank(),
        muted("`sudo su` again drops back to guest.", theme),
    ]
}
