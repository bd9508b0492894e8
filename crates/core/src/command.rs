//! Command dispatch — the shell-style interpreter behind both terminal
//! surfaces.
//!
//! `dispatch` is total: every input produces a [`CommandReply`], unknown
//! keywords included. It owns no state and performs no I/O beyond reading
//! the wall clock for `date`/`uptime`; state changes travel back as
//! [`UiEffect`] values for the controller to apply.

use chrono::Utc;

use crate::content::PortfolioContent;
use crate::reply::{CommandReply, ReplyKind, UiEffect};
use crate::section::Section;

/// Read-only view handed to the dispatcher per call. Rebuilt by the caller
/// on every submission; nothing survives between dispatches.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    pub content: &'a PortfolioContent,
    pub admin_mode: bool,
}

/// Recognized keywords. Matching is case-sensitive; surfaces lowercase the
/// line before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Whoami,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
    Clear,
    Ls,
    Pwd,
    Cat,
    Echo,
    Date,
    Uptime,
    Theme,
    Sudo,
    Edit,
    Git,
    Matrix,
    Coffee,
    Konami,
    Love,
    Magic,
    Rocket,
    History,
    Man,
    Exit,
    Ping,
    Dashboard,
}

impl Command {
    /// Keyword list used for completion and the help pane.
    pub const KEYWORDS: &'static [&'static str] = &[
        "help",
        "whoami",
        "about",
        "skills",
        "projects",
        "experience",
        "contact",
        "clear",
        "ls",
        "pwd",
        "cat",
        "echo",
        "date",
        "uptime",
        "theme",
        "sudo",
        "edit",
        "git",
        "matrix",
        "coffee",
        "konami",
        "love",
        "magic",
        "rocket",
        "history",
        "man",
        "exit",
        "ping",
        "dashboard",
    ];

    pub fn parse(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "help" => Command::Help,
            "whoami" => Command::Whoami,
            "about" => Command::About,
            "skills" => Command::Skills,
            "projects" => Command::Projects,
            "experience" => Command::Experience,
            "contact" => Command::Contact,
            "clear" | "cls" => Command::Clear,
            "ls" => Command::Ls,
            "pwd" => Command::Pwd,
            "cat" => Command::Cat,
            "echo" => Command::Echo,
            "date" => Command::Date,
            "uptime" => Command::Uptime,
            "theme" => Command::Theme,
            "sudo" => Command::Sudo,
            "edit" => Command::Edit,
            "git" => Command::Git,
            "matrix" => Command::Matrix,
            "coffee" => Command::Coffee,
            "konami" => Command::Konami,
            "love" => Command::Love,
            "magic" => Command::Magic,
            "rocket" => Command::Rocket,
            "history" => Command::History,
            "man" => Command::Man,
            "exit" | "quit" => Command::Exit,
            "ping" => Command::Ping,
            "dashboard" => Command::Dashboard,
            _ => return None,
        })
    }
}

/// Interpret one trimmed, lowercased command line.
///
/// Tokenization splits on single spaces: repeated spaces yield empty-string
/// argument tokens, which `echo` preserves through `join(" ")`. This is the
/// documented legacy behavior, kept as a regression case.
pub fn dispatch(raw: &str, ctx: &CommandContext<'_>) -> CommandReply {
    let mut parts = raw.split(' ');
    let main = parts.next().unwrap_or("");
    let args: Vec<&str> = parts.collect();

    let Some(command) = Command::parse(main) else {
        return not_found(raw);
    };

    match command {
        Command::Help => CommandReply::navigate(Section::Help),
        Command::Whoami => CommandReply::navigate(Section::Hero),
        Command::About => CommandReply::navigate(Section::About),
        Command::Skills => CommandReply::navigate(Section::Skills),
        Command::Projects => CommandReply::navigate(Section::Projects),
        Command::Experience => CommandReply::navigate(Section::Experience),
        Command::Contact => CommandReply::navigate(Section::Contact),
        Command::Clear => {
            // The "clear" sentinel stays in the content for callers keyed on
            // it; the effect is the machine-readable form.
            CommandReply::new(ReplyKind::System, vec!["clear".to_string()])
                .with_effect(UiEffect::ClearScreen)
        }
        Command::Ls => list_sections(ctx),
        Command::Pwd => CommandReply::info("/home/portfolio"),
        Command::Cat => cat(&args),
        Command::Echo => CommandReply::info(args.join(" ")),
        Command::Date => CommandReply::info(Utc::now().to_rfc2822()),
        Command::Uptime => {
            // Deliberately synthetic: wall-clock hours mod 24, not a real
            // process counter.
            let hours = (Utc::now().timestamp_millis() / 3_600_000) % 24;
            CommandReply::info(format!("Portfolio has been running for {hours} hours"))
        }
        Command::Theme => theme(&args),
        Command::Sudo => sudo(&args, ctx),
        Command::Edit => edit(ctx),
        Command::Git => git(&args),
        Command::Matrix => CommandReply::new(
            ReplyKind::Success,
            vec![
                "Wake up, Neo... 🕶️".to_string(),
                "The Matrix has you...".to_string(),
                "But this portfolio is more stylish!".to_string(),
            ],
        ),
        Command::Coffee => {
            CommandReply::info("☕ Brewing coffee... This developer runs on caffeine!")
        }
        Command::Konami => CommandReply::success(
            "🎮 ↑↑↓↓←→←→BA - Cheat mode activated! All skills now level 5!",
        ),
        Command::Love => CommandReply::success("❤️ Made with love and lots of code!"),
        Command::Magic => CommandReply::success("✨ Abracadabra! Your code is now bug-free!"),
        Command::Rocket => CommandReply::success("🚀 To infinity and beyond!"),
        Command::History => {
            CommandReply::info("Command history is maintained in your current session.")
        }
        Command::Man => man(&args),
        Command::Exit => CommandReply::warning(
            "There is no escape from the terminal portfolio! 😄 Press Ctrl+Q if you really must leave.",
        ),
        Command::Ping => {
            let target = args
                .first()
                .copied()
                .filter(|value| !value.is_empty())
                .unwrap_or("localhost");
            CommandReply::success(format!(
                "PING {target}: 64 bytes from {target}: time=1ms"
            ))
        }
        Command::Dashboard => CommandReply::success("Returning to dashboard view...")
            .with_effect(UiEffect::Navigate(Section::Dashboard)),
    }
}

fn not_found(raw: &str) -> CommandReply {
    CommandReply::error_lines(vec![
        format!("Command '{raw}' not found."),
        "Type \"help\" to see available commands.".to_string(),
        "Press Tab to complete command names.".to_string(),
    ])
}

fn list_sections(ctx: &CommandContext<'_>) -> CommandReply {
    let mut entries = vec!["about.txt", "skills/", "projects/", "experience/", "contact/"];
    if ctx.admin_mode {
        entries.push("admin/");
    }
    let mut lines = vec!["Available sections:".to_string(), String::new()];
    lines.extend(entries.into_iter().map(|entry| format!("  {entry}")));
    CommandReply::info_lines(lines)
}

fn cat(args: &[&str]) -> CommandReply {
    match args.first().copied() {
        Some("about.txt") | Some("about") => CommandReply::navigate(Section::About),
        other => {
            let name = other.filter(|value| !value.is_empty()).unwrap_or("filename");
            CommandReply::error(format!("cat: {name}: No such file or directory"))
        }
    }
}

fn theme(args: &[&str]) -> CommandReply {
    match args.first().copied() {
        Some(mode @ ("dark" | "light")) => CommandReply::warning(format!(
            "Theme switching to {mode} mode is not yet implemented"
        )),
        _ => CommandReply::info_lines(vec![
            "Current theme: Dark Terminal".to_string(),
            "Available: dark, light".to_string(),
        ]),
    }
}

fn sudo(args: &[&str], ctx: &CommandContext<'_>) -> CommandReply {
    match args.first().copied() {
        Some("admin") | Some("su") => {
            // The text describes the state after the toggle; the controller
            // applies the effect after appending this reply, so the two
            // always agree.
            let message = if ctx.admin_mode {
                "Admin mode deactivated. Switched to guest mode."
            } else {
                "Admin mode activated. You can now edit portfolio content."
            };
            CommandReply::success(message).with_effect(UiEffect::ToggleAdminMode)
        }
        _ => CommandReply::error(
            "sudo: command not found. Try \"sudo admin\" to toggle admin mode.",
        ),
    }
}

fn edit(ctx: &CommandContext<'_>) -> CommandReply {
    if !ctx.admin_mode {
        return CommandReply::error(
            "Permission denied. Enable admin mode with \"sudo admin\" first.",
        );
    }
    CommandReply::navigate(Section::Admin)
}

fn git(args: &[&str]) -> CommandReply {
    match args.first().copied() {
        Some("status") => CommandReply::info_lines(vec![
            "On branch main".to_string(),
            "Your portfolio is up to date.".to_string(),
            String::new(),
            "Portfolio sections:".to_string(),
            "  modified:   about.txt".to_string(),
            "  new file:   projects/terminal-portfolio.md".to_string(),
        ]),
        Some("log") => CommandReply::navigate(Section::Experience),
        _ => CommandReply::info("Available git commands: status, log"),
    }
}

fn man(args: &[&str]) -> CommandReply {
    match args.first().copied().filter(|topic| !topic.is_empty()) {
        Some(topic) => CommandReply::info_lines(vec![
            format!("Manual page for: {topic}"),
            String::new(),
            manual_page(topic),
        ]),
        None => CommandReply::info("What manual page do you want? Try \"man help\""),
    }
}

/// Static manual-page table. Unknown topics get a "no manual entry" string,
/// never an error kind.
pub fn manual_page(topic: &str) -> String {
    let entry = match topic {
        "help" => "Display available commands and their descriptions.",
        "whoami" => "Display information about the developer.",
        "about" => "Show detailed information about background and education.",
        "skills" => "List technical skills and proficiencies.",
        "projects" => "Display portfolio projects with demos and code links.",
        "experience" => "Show work experience and professional timeline.",
        "contact" => "Display contact information and social links.",
        "clear" => "Clear the terminal screen.",
        "ls" => "List available sections and files.",
        "cat" => "Display contents of a file (try \"cat about.txt\").",
        "git" => "Git-style commands for portfolio navigation.",
        "sudo" => "Switch between guest and admin modes.",
        "matrix" => "Enter the Matrix... if you dare.",
        "coffee" => "Virtual coffee break for developers.",
        "dashboard" => "Return to the main dashboard view.",
        _ => return format!("No manual entry for {topic}"),
    };
    entry.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(content: &PortfolioContent, admin_mode: bool) -> CommandContext<'_> {
        CommandContext {
            content,
            admin_mode,
        }
    }

    #[test]
    fn test_every_keyword_parses() {
        for keyword in Command::KEYWORDS {
            assert!(Command::parse(keyword).is_some(), "{keyword}");
        }
        assert_eq!(Command::parse("cls"), Some(Command::Clear));
        assert_eq!(Command::parse("quit"), Some(Command::Exit));
        assert_eq!(Command::parse("HELP"), None); // case-sensitive
    }

    #[test]
    fn test_unknown_command_mentions_input() {
        let content = PortfolioContent::sample();
        let reply = dispatch("unknowncmd123", &ctx(&content, false));
        assert_eq!(reply.kind, ReplyKind::Error);
        assert!(reply.lines[0].contains("unknowncmd123"));
        assert!(reply.effect.is_none());
    }

    #[test]
    fn test_navigation_commands_return_section_replies() {
        let content = PortfolioContent::sample();
        let cases = [
            ("help", Section::Help),
            ("whoami", Section::Hero),
            ("about", Section::About),
            ("skills", Section::Skills),
            ("projects", Section::Projects),
            ("experience", Section::Experience),
            ("contact", Section::Contact),
        ];
        for (line, section) in cases {
            let reply = dispatch(line, &ctx(&content, false));
            assert_eq!(reply.kind, ReplyKind::Section, "{line}");
            assert_eq!(reply.section, Some(section), "{line}");
            assert!(reply.lines.is_empty(), "{line}");
            assert_eq!(reply.effect, Some(UiEffect::Navigate(section)), "{line}");
        }
    }

    #[test]
    fn test_cat_about_matches_about_command() {
        let content = PortfolioContent::sample();
        let context = ctx(&content, false);
        let direct = dispatch("about", &context);
        assert_eq!(dispatch("cat about.txt", &context), direct);
        assert_eq!(dispatch("cat about", &context), direct);
    }

    #[test]
    fn test_cat_unknown_file_echoes_argument() {
        let content = PortfolioContent::sample();
        let reply = dispatch("cat secrets.txt", &ctx(&content, false));
        assert_eq!(reply.kind, ReplyKind::Error);
        assert_eq!(reply.text(), "cat: secrets.txt: No such file or directory");

        let bare = dispatch("cat", &ctx(&content, false));
        assert_eq!(bare.text(), "cat: filename: No such file or directory");
    }

    #[test]
    fn test_ls_admin_entry_membership() {
        let content = PortfolioContent::sample();

        let guest = dispatch("ls", &ctx(&content, false));
        assert_eq!(guest.kind, ReplyKind::Info);
        assert!(!guest.lines.iter().any(|line| line.contains("admin/")));

        let admin = dispatch("ls", &ctx(&content, true));
        assert!(admin.lines.iter().any(|line| line == "  admin/"));
        // Exactly one extra entry.
        assert_eq!(admin.lines.len(), guest.lines.len() + 1);
    }

    #[test]
    fn test_echo_preserves_empty_tokens_from_repeated_spaces() {
        // "echo a  b" splits into ["a", "", "b"]; join(" ") reproduces the
        // double space. Literal regression case for the legacy tokenizer.
        let content = PortfolioContent::sample();
        let reply = dispatch("echo a  b", &ctx(&content, false));
        assert_eq!(reply.kind, ReplyKind::Info);
        assert_eq!(reply.text(), "a  b");

        let empty = dispatch("echo", &ctx(&content, false));
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn test_man_known_and_unknown_topics_are_info() {
        let content = PortfolioContent::sample();

        let known = dispatch("man ls", &ctx(&content, false));
        assert_eq!(known.kind, ReplyKind::Info);
        assert!(known.text().contains("List available sections and files."));

        let unknown = dispatch("man doesnotexist", &ctx(&content, false));
        assert_eq!(unknown.kind, ReplyKind::Info);
        assert!(unknown.text().contains("No manual entry for doesnotexist"));

        let bare = dispatch("man", &ctx(&content, false));
        assert_eq!(bare.kind, ReplyKind::Info);
        assert!(bare.text().contains("What manual page"));
    }

    #[test]
    fn test_clear_sentinel_is_idempotent() {
        let content = PortfolioContent::sample();
        let context = ctx(&content, false);
        for line in ["clear", "cls", "clear"] {
            let reply = dispatch(line, &context);
            assert_eq!(reply.kind, ReplyKind::System);
            assert_eq!(reply.text(), "clear");
            assert_eq!(reply.effect, Some(UiEffect::ClearScreen));
        }
    }

    #[test]
    fn test_sudo_describes_resulting_state() {
        let content = PortfolioContent::sample();

        let activating = dispatch("sudo admin", &ctx(&content, false));
        assert_eq!(activating.kind, ReplyKind::Success);
        assert!(activating.text().contains("activated"));
        assert_eq!(activating.effect, Some(UiEffect::ToggleAdminMode));

        let deactivating = dispatch("sudo su", &ctx(&content, true));
        assert!(deactivating.text().contains("deactivated"));
        assert_eq!(deactivating.effect, Some(UiEffect::ToggleAdminMode));

        let bad = dispatch("sudo rm", &ctx(&content, false));
        assert_eq!(bad.kind, ReplyKind::Error);
        assert!(bad.effect.is_none());
    }

    #[test]
    fn test_edit_gated_on_admin_mode() {
        let content = PortfolioContent::sample();

        let denied = dispatch("edit", &ctx(&content, false));
        assert_eq!(denied.kind, ReplyKind::Error);
        assert!(denied.text().contains("Permission denied"));

        let allowed = dispatch("edit", &ctx(&content, true));
        assert_eq!(allowed.kind, ReplyKind::Section);
        assert_eq!(allowed.section, Some(Section::Admin));
    }

    #[test]
    fn test_git_subcommands() {
        let content = PortfolioContent::sample();
        let context = ctx(&content, false);

        let status = dispatch("git status", &context);
        assert_eq!(status.kind, ReplyKind::Info);
        assert!(status.text().contains("On branch main"));

        let log = dispatch("git log", &context);
        assert_eq!(log.section, Some(Section::Experience));

        let other = dispatch("git push", &context);
        assert_eq!(other.kind, ReplyKind::Info);
        assert!(other.text().contains("status, log"));

        let bare = dispatch("git", &context);
        assert!(bare.text().contains("status, log"));
    }

    #[test]
    fn test_fixed_text_commands() {
        let content = PortfolioContent::sample();
        let context = ctx(&content, false);

        assert_eq!(dispatch("pwd", &context).text(), "/home/portfolio");
        assert_eq!(dispatch("matrix", &context).kind, ReplyKind::Success);
        assert_eq!(dispatch("coffee", &context).kind, ReplyKind::Info);
        assert_eq!(dispatch("exit", &context).kind, ReplyKind::Warning);
        assert_eq!(dispatch("quit", &context).kind, ReplyKind::Warning);
        assert_eq!(dispatch("history", &context).kind, ReplyKind::Info);
    }

    #[test]
    fn test_ping_defaults_to_localhost() {
        let content = PortfolioContent::sample();
        let context = ctx(&content, false);

        let named = dispatch("ping example.com", &context);
        assert_eq!(named.kind, ReplyKind::Success);
        assert!(named.text().contains("PING example.com"));
        assert!(named.text().contains("time=1ms"));

        let bare = dispatch("ping", &context);
        assert!(bare.text().contains("PING localhost"));
        // An empty token (trailing space) also falls back.
        let trailing = dispatch("ping ", &context);
        assert!(trailing.text().contains("PING localhost"));
    }

    #[test]
    fn test_theme_variants() {
        let content = PortfolioContent::sample();
        let context = ctx(&content, false);

        let dark = dispatch("theme dark", &context);
        assert_eq!(dark.kind, ReplyKind::Warning);
        assert!(dark.text().contains("dark"));

        let bare = dispatch("theme", &context);
        assert_eq!(bare.kind, ReplyKind::Info);
        assert!(bare.text().contains("Available: dark, light"));
    }

    #[test]
    fn test_dashboard_is_success_with_navigation() {
        let content = PortfolioContent::sample();
        let reply = dispatch("dashboard", &ctx(&content, false));
        assert_eq!(reply.kind, ReplyKind::Success);
        assert_eq!(reply.effect, Some(UiEffect::Navigate(Section::Dashboard)));
        assert!(reply.text().contains("dashboard"));
    }

    #[test]
    fn test_time_commands_have_stable_shape() {
        let content = PortfolioContent::sample();
        let context = ctx(&content, false);

        assert_eq!(dispatch("date", &context).kind, ReplyKind::Info);
        let uptime = dispatch("uptime", &context);
        assert_eq!(uptime.kind, ReplyKind::Info);
        assert!(uptime.text().starts_with("Portfolio has been running for"));
    }

    #[test]
    fn test_dispatch_is_deterministic_for_fixed_commands() {
        let content = PortfolioContent::sample();
        let context = ctx(&content, false);
        for line in ["ls", "pwd", "git status", "man ls", "echo x", "theme"] {
            assert_eq!(dispatch(line, &context), dispatch(line, &context), "{line}");
        }
    }
}
