use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, QuizService};
use skill_core::model::TopicId;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://skill-drill.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTopic { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTopic { raw } => write!(f, "invalid --topic value: {raw:?}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    initial_topic: Option<TopicId>,
    quiz: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn initial_topic(&self) -> Option<TopicId> {
        self.initial_topic.clone()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    topic: Option<TopicId>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--topic <id>]");
    eprintln!("  cargo run -p app -- topics [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SKILL_DB_URL, SKILL_TOPIC, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Topics,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "topics" => Some(Self::Topics),
            _ => None,
        }
    }
}

fn parse_topic(raw: String) -> Result<TopicId, ArgsError> {
    TopicId::new(raw.clone()).map_err(|_| ArgsError::InvalidTopic { raw })
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_db_url: Option<String>,
        env_topic: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env_db_url.map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut topic = env_topic
            .filter(|value| !value.trim().is_empty())
            .map(parse_topic)
            .transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--topic" => {
                    let value = require_value(args, "--topic")?;
                    topic = Some(parse_topic(value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, topic })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = log_fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

async fn print_topics(quiz: &QuizService) {
    for item in quiz.overview().await {
        let topic = &item.topic;
        if topic.is_available() {
            println!(
                "{:<14} {} {:<14} {:>3} scenarios  {:>3}/{:<3} done  {:>3}% mastered",
                topic.id().as_str(),
                topic.icon(),
                topic.name(),
                topic.question_count(),
                item.stats.completed,
                item.stats.total,
                item.stats.mastery_rate(),
            );
        } else {
            println!(
                "{:<14} {} {:<14} coming soon",
                topic.id().as_str(),
                topic.icon(),
                topic.name(),
            );
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(
        &mut iter,
        std::env::var("SKILL_DB_URL").ok(),
        std::env::var("SKILL_TOPIC").ok(),
    )
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, parsed.topic).await?;
    info!(db = %parsed.db_url, "storage ready");

    match cmd {
        Command::Ui => {
            let app = DesktopApp {
                initial_topic: services.initial_topic().cloned(),
                quiz: services.quiz(),
            };
            let app: Arc<dyn UiApp> = Arc::new(app);
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Skill Drill")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Topics => {
            print_topics(services.quiz().as_ref()).await;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter()
            .map(|value| (*value).to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn defaults_apply_without_flags() {
        let parsed = Args::parse(&mut args(&[]), None, None).unwrap();
        assert_eq!(parsed.db_url, DEFAULT_DB_URL);
        assert!(parsed.topic.is_none());
    }

    #[test]
    fn flags_override_environment() {
        let parsed = Args::parse(
            &mut args(&["--db", "sqlite::memory:", "--topic", "nodejs"]),
            Some("sqlite://elsewhere.sqlite3".into()),
            Some("nextjs".into()),
        )
        .unwrap();
        assert_eq!(parsed.db_url, "sqlite::memory:");
        assert_eq!(parsed.topic.unwrap().as_str(), "nodejs");
    }

    #[test]
    fn environment_topic_is_used() {
        let parsed = Args::parse(&mut args(&[]), None, Some("n8n".into())).unwrap();
        assert_eq!(parsed.topic.unwrap().as_str(), "n8n");
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(matches!(
            Args::parse(&mut args(&["--topic"]), None, None),
            Err(ArgsError::MissingValue { flag: "--topic" })
        ));
        assert!(matches!(
            Args::parse(&mut args(&["--topic", "  "]), None, None),
            Err(ArgsError::InvalidTopic { .. })
        ));
        assert!(matches!(
            Args::parse(&mut args(&["--verbose"]), None, None),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn relative_sqlite_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/progress.sqlite3".into());
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("data/progress.sqlite3"));
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
    }
}
