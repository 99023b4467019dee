use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ContentConfig, ContentProvider, FixtureContentProvider, GenerativeContentProvider};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} must not be blank"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

struct DesktopApp {
    content_provider: Arc<dyn ContentProvider>,
}

impl UiApp for DesktopApp {
    fn content_provider(&self) -> Arc<dyn ContentProvider> {
        Arc::clone(&self.content_provider)
    }
}

#[derive(Debug, Default)]
struct Args {
    offline: bool,
    model: Option<String>,
    language: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--offline] [--model <name>] [--language <name>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --offline          play with the built-in question set, no network");
    eprintln!("  --model <name>     override QUIZ_AI_MODEL");
    eprintln!("  --language <name>  override QUIZ_LANGUAGE");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_AI_API_KEY, QUIZ_AI_BASE_URL, QUIZ_AI_MODEL, QUIZ_LANGUAGE, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--offline" => parsed.offline = true,
                "--model" => parsed.model = Some(require_value(args, "--model")?),
                "--language" => parsed.language = Some(require_value(args, "--language")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn content_provider(args: &Args) -> Arc<dyn ContentProvider> {
    if args.offline {
        tracing::info!("offline mode: using the built-in question set");
        return Arc::new(FixtureContentProvider::new());
    }

    let config = ContentConfig::from_env().map(|mut config| {
        if let Some(model) = &args.model {
            config = config.with_model(model.clone());
        }
        if let Some(language) = &args.language {
            config = config.with_language(language.clone());
        }
        config
    });

    match &config {
        Some(config) => tracing::info!(
            model = %config.model,
            language = %config.language,
            "using generative content provider"
        ),
        None => tracing::warn!(
            "QUIZ_AI_API_KEY is not set; every quest will fail to load (try --offline)"
        ),
    }
    Arc::new(GenerativeContentProvider::new(config))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let mut argv: Vec<String> = std::env::args().skip(1).collect();
    // `ui` is the only command and may be omitted.
    if argv.first().map(String::as_str) == Some("ui") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        content_provider: content_provider(&parsed),
    });
    let context = build_app_context(&app);

    // Some dev setups open tao windows always-on-top unless told otherwise.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Learning Style Quest")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
