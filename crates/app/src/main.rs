use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use engame_core::Catalog;
use engame_core::model::{QuizSettings, QuizSettingsDraft};
use services::Pronouncer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, WebSpeechPronouncer, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidValue { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidValue { flag, raw } => write!(f, "invalid {flag} value: {raw:?}"),
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

fn parse_value<T: FromStr>(flag: &'static str, raw: String) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidValue { flag, raw })
}

struct DesktopApp {
    catalog: Arc<Catalog>,
    settings: QuizSettings,
    pronouncer: Arc<WebSpeechPronouncer>,
    seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn settings(&self) -> QuizSettings {
        self.settings.clone()
    }

    fn pronouncer(&self) -> Arc<dyn Pronouncer> {
        self.pronouncer.clone()
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Each flag with the environment variable that backs it.
const OPTIONS: [(&str, &str); 7] = [
    ("--seed", "ENGAME_SEED"),
    ("--catalog", "ENGAME_CATALOG"),
    ("--loading-ms", "ENGAME_LOADING_MS"),
    ("--options", "ENGAME_OPTIONS"),
    ("--lang", "ENGAME_SPEECH_LANG"),
    ("--rate", "ENGAME_SPEECH_RATE"),
    ("--images", "ENGAME_IMAGES"),
];

#[derive(Debug, Default, PartialEq)]
struct Args {
    seed: Option<u64>,
    catalog: Option<PathBuf>,
    loading_delay: Option<Duration>,
    option_count: Option<usize>,
    speech_lang: Option<String>,
    speech_rate: Option<f32>,
    images_base: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>] [--catalog <path.json>] [--loading-ms <ms>]");
    eprintln!("                      [--options <n>] [--lang <bcp47>] [--rate <0-10>] [--images <base>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in categories, random order, 4000 ms splash, 4 options,");
    eprintln!("  en-US at rate 0.9, images under /images/");
    eprintln!();
    eprintln!("Environment (flags win):");
    for (_, var) in OPTIONS {
        eprintln!("  {var}");
    }
    eprintln!("  RUST_LOG");
}

impl Args {
    /// Collect values from variables returned by `lookup`.
    fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        for (flag, var) in OPTIONS {
            if let Some(raw) = lookup(var) {
                parsed.set(flag, raw)?;
            }
        }
        Ok(parsed)
    }

    fn apply_flags(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            if matches!(arg.as_str(), "--help" | "-h") {
                print_usage();
                std::process::exit(0);
            }
            let Some(&(flag, _)) = OPTIONS.iter().find(|(flag, _)| *flag == arg) else {
                return Err(ArgsError::UnknownArg(arg));
            };
            let value = require_value(args, flag)?;
            self.set(flag, value)?;
        }
        Ok(self)
    }

    fn set(&mut self, flag: &'static str, raw: String) -> Result<(), ArgsError> {
        match flag {
            "--seed" => self.seed = Some(parse_value(flag, raw)?),
            "--catalog" => {
                if raw.trim().is_empty() {
                    return Err(ArgsError::InvalidValue { flag, raw });
                }
                self.catalog = Some(PathBuf::from(raw));
            }
            "--loading-ms" => {
                self.loading_delay = Some(Duration::from_millis(parse_value(flag, raw)?));
            }
            "--options" => self.option_count = Some(parse_value(flag, raw)?),
            "--lang" => self.speech_lang = Some(raw),
            "--rate" => self.speech_rate = Some(parse_value(flag, raw)?),
            "--images" => self.images_base = Some(raw),
            _ => return Err(ArgsError::UnknownArg(flag.to_string())),
        }
        Ok(())
    }

    fn settings_draft(&self) -> QuizSettingsDraft {
        QuizSettingsDraft {
            loading_delay: self.loading_delay,
            option_count: self.option_count,
            speech_lang: self.speech_lang.clone(),
            speech_rate: self.speech_rate,
            images_base: self.images_base.clone(),
        }
    }
}

/// Load the catalog and validate settings.
fn load_quiz(args: &Args) -> Result<(Catalog, QuizSettings), engame_core::Error> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin()?,
    };
    let settings = args.settings_draft().validate()?;
    Ok((catalog, settings))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::from_env(|var| std::env::var(var).ok())
        .and_then(|args| args.apply_flags(&mut argv))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    let (catalog, settings) = load_quiz(&args)?;
    info!(
        categories = catalog.len(),
        source = args
            .catalog
            .as_ref()
            .map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
        options = settings.option_count(),
        "catalog loaded"
    );

    let app = DesktopApp {
        catalog: Arc::new(catalog),
        pronouncer: Arc::new(WebSpeechPronouncer::new(settings.speech().clone())),
        settings,
        seed: args.seed,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("ENGAME")
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
    init_tracing();
    if let Err(err) = run() {
        error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
