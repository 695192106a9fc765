use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use life_term::config::{AppConfig, LoggingConfig};
use life_term::persistence;
use life_term::session::{
    AnimationMode, FixedInterval, InitialBoard, PlayMode, SessionController,
};
use life_term::ui::{CrosstermKeys, Prompter, TerminalUi};

/// Conway's Game of Life in the terminal.
#[derive(Parser)]
#[command(name = "life_term", about = "Watch, step through, or draw a Game of Life board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "life_term.toml")]
    config: PathBuf,

    /// How to populate the board (asked interactively when omitted)
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Board height for random and drawn boards
    #[arg(long, value_parser = parse_dimension)]
    height: Option<usize>,

    /// Board width for random and drawn boards
    #[arg(long, value_parser = parse_dimension)]
    width: Option<usize>,

    /// Board file to load (implies --mode file)
    #[arg(long)]
    load: Option<PathBuf>,

    /// Where to save the final board (asked interactively when omitted)
    #[arg(long)]
    save: Option<PathBuf>,

    /// Seed for random boards
    #[arg(long)]
    seed: Option<u64>,

    /// Override the continuous-mode tick interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Start animating continuously instead of step-by-step
    #[arg(long)]
    continuous: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Random,
    File,
    Draw,
}

impl From<ModeArg> for PlayMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Random => PlayMode::Random,
            ModeArg::File => PlayMode::FromFile,
            ModeArg::Draw => PlayMode::UserDrawn,
        }
    }
}

fn parse_dimension(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("'{}' is not a positive integer", s)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(tick_ms) = cli.tick_ms {
        config.session.tick_interval_ms = tick_ms;
    }
    if let Some(seed) = cli.seed {
        config.session.random_seed = Some(seed);
    }
    if cli.continuous {
        config.session.initial_animation = AnimationMode::Continuous;
    }
    config.validate().context("validating configuration")?;

    init_logging(&config.logging)?;
    info!("starting life_term");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let play_mode = match (&cli.load, cli.mode) {
        (Some(_), _) => PlayMode::FromFile,
        (None, Some(mode)) => mode.into(),
        (None, None) => {
            prompter.welcome()?;
            prompter.play_mode()?
        }
    };

    let board = match play_mode {
        PlayMode::FromFile => {
            let path = match cli.load {
                Some(path) => path,
                None => prompter.existing_file()?,
            };
            let grid = persistence::load_from_path(&path)
                .with_context(|| format!("loading board from {}", path.display()))?;
            InitialBoard::FromFile(grid)
        }
        PlayMode::Random | PlayMode::UserDrawn => {
            let height = match cli.height {
                Some(h) => h,
                None => prompter.dimension("height")?,
            };
            let width = match cli.width {
                Some(w) => w,
                None => prompter.dimension("width")?,
            };
            if play_mode == PlayMode::Random {
                InitialBoard::Random {
                    height,
                    width,
                    seed: config.session.random_seed,
                }
            } else {
                InitialBoard::UserDrawn { height, width }
            }
        }
    };

    let mut controller = SessionController::new(board, config.session.initial_animation)
        .context("allocating board")?;

    // Run the session; the terminal is restored even if it fails.
    let mut ui = TerminalUi::enter().context("entering raw terminal mode")?;
    let mut keys = CrosstermKeys;
    let mut pacer = FixedInterval::new(config.session.tick_interval());
    let result = controller.run(&mut keys, &mut ui, &mut pacer);
    let restored = ui.restore();
    result.context("running session")?;
    restored.context("restoring terminal")?;

    let save_path = match cli.save {
        Some(path) => path,
        None => prompter.save_name()?,
    };
    let generation = controller.generation();
    controller
        .finish(&save_path)
        .with_context(|| format!("saving board to {}", save_path.display()))?;

    info!("saved generation {} to {}", generation, save_path.display());
    println!("The game has ended. Thanks for playing.");
    Ok(())
}

fn init_logging(config: &LoggingConfig) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.level.as_str()),
    );
    builder.format_timestamp_micros();

    // Log records on stderr would land on the raw-mode screen.
    if let Some(path) = &config.file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
