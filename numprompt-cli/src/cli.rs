use anyhow::{Context, Result};
use clap::Parser;
use numprompt::utils::{AsyncTerminal, OverlongLine, ReadOptions, color_for_stderr};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Ask for a number until a valid one is typed.
#[derive(Debug, Parser)]
#[command(name = "numprompt", version, about)]
pub struct Cli {
    /// Read a float instead of an integer.
    #[arg(long)]
    pub float: bool,

    /// Accept a leading minus sign.
    #[arg(long)]
    pub allow_negative: bool,

    /// Convert the first line as-is; garbage becomes 0.
    #[arg(long)]
    pub no_validate: bool,

    /// Give up after this many invalid lines (0 = never).
    #[arg(long, default_value_t = 0)]
    pub max_retries: u32,

    /// Fail on lines longer than the buffer instead of truncating them.
    #[arg(long)]
    pub reject_long_lines: bool,

    /// Do not color diagnostics.
    #[arg(long)]
    pub plain: bool,

    /// Skip the banner and the prompt text.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn options(&self) -> ReadOptions {
        let overlong = if self.reject_long_lines {
            OverlongLine::Reject
        } else {
            OverlongLine::Truncate
        };

        ReadOptions::new()
            .with_validate(!self.no_validate)
            .with_allow_negative(self.allow_negative)
            .with_max_retries(self.max_retries)
            .with_overlong(overlong)
            .with_highlight(!self.plain)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_banner() {
    eprintln!("--------------------------------------------------");
    eprintln!(" numprompt                  VERSION: {}", env!("CARGO_PKG_VERSION"));
    eprintln!("--------------------------------------------------");
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if !cli.plain {
        color_for_stderr();
    }

    let options = cli.options();
    info!(?options, float = cli.float, "starting prompt");

    let token = CancellationToken::new();
    let on_interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    if !cli.quiet {
        print_banner();
        eprint!("Enter a{} {}: ", if cli.float { "" } else { "n" }, kind_name(cli.float));
    }

    let mut terminal = AsyncTerminal::stdio().with_cancellation(token);

    if cli.float {
        let mut value = 0.0_f32;
        terminal
            .read_float(&mut value, options)
            .await
            .context("could not read a float")?;
        println!("{value}");
    } else {
        let mut value = 0_i32;
        terminal
            .read_int(&mut value, options)
            .await
            .context("could not read an integer")?;
        println!("{value}");
    }

    Ok(())
}

fn kind_name(float: bool) -> &'static str {
    if float { "float" } else { "integer" }
}
