use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod session;

use config::Config;
use session::{Command, Flow, HELP, Session};

#[derive(Parser)]
#[command(version, about = "Select sentences and drag them around a text", long_about = None)]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, env = "SENTMOVE_CONFIG")]
    config: Option<PathBuf>,

    /// Initial text, overriding the config
    #[arg(long)]
    text: Option<String>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Stop at the first failing command
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    init_miette();
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(text) = cli.text {
        config.editor.initial_text = text;
    }

    let editor = config.editor.build()?;
    let mut session = Session::new(editor, config.display);

    let interactive = cli.script.is_none() && std::io::stdin().is_terminal();
    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(std::io::BufReader::new(
            std::fs::File::open(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("couldn't open script {}", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };

    let mut stdout = std::io::stdout().lock();
    if interactive {
        writeln!(stdout, "{HELP}").into_diagnostic()?;
    }
    session
        .execute(Command::Show, &mut stdout)
        .map_err(miette::Report::new)?;

    for (number, line) in input.lines().enumerate() {
        let line = line.into_diagnostic()?;
        let result = Command::parse(&line).and_then(|command| match command {
            Some(command) => session.execute(command, &mut stdout),
            None => Ok(Flow::Continue),
        });
        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) if cli.strict => {
                return Err(miette::Report::new(err)
                    .wrap_err(format!("command on line {} failed", number + 1)));
            }
            Err(err) => {
                tracing::debug!(line = number + 1, "command failed");
                eprintln!("{:?}", miette::Report::new(err));
            }
        }
        stdout.flush().into_diagnostic()?;
    }

    Ok(())
}

fn init_miette() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(2)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))
    .expect("couldn't set the miette hook");
    miette::set_panic_hook();
}

fn init_tracing() {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}
