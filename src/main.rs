use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gradebook::session::DEFAULT_LOG_LIMIT;
use gradebook::{import, Gradebook, Session};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Interactive gradebook with undo and an activity log", long_about = None)]
struct Cli {
    /// CSV file (name,grade) used to seed the roster
    #[arg(long, env = "GRADEBOOK_ROSTER")]
    roster: Option<PathBuf>,

    /// Number of entries shown by LOG
    #[arg(long, env = "GRADEBOOK_LOG_LIMIT", default_value_t = DEFAULT_LOG_LIMIT)]
    log_limit: usize,

    /// Default diagnostic level; RUST_LOG takes precedence
    #[arg(long, env = "GRADEBOOK_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Do not print the "> " prompt
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&cli.log_level))
                .context("invalid --log-level filter")?,
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut gradebook = Gradebook::new();
    if let Some(path) = &cli.roster {
        let summary = import::import_roster(&mut gradebook, path)?;
        println!(
            "Loaded {} students ({} grades) from {}.",
            summary.students,
            summary.grades,
            path.display()
        );
        if summary.skipped > 0 {
            println!("Skipped {} duplicate students.", summary.skipped);
        }
    }

    let mut session = Session::new(gradebook, cli.log_limit);
    info!(log_limit = cli.log_limit, "session started");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut lines = stdin.lock().lines();
    let mut exited = false;

    loop {
        if !cli.quiet {
            write!(stdout, "> ").context("failed to write prompt")?;
            stdout.flush().context("failed to flush stdout")?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;

        let outcome = session.handle_line(&line);
        stdout
            .write_all(outcome.output.as_bytes())
            .context("failed to write output")?;

        if outcome.exit {
            exited = true;
            break;
        }
    }

    if !exited {
        if !cli.quiet {
            writeln!(stdout).context("failed to write output")?;
        }
        writeln!(stdout, "Goodbye!").context("failed to write output")?;
    }
    info!(
        students = session.gradebook().student_count(),
        "session ended"
    );

    Ok(())
}
