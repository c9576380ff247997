use std::io::Write;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitcalc::build_app;
use fitcalc::workout::{Package, demo_packages, report_lines};
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Estimate distance, speed and calories from workout sensor readings.
#[derive(Parser, Debug)]
#[command(name = "fitcalc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level: trace, debug, info, warn, error.
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one summary line per package.
    Report {
        /// Packages in CODE:v1,v2,... form, e.g. RUN:15000,1,75.
        /// The reference packages are used when none are given.
        packages: Vec<Package>,
    },
    /// Serve the calculator web page.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "FITCALC_ADDR", default_value = "0.0.0.0:3000")]
        addr: SocketAddr,
    },
}

fn init_tracing(level: Level) -> Result<()> {
    // Logs go to stderr so stdout carries only report lines.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("fitcalc={level},tower_http={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize tracing subscriber")
}

/// Returns the number of packages that could not be processed.
fn run_report(packages: Vec<Package>) -> Result<usize> {
    let packages = if packages.is_empty() {
        demo_packages()
    } else {
        packages
    };

    let request_id = Uuid::new_v4();
    let _span = tracing::info_span!("report", %request_id, packages = packages.len()).entered();

    let mut stdout = std::io::stdout().lock();
    let mut failures = 0;
    for (package, line) in packages.iter().zip(report_lines(&packages)) {
        match line {
            Ok(line) => writeln!(stdout, "{line}").context("failed to write report")?,
            Err(err) => {
                failures += 1;
                tracing::error!(workout_type = %package.workout_type, error = %err, "package rejected");
                eprintln!("{}: {err}", package.workout_type);
            }
        }
    }

    Ok(failures)
}

async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, build_app().into_make_service())
        .await
        .context("server crashed")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level)?;

    match args.command.unwrap_or(Command::Report {
        packages: Vec::new(),
    }) {
        Command::Report { packages } => {
            let failures = run_report(packages)?;
            if failures > 0 {
                anyhow::bail!("{failures} package(s) could not be processed");
            }
            Ok(())
        }
        Command::Serve { addr } => serve(addr).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_the_default_command() {
        let args = Args::try_parse_from(["fitcalc"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.log_level, Level::INFO);
    }

    #[test]
    fn report_parses_packages() {
        let args = Args::try_parse_from(["fitcalc", "report", "RUN:15000,1,75", "XYZ:1"]).unwrap();
        match args.command {
            Some(Command::Report { packages }) => {
                assert_eq!(packages.len(), 2);
                assert_eq!(packages[1].workout_type, "XYZ");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn report_rejects_unparseable_package() {
        assert!(Args::try_parse_from(["fitcalc", "report", "RUN"]).is_err());
    }

    #[test]
    fn serve_parses_address() {
        let args =
            Args::try_parse_from(["fitcalc", "--log-level", "debug", "serve", "--addr", "127.0.0.1:8080"])
                .unwrap();
        assert_eq!(args.log_level, Level::DEBUG);
        assert!(matches!(args.command, Some(Command::Serve { addr }) if addr.port() == 8080));
    }

    #[test]
    fn malformed_packages_are_counted() {
        let packages = vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("WLK", vec![1.0]),
            Package::new("XYZ", vec![]),
        ];
        assert_eq!(run_report(packages).unwrap(), 1);
    }
}
