#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "levin", about = "Portable-storage payload inspection tools")]
struct Cli {
	/// Log filter used when `RUST_LOG` is unset.
	#[arg(long, global = true, env = "LEVIN_LOG", default_value = "warn")]
	log_level: String,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info(cmd::info::Args),
	Dump(cmd::dump::Args),
	Get(cmd::get::Args),
	Encode(cmd::encode::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(&cli.log_level);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging(level: &str) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: Commands) -> cmd::CliResult<()> {
	match command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
		Commands::Get(args) => cmd::get::run(args),
		Commands::Encode(args) => cmd::encode::run(args),
	}
}
