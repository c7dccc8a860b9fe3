use clap::Parser;
use incident_admin::cli::{Cli, Commands};
use incident_admin::{Config, load_config, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // `init` is what creates the file, so it must not require one.
    let config = match cli.command {
        Some(Commands::Init) => Config::default(),
        _ => load_config(cli.config.as_deref())?,
    };
    let worker_threads = config.general.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();

    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }

    let runtime = builder.build()?;
    runtime.block_on(run(cli, config))
}
