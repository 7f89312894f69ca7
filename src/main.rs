use clap::Parser;

use yield_table::config::FetchConfig;
use yield_table::{browse, example, fetch_data, logging, schema, show};

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        cli::Command::Show {
            file,
            sort,
            direction,
            clicks,
            loading,
            format,
            output,
        } => show::run(&show::ShowConfig {
            file,
            sort,
            direction,
            clicks,
            loading,
            format,
            output,
        }),
        cli::Command::Browse { file } => browse::run(&file),
        cli::Command::Fetch {
            output,
            chain,
            project,
            min_tvl,
            limit,
        } => {
            let config = FetchConfig {
                chain,
                project,
                min_tvl,
                limit,
                ..FetchConfig::default()
            }
            .with_env()?;
            fetch_data::run(output.as_deref(), &config)
        }
        cli::Command::Schema => schema::run(),
        cli::Command::Example => example::run(),
    }
}
