use anyhow::Context;
use clap::Parser;
use convidados_checklist::{cli, commands, config, error, file_store};
use convidados_common::GuestRoster;
use cli::{Cli, Commands};
use config::Config;
use dialoguer::Confirm;
use file_store::FileStore;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("loading config")?;

    match cli.command {
        Commands::Config { set_storage, show } => {
            let mut config = config;

            if let Some(path) = set_storage {
                config.set_storage_path(path)?;
                println!("✔ Storage path updated");
            }

            if show {
                println!("Settings:");
                println!("  Storage: {}", config.resolve_storage_path()?.display());
                println!("  Export file: {}", config.export_file_name);
            }
        }

        Commands::List { search } => {
            let mut roster = open_roster(&config)?;
            println!("{}", commands::list(&mut roster, search.as_deref()));
            println!(
                "\n{}/{} confirmed",
                commands::confirmed_count(roster.guests()),
                roster.guests().len()
            );
        }

        Commands::Toggle { id } => {
            let mut roster = open_roster(&config)?;
            roster.toggle_confirmed(id);
            match roster.guests().iter().find(|g| g.numeric_id() == Some(id)) {
                Some(guest) => println!("✔ {}", commands::format_guest(guest)),
                None => println!("No guest with id {}", id),
            }
        }

        Commands::Reset { yes } => {
            let mut roster = open_roster(&config)?;
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Replace the guest list with the built-in one?")
                    .default(false)
                    .interact()
                    .map_err(|e| error::ChecklistError::Prompt(e.to_string()))?;

            if confirmed {
                roster.reset();
                println!("✔ Guest list reset");
            } else {
                println!("Cancelled");
            }
        }

        Commands::Export { output, format } => {
            let roster = open_roster(&config)?;
            let output = output
                .unwrap_or_else(|| commands::default_export_path(&config.export_file_name, format));
            commands::export(&roster, &output, format)?;
            println!("✔ Exported {} guests: {}", roster.guests().len(), output.display());
        }

        Commands::Import { input } => {
            let mut roster = open_roster(&config)?;
            let count = commands::import(&mut roster, &input)?;
            println!("✔ Imported {} guests from {}", count, input.display());
        }
    }

    Ok(())
}

fn open_roster(config: &Config) -> error::Result<GuestRoster<FileStore>> {
    let storage_path = config.resolve_storage_path()?;
    tracing::debug!(path = %storage_path.display(), "opening storage");
    let mut roster = GuestRoster::load(FileStore::open(storage_path));
    roster.subscribe(|state| tracing::debug!(guests = state.guests.len(), "roster changed"));
    Ok(roster)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
