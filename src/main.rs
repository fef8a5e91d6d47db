use clap::Parser;
use std::process;
use tl::cli::{Cli, Commands};
use tl::cli_handlers;
use tl::store::SessionStore;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let store = match cli.session {
        Some(path) => SessionStore::open(path),
        None => SessionStore::open_current_dir(),
    };

    let result = match cli.command {
        Commands::Lists => cli_handlers::handle_lists(&store),
        Commands::New { title } => cli_handlers::handle_new(&store, &title),
        Commands::Rename { id, title } => cli_handlers::handle_rename(&store, id, &title),
        Commands::Delete { id } => cli_handlers::handle_delete(&store, id),
        Commands::Show { id } => cli_handlers::handle_show(&store, id),
        Commands::Add { list, title } => cli_handlers::handle_add(&store, list, &title),
        Commands::Toggle { list, todo } => cli_handlers::handle_toggle(&store, list, todo),
        Commands::Remove { list, todo } => cli_handlers::handle_remove(&store, list, todo),
        Commands::Complete { list } => cli_handlers::handle_complete(&store, list),
    };

    if let Err(e) = result {
        // Validation messages are form-ready; everything else is a
        // generic request failure.
        if e.is_validation() {
            eprintln!("{e}");
        } else {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}
