use crate::prelude::*;
use clap::Parser;

mod error;
mod menu;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Manage an in-memory library catalog from a text menu"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<SubCommands>,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "LIBCAT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Disable colored output.
    #[clap(long, env = "LIBCAT_NO_COLOR", global = true, default_value = "false")]
    no_color: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Run the interactive catalog menu (default)
    Menu(crate::menu::App),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    if app.global.no_color {
        colored::control::set_override(false);
    }

    let command = app
        .command
        .unwrap_or_else(|| SubCommands::Menu(crate::menu::App::default()));

    match command {
        SubCommands::Menu(sub_app) => crate::menu::run(sub_app, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
