use tale_config::TaleConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &TaleConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Template(args) => commands::template::handle(&args, config, flags),
        Commands::Validate(args) => commands::validate::handle(&args, config, flags),
        Commands::Assemble(args) => commands::assemble::handle(&args, config, flags),
        Commands::Submit(args) => commands::submit::handle(&args, config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
