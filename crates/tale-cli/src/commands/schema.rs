use anyhow::Context;
use tale_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `tale schema`. Without a name, lists what is registered.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    match args.name.as_deref() {
        Some(name) if !args.list => {
            let schema = registry
                .get(name)
                .with_context(|| format!("unknown schema '{name}' (see `tale schema --list`)"))?;
            output(schema, flags.format)
        }
        _ => output(&registry.list(), flags.format),
    }
}
