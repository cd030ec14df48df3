//! General application configuration.

use serde::{Deserialize, Serialize};
use tale_core::enums::TaskKind;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Task variant used when a command does not name one.
    #[serde(default)]
    pub default_task: TaskKind,
}
