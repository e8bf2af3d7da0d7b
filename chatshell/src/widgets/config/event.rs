use super::model::ShellConfig;

/// Intent events handled by the config widget.
#[derive(Debug, Clone)]
pub(crate) enum ConfigIntent {
    /// Persist the live configuration if it differs from disk.
    Save,
    /// Save completed; carries the normalized configuration that was written.
    SaveCompleted(ShellConfig),
    /// Save failed.
    SaveFailed(String),
}

/// Effect events produced by the config reducer, routed outward.
#[derive(Debug, Clone)]
pub(crate) enum ConfigEffect {
    SaveCompleted(ShellConfig),
    SaveFailed(String),
}

/// Config event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ConfigEvent {
    Intent(ConfigIntent),
    Effect(ConfigEffect),
}
