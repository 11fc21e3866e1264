//! Configuration sources consulted during endpoint resolution

pub mod config_file;
pub mod environment;
pub mod explicit;

pub use config_file::ConfigFileView;
pub use environment::EnvironmentView;
pub use explicit::ExplicitConfig;

/// The read-only inputs of one resolution pass
///
/// Collected once per pass and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationSources {
    /// Per-call endpoints block, keyed by canonical or alias key
    pub explicit: ExplicitConfig,

    /// Snapshot of the relevant environment variables
    pub environment: EnvironmentView,

    /// Output of the external shared config file parser, if a file was read
    pub config_file: Option<ConfigFileView>,
}

impl ConfigurationSources {
    pub fn new(
        explicit: ExplicitConfig,
        environment: EnvironmentView,
        config_file: Option<ConfigFileView>,
    ) -> Self {
        Self {
            explicit,
            environment,
            config_file,
        }
    }

    pub fn with_explicit(mut self, explicit: ExplicitConfig) -> Self {
        self.explicit = explicit;
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentView) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_config_file(mut self, config_file: ConfigFileView) -> Self {
        self.config_file = Some(config_file);
        self
    }
}
