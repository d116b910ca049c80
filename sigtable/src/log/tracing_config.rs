// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::try_create_layers;

/// Configure the tracing system. Build one directly, or convert from a
/// [`LevelFilter`], [`WriterConfig`], or [`DisplayPreference`] and compose with `+`.
/// See [`mod@crate::log::tracing_config_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// Where log output goes. The `String` is the path to the log file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WriterConfig {
    #[default]
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    /// Set the global default subscriber. This can only happen once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or if a global subscriber
    /// was already set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|error| miette::miette!("Can't install tracing subscriber: {error}"))
    }

    /// Set the subscriber for the current thread, until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}
