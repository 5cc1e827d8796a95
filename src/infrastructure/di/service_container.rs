//! Service container for dependency injection
//!
//! Wires up the generator with its filesystem and layout.

use std::sync::Arc;

use crate::application::services::LayoutGenerator;
use crate::config::Settings;
use crate::domain::LayoutSpec;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Generator bound to the research layout
    pub generator: LayoutGenerator,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), LayoutSpec::research())
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>, spec: LayoutSpec) -> Self {
        let settings = Arc::new(settings);
        let generator = LayoutGenerator::new(Arc::clone(&fs), spec);

        Self {
            settings,
            fs,
            generator,
        }
    }
}
