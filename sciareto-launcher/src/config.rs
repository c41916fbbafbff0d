use std::path::PathBuf;

use serde::Serialize;

pub const DEFAULT_MUTEX_NAME: &str = "SciaRetoLauncherInstanceMutex";
pub const DEFAULT_ARCHIVE: &str = "scia-reto.jar";
pub const DEFAULT_MAX_HEAP: &str = "2G";

/// Options controlling a single launch of the bundled application
///
/// The booleans are independent of each other; [`LauncherConfig::guarded`] and
/// [`LauncherConfig::detached`] are the two combinations shipped as executables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LauncherConfig {
    /// Refuse to start when another launcher holds the named mutex
    pub single_instance: bool,
    /// Block until the application exits and fail when it fails
    pub wait_for_exit: bool,
    /// Pass `-Dsun.java2d.opengl=true` to the runtime
    pub opengl_acceleration: bool,
    pub mutex_name: String,
    /// Runtime executable, relative to the launcher directory
    pub runtime: PathBuf,
    /// Application archive, relative to the launcher directory
    pub archive: PathBuf,
    /// Value appended to `-Xmx`
    pub max_heap: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self::guarded()
    }
}

impl LauncherConfig {
    #[must_use]
    pub fn guarded() -> Self {
        Self {
            single_instance: true,
            wait_for_exit: true,
            opengl_acceleration: false,
            mutex_name: DEFAULT_MUTEX_NAME.to_string(),
            runtime: default_runtime(),
            archive: PathBuf::from(DEFAULT_ARCHIVE),
            max_heap: DEFAULT_MAX_HEAP.to_string(),
        }
    }

    #[must_use]
    pub fn detached() -> Self {
        Self {
            single_instance: false,
            wait_for_exit: false,
            opengl_acceleration: true,
            ..Self::guarded()
        }
    }

    #[must_use]
    pub fn single_instance(mut self, enable: bool) -> Self {
        self.single_instance = enable;
        self
    }

    #[must_use]
    pub fn wait_for_exit(mut self, enable: bool) -> Self {
        self.wait_for_exit = enable;
        self
    }

    #[must_use]
    pub fn opengl_acceleration(mut self, enable: bool) -> Self {
        self.opengl_acceleration = enable;
        self
    }

    #[must_use]
    pub fn mutex_name(mut self, name: impl Into<String>) -> Self {
        self.mutex_name = name.into();
        self
    }

    #[must_use]
    pub fn runtime(mut self, runtime: impl Into<PathBuf>) -> Self {
        self.runtime = runtime.into();
        self
    }

    #[must_use]
    pub fn archive(mut self, archive: impl Into<PathBuf>) -> Self {
        self.archive = archive.into();
        self
    }
}

fn default_runtime() -> PathBuf {
    ["jre", "bin", "javaw.exe"].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_only_differ_in_switches() {
        let guarded = LauncherConfig::guarded();
        let detached = LauncherConfig::detached();

        assert!(guarded.single_instance && guarded.wait_for_exit);
        assert!(!guarded.opengl_acceleration);

        assert!(!detached.single_instance && !detached.wait_for_exit);
        assert!(detached.opengl_acceleration);

        assert_eq!(guarded.runtime, detached.runtime);
        assert_eq!(guarded.archive, detached.archive);
        assert_eq!(guarded.mutex_name, detached.mutex_name);
        assert_eq!(guarded.max_heap, detached.max_heap);
    }

    #[test]
    fn default_is_guarded() {
        assert_eq!(LauncherConfig::default(), LauncherConfig::guarded());
    }

    #[test]
    fn switches_are_independent() {
        let config = LauncherConfig::detached().wait_for_exit(true);
        assert!(config.wait_for_exit);
        assert!(!config.single_instance);
        assert!(config.opengl_acceleration);
    }

    #[test]
    fn serializes_for_logging() {
        let json = serde_json::to_string(&LauncherConfig::guarded()).unwrap();
        assert!(json.contains("\"single_instance\":true"));
        assert!(json.contains("scia-reto.jar"));
    }
}
