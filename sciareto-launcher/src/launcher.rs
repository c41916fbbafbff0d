use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;
use std::process::Child;
use std::process::Command;
use std::process::ExitStatus;

use crate::paths::base_directory;
use crate::InstanceGuard;
use crate::LaunchError;
use crate::LaunchPaths;
use crate::LauncherConfig;

pub const OPENGL_PROPERTY: &str = "-Dsun.java2d.opengl=true";

#[derive(Debug)]
pub enum Outcome {
    /// The application was started and left running on its own
    Detached { pid: u32 },
    /// The application was waited on and exited successfully
    Exited { status: ExitStatus },
}

#[derive(Debug)]
pub struct Launcher {
    config: LauncherConfig,
    base: Option<PathBuf>,
    instance: Option<InstanceGuard>,
}

impl Launcher {
    #[must_use]
    pub const fn new(config: LauncherConfig) -> Self {
        Self {
            config,
            base: None,
            instance: None,
        }
    }

    /// Use `base` instead of the directory of the current executable
    #[must_use]
    pub fn with_base_directory(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    #[must_use]
    pub const fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// The mutex held on behalf of this launcher, if the single instance guard is enabled
    #[must_use]
    pub const fn instance(&self) -> Option<&InstanceGuard> {
        self.instance.as_ref()
    }

    /// Guards, resolves, spawns and optionally waits, failing fast at every step
    ///
    /// The instance guard is kept on `self`, so the launcher should outlive the
    /// application when the single instance guard is enabled without waiting.
    pub fn run(&mut self) -> Result<Outcome, LaunchError> {
        if self.config.single_instance {
            tracing::info!("trying to create mutex");
            self.instance = Some(InstanceGuard::acquire(&self.config.mutex_name)?);
        }

        let base = match &self.base {
            Some(base) => base.clone(),
            None => base_directory()?,
        };

        let paths = LaunchPaths::resolve(&base, &self.config)?;
        let child = self.spawn(&paths)?;

        if self.config.wait_for_exit {
            Self::wait(child)
        } else {
            Ok(Outcome::Detached { pid: child.id() })
        }
    }

    #[tracing::instrument(skip(self))]
    fn spawn(&self, paths: &LaunchPaths) -> Result<Child, LaunchError> {
        tracing::info!("starting application");

        let child = Command::new(&paths.runtime)
            .args(jvm_arguments(&self.config, &paths.archive))
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                runtime: paths.runtime.clone(),
                source,
            })?;

        tracing::debug!("started process: {}", child.id());

        Ok(child)
    }

    fn wait(mut child: Child) -> Result<Outcome, LaunchError> {
        tracing::info!("waiting for session end");

        let status = child.wait().map_err(LaunchError::Wait)?;
        if !status.success() {
            tracing::error!("application exited with {status}");
            return Err(LaunchError::ChildFailed(status));
        }

        Ok(Outcome::Exited { status })
    }
}

/// Arguments passed to the runtime, in order
#[must_use]
pub fn jvm_arguments(config: &LauncherConfig, archive: &Path) -> Vec<OsString> {
    let mut arguments = vec![OsString::from(format!("-Xmx{}", config.max_heap))];

    if config.opengl_acceleration {
        arguments.push(OsString::from(OPENGL_PROPERTY));
    }

    arguments.push(OsString::from("-jar"));
    arguments.push(archive.as_os_str().to_os_string());

    arguments
}
