use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(thiserror::Error, Debug)]
pub enum LaunchError {
    #[error("application already started")]
    AlreadyRunning,
    #[error("could not create mutex '{name}': {source}")]
    Mutex {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not resolve launch paths: {0}")]
    PathResolution(String),
    #[error("could not start '{}': {source}", .runtime.display())]
    Spawn {
        runtime: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not wait for application: {0}")]
    Wait(#[source] std::io::Error),
    #[error("application exited with {0}")]
    ChildFailed(ExitStatus),
}

impl LaunchError {
    /// Whether this error only reports a sibling instance rather than a real failure
    #[must_use]
    pub const fn is_already_running(&self) -> bool {
        matches!(self, Self::AlreadyRunning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_resource() {
        let spawn = LaunchError::Spawn {
            runtime: PathBuf::from("jre").join("bin").join("javaw.exe"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(spawn.to_string().contains("javaw.exe"));

        let mutex = LaunchError::Mutex {
            name: String::from("SciaRetoLauncherInstanceMutex"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(mutex.to_string().contains("SciaRetoLauncherInstanceMutex"));
    }

    #[test]
    fn only_sibling_detection_is_already_running() {
        assert!(LaunchError::AlreadyRunning.is_already_running());
        assert!(!LaunchError::PathResolution(String::from("no parent")).is_already_running());
    }
}
