use std::path::Path;
use std::path::PathBuf;

use crate::LaunchError;
use crate::LauncherConfig;

/// Directory containing the running executable, independent of the working directory
pub fn base_directory() -> Result<PathBuf, LaunchError> {
    let current_exe = std::env::current_exe()
        .map_err(|error| LaunchError::PathResolution(format!("unable to get exec path: {error}")))?;

    executable_directory(&current_exe)
}

/// Resolves symlinks in `executable` and returns its parent directory
///
/// `dunce` keeps the result free of the `\\?\` prefix that `std::fs::canonicalize` adds on
/// Windows, which the JVM does not understand in `-jar` arguments.
pub fn executable_directory(executable: &Path) -> Result<PathBuf, LaunchError> {
    let mut resolved = dunce::canonicalize(executable).map_err(|error| {
        LaunchError::PathResolution(format!("{}: {error}", executable.display()))
    })?;

    if !resolved.pop() || resolved.as_os_str().is_empty() {
        return Err(LaunchError::PathResolution(format!(
            "{} has no parent directory",
            executable.display()
        )));
    }

    Ok(resolved)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPaths {
    pub base: PathBuf,
    pub runtime: PathBuf,
    pub archive: PathBuf,
}

impl LaunchPaths {
    pub fn resolve(base: &Path, config: &LauncherConfig) -> Result<Self, LaunchError> {
        Ok(Self {
            base: base.to_path_buf(),
            runtime: join_relative(base, &config.runtime)?,
            archive: join_relative(base, &config.archive)?,
        })
    }
}

fn join_relative(base: &Path, relative: &Path) -> Result<PathBuf, LaunchError> {
    if relative.as_os_str().is_empty() {
        return Err(LaunchError::PathResolution(String::from(
            "bundled file path is empty",
        )));
    }

    // joining an absolute path would discard the launcher directory
    if relative.has_root() {
        return Err(LaunchError::PathResolution(format!(
            "{} must be relative to the launcher directory",
            relative.display()
        )));
    }

    Ok(base.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_bundled_files_onto_base() {
        let base = PathBuf::from("opt").join("sciareto");
        let paths = LaunchPaths::resolve(&base, &LauncherConfig::guarded()).unwrap();

        assert_eq!(
            paths.runtime,
            base.join("jre").join("bin").join("javaw.exe")
        );
        assert_eq!(paths.archive, base.join("scia-reto.jar"));
        assert_eq!(paths.base, base);
    }

    #[test]
    fn rejects_empty_and_rooted_paths() {
        let base = PathBuf::from("sciareto");

        let empty = LauncherConfig::guarded().archive("");
        assert!(matches!(
            LaunchPaths::resolve(&base, &empty),
            Err(LaunchError::PathResolution(_))
        ));

        let rooted = LauncherConfig::guarded().runtime(std::path::MAIN_SEPARATOR_STR.to_string() + "javaw.exe");
        assert!(matches!(
            LaunchPaths::resolve(&base, &rooted),
            Err(LaunchError::PathResolution(_))
        ));
    }

    #[test]
    fn executable_directory_is_parent_of_canonical_path() {
        let dir = tempfile::tempdir().unwrap();
        let executable = dir.path().join("sciareto.exe");
        std::fs::write(&executable, b"").unwrap();

        let resolved = executable_directory(&executable).unwrap();
        assert_eq!(resolved, dunce::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn executable_directory_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.exe");

        assert!(matches!(
            executable_directory(&missing),
            Err(LaunchError::PathResolution(_))
        ));
    }

    #[test]
    fn base_directory_ignores_working_directory() {
        let expected = base_directory().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let resolved = base_directory();
        std::env::set_current_dir(previous).unwrap();

        assert_eq!(resolved.unwrap(), expected);
    }
}
