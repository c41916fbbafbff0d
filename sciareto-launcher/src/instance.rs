#[cfg(windows)]
use windows::core::HSTRING;
#[cfg(windows)]
use windows::Win32::Foundation::CloseHandle;
#[cfg(windows)]
use windows::Win32::Foundation::GetLastError;
#[cfg(windows)]
use windows::Win32::Foundation::ERROR_ALREADY_EXISTS;
#[cfg(windows)]
use windows::Win32::Foundation::HANDLE;
#[cfg(windows)]
use windows::Win32::System::Threading::CreateMutexW;

use crate::LaunchError;

/// Ownership of the named mutex which marks a running launcher
///
/// The mutex stays held until this value is dropped or the process exits, so it should be
/// kept alive for as long as the application runs.
#[derive(Debug)]
pub struct InstanceGuard {
    name: String,
    #[cfg(windows)]
    handle: HANDLE,
}

impl InstanceGuard {
    #[cfg(windows)]
    #[tracing::instrument]
    pub fn acquire(name: &str) -> Result<Self, LaunchError> {
        let handle = unsafe { CreateMutexW(None, true, &HSTRING::from(name)) }.map_err(|_| {
            LaunchError::Mutex {
                name: name.to_string(),
                source: std::io::Error::last_os_error(),
            }
        })?;

        // CreateMutexW hands out the existing mutex and flags it via the last error code
        if unsafe { GetLastError() } == ERROR_ALREADY_EXISTS {
            unsafe {
                let _ = CloseHandle(handle);
            }

            return Err(LaunchError::AlreadyRunning);
        }

        tracing::debug!("acquired mutex: {name}");

        Ok(Self {
            name: name.to_string(),
            handle,
        })
    }

    #[cfg(not(windows))]
    #[tracing::instrument]
    pub fn acquire(name: &str) -> Result<Self, LaunchError> {
        tracing::warn!("named mutexes are only available on windows, not guarding '{name}'");

        Ok(Self {
            name: name.to_string(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(windows)]
impl Drop for InstanceGuard {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}
