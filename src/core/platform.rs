/// The host operating system, as far as this tool cares about it.
///
/// Only two platforms change behavior: Windows (alternate path separator,
/// its own exclusion map) and Darwin (its own exclusion map). Everything
/// else collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Darwin,
    Other,
}

impl Platform {
    /// Detects the host platform.
    ///
    /// Callers are expected to do this once at startup and pass the value
    /// down, so the functions consuming it stay pure and testable across
    /// simulated platforms.
    pub fn host() -> Self {
        match std::env::consts::OS {
            "windows" => Platform::Windows,
            "macos" => Platform::Darwin,
            _ => Platform::Other,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Darwin => write!(f, "darwin"),
            Platform::Other => write!(f, "other"),
        }
    }
}
