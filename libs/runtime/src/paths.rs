use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Errors for resolving the server home directory
#[derive(Debug, thiserror::Error)]
pub enum HomeDirError {
    #[error("HOME environment variable is not set")]
    HomeMissing,
    #[error("APPDATA environment variable is not set")]
    AppDataMissing,
    #[error("home_dir must be an absolute path (after ~ expansion): {0}")]
    AbsoluteRequired(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn user_home() -> Result<String, HomeDirError> {
    #[cfg(target_os = "windows")]
    {
        env::var("USERPROFILE")
            .or_else(|_| env::var("HOME"))
            .map_err(|_| HomeDirError::HomeMissing)
    }
    #[cfg(not(target_os = "windows"))]
    {
        env::var("HOME").map_err(|_| HomeDirError::HomeMissing)
    }
}

/// Expand a leading `~` to the user home directory.
///
/// Paths without the prefix are returned unchanged.
pub fn expand_tilde(raw: &str) -> Result<PathBuf, HomeDirError> {
    if raw == "~" {
        return Ok(PathBuf::from(user_home()?));
    }
    let rest = raw
        .strip_prefix("~/")
        .or_else(|| raw.strip_prefix("~\\").filter(|_| cfg!(target_os = "windows")));
    match rest {
        Some(rest) => Ok(Path::new(&user_home()?).join(rest)),
        None => Ok(PathBuf::from(raw)),
    }
}

fn platform_base() -> Result<PathBuf, HomeDirError> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .map(PathBuf::from)
            .map_err(|_| HomeDirError::AppDataMissing)
    }
    #[cfg(not(target_os = "windows"))]
    {
        user_home().map(PathBuf::from)
    }
}

/// Resolve the server home directory.
///
/// An explicit value gets `~` expansion and must end up absolute. Without one
/// the platform default is used: `%APPDATA%/<default_subdir>` on Windows and
/// `$HOME/<default_subdir>` elsewhere. With `create` the directory is made if
/// missing.
pub fn resolve_home_dir(
    config_home: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf, HomeDirError> {
    let path = match config_home {
        Some(raw) => {
            let expanded = expand_tilde(&raw)?;
            if !expanded.is_absolute() {
                return Err(HomeDirError::AbsoluteRequired(
                    expanded.to_string_lossy().into_owned(),
                ));
            }
            expanded
        }
        None => platform_base()?.join(default_subdir),
    };

    if create {
        fs::create_dir_all(&path)?;
    }
    Ok(path)
}
