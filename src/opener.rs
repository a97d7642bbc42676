//! Open a generated file with the desktop's default application

use std::path::Path;
use std::process::Command;

use crate::error::{PwToolkitError, Result};

/// Launcher command for the given operating system, if one is known
pub fn open_command(os: &str, path: &Path) -> Option<Command> {
    match os {
        "windows" => {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg("start").arg("").arg(path);
            Some(cmd)
        }
        "macos" => {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            Some(cmd)
        }
        "linux" => {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            Some(cmd)
        }
        _ => None,
    }
}

/// Open `path` with the default application of the current OS
pub fn open_file(path: &Path) -> Result<()> {
    let mut cmd = open_command(std::env::consts::OS, path).ok_or_else(|| {
        PwToolkitError::unsupported(format!("Please open '{}' manually.", path.display()))
    })?;

    let status = cmd
        .status()
        .map_err(|e| PwToolkitError::io(format!("Could not open the file: {}", e), Some(path.display().to_string())))?;

    if !status.success() {
        return Err(PwToolkitError::io(
            format!("Could not open the file: launcher exited with {}", status),
            Some(path.display().to_string()),
        ));
    }

    tracing::debug!(path = %path.display(), "Opened file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_command_per_os() {
        let path = Path::new("custom_wordlist.txt");

        let cmd = open_command("linux", path).unwrap();
        assert_eq!(cmd.get_program(), "xdg-open");

        let cmd = open_command("macos", path).unwrap();
        assert_eq!(cmd.get_program(), "open");

        let cmd = open_command("windows", path).unwrap();
        assert_eq!(cmd.get_program(), "cmd");
        assert_eq!(cmd.get_args().count(), 4);

        assert!(open_command("haiku", path).is_none());
    }
}
