use crate::application::session::ProcessProvider;
use std::path::Path;
use tracing::{debug, warn};

/// Command that hands `path` to the desktop's default viewer
pub fn viewer_command(path: &Path) -> (&'static str, Vec<String>) {
    let target = path.to_string_lossy().to_string();

    if cfg!(target_os = "macos") {
        ("open", vec![target])
    } else if cfg!(target_os = "windows") {
        // `start` treats its first quoted argument as a window title
        (
            "cmd",
            vec!["/C".to_string(), "start".to_string(), String::new(), target],
        )
    } else {
        ("xdg-open", vec![target])
    }
}

/// Open `path` in the platform viewer; returns whether the launch succeeded
pub fn open_in_viewer(process: &dyn ProcessProvider, path: &Path) -> bool {
    let (command, args) = viewer_command(path);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let working_dir = path.parent().unwrap_or_else(|| Path::new("."));

    match process.execute(command, &args, working_dir) {
        Ok(output) if output.success => {
            debug!(command, path = %path.display(), "Opened viewer");
            true
        }
        Ok(output) => {
            warn!(command, stderr = output.stderr.trim(), "Viewer exited with an error");
            false
        }
        Err(e) => {
            warn!("Could not open viewer: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    include!("viewer.test.rs");
}
