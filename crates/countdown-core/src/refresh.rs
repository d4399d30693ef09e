//! Refresh signals asking display surfaces to re-render.
//!
//! Signals are fire-and-forget: the store never learns whether a surface
//! redrew, and a failing signal never fails the mutation that raised it.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Something that can be told the persisted collection changed.
pub trait RefreshSignal {
    fn request_refresh(&self);
}

/// Discards refresh requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRefresh;

impl RefreshSignal for NoopRefresh {
    fn request_refresh(&self) {}
}

/// Records refresh requests as a timestamp file inside the shared container.
///
/// Display surfaces poll [`RefreshMarker::last_requested`] and redraw when
/// it moves past the time of their last render.
#[derive(Debug, Clone)]
pub struct RefreshMarker {
    path: PathBuf,
}

impl RefreshMarker {
    pub const FILE_NAME: &'static str = "reload.marker";

    pub fn in_container(container: &Path) -> Self {
        Self {
            path: container.join(Self::FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When a refresh was last requested, if ever.
    pub fn last_requested(&self) -> Option<DateTime<Local>> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        DateTime::parse_from_rfc3339(content.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Local))
    }
}

impl RefreshSignal for RefreshMarker {
    fn request_refresh(&self) {
        let stamp = Local::now().to_rfc3339();
        let result = self
            .path
            .parent()
            .map_or(Ok(()), |dir| std::fs::create_dir_all(dir))
            .and_then(|_| std::fs::write(&self.path, stamp));
        match result {
            Ok(()) => log::debug!("Refresh requested via {}", self.path.display()),
            Err(e) => log::warn!(
                "Failed to write refresh marker {}: {e}",
                self.path.display()
            ),
        }
    }
}
