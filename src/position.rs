use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::geom::Point;

/// File name of the persisted overlay position, one `x,y` line.
pub const POSITION_FILE: &str = "window_position.txt";

#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct PersistError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Loads and saves the overlay position as plain text.
///
/// Reads are tolerant: a missing, unreadable or malformed file means "no
/// stored position" and the caller falls back to default placement. Writes
/// surface their errors so shutdown can log them.
pub struct PositionStore {
    path: PathBuf,
}

impl PositionStore {
    pub fn new(path: PathBuf) -> Self {
        PositionStore { path }
    }

    /// Store under the user config dir, `None` when the platform offers no
    /// config dir.
    pub fn default_location() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trayhud").join(POSITION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Option<Point> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        let parsed = parse_position(&contents);
        if parsed.is_none() {
            debug!(path = %self.path.display(), "ignoring malformed position file");
        }
        parsed
    }

    /// Overwrites the file with `x,y`, creating parent directories on first
    /// use.
    pub fn save(&self, pos: Point) -> Result<(), PersistError> {
        self.try_write(pos).map_err(|source| PersistError {
            path: self.path.clone(),
            source,
        })
    }

    fn try_write(&self, pos: Point) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, pos.to_string())
    }
}

/// Accepts exactly two comma-separated integers, with surrounding whitespace
/// tolerated. Anything else is treated as absent.
fn parse_position(contents: &str) -> Option<Point> {
    let mut fields = contents.trim().split(',');
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Point::new(x, y))
}
