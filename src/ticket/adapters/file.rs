//! File-backed mirror rooted in a capability-scoped directory.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::codec;
use crate::ticket::{
    domain::Ticket,
    ports::{DEFAULT_STORAGE_KEY, TicketMirror, TicketMirrorResult},
};

/// Ticket mirror persisting the collection to `<key>.json`.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// target, so a crash mid-write leaves the previous collection intact.
#[derive(Debug)]
pub struct FileTicketMirror {
    dir: Dir,
    file_name: String,
    staging_name: String,
}

impl FileTicketMirror {
    /// Opens an existing directory and mirrors under [`DEFAULT_STORAGE_KEY`].
    ///
    /// # Errors
    ///
    /// Returns [`TicketMirrorError::Io`] when the directory cannot be
    /// opened.
    ///
    /// [`TicketMirrorError::Io`]: crate::ticket::ports::TicketMirrorError::Io
    pub fn open(path: &Utf8Path) -> TicketMirrorResult<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self::from_dir(dir, DEFAULT_STORAGE_KEY))
    }

    /// Mirrors under `key` inside an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir, key: &str) -> Self {
        Self {
            dir,
            file_name: format!("{key}.json"),
            staging_name: format!("{key}.json.tmp"),
        }
    }

    /// Returns the name of the file holding the collection.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl TicketMirror for FileTicketMirror {
    fn load(&self) -> TicketMirrorResult<Vec<Ticket>> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(payload) => codec::decode(&payload),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, tickets: &[Ticket]) -> TicketMirrorResult<()> {
        let payload = codec::encode(tickets)?;
        self.dir.write(&self.staging_name, payload)?;
        self.dir
            .rename(&self.staging_name, &self.dir, &self.file_name)?;
        Ok(())
    }
}
