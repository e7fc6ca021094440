//! Preserving a file's permission bits and ownership across an in-place rewrite.

use std::{
    fs::{self, Permissions},
    io,
    path::Path,
};

use log::{debug, warn};

use crate::{Error, Result};

/// The permission bits and, on Unix, owner of a file at one point in time.
#[derive(Clone, Debug)]
pub struct FileAttributes {
    permissions: Permissions,
    #[cfg(unix)]
    owner: (u32, u32),
}

impl FileAttributes {
    /// Captures the current attributes of the file at `path`.
    ///
    /// # Errors
    /// This function returns an error if the file's metadata can't be read.
    pub fn snapshot(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)
            .map_err(|e| Error::io(e, format!("reading metadata of '{}'", path.display())))?;
        #[cfg(unix)]
        let owner = {
            use std::os::unix::fs::MetadataExt;
            (metadata.uid(), metadata.gid())
        };
        Ok(Self {
            permissions: metadata.permissions(),
            #[cfg(unix)]
            owner,
        })
    }

    /// Reapplies the captured attributes to the file at `path`. Only the owner
    /// may be left unchanged: lacking the privilege to change it is logged and
    /// otherwise ignored.
    ///
    /// # Errors
    /// This function returns an error if the permissions can't be set or the
    /// ownership change fails for a reason other than lacking privilege.
    pub fn restore(&self, path: &Path) -> Result<()> {
        // chown clears the setuid and setgid bits, so the mode goes last
        #[cfg(unix)]
        self.restore_owner(path)?;
        fs::set_permissions(path, self.permissions.clone()).map_err(|e| {
            Error::io(e, format!("restoring permissions of '{}'", path.display()))
        })?;
        debug!("Restored attributes of {}", path.display());
        Ok(())
    }

    #[cfg(unix)]
    fn restore_owner(&self, path: &Path) -> Result<()> {
        use std::os::unix::fs::MetadataExt;

        let current = fs::metadata(path)
            .map_err(|e| Error::io(e, format!("reading metadata of '{}'", path.display())))?;
        let (uid, gid) = self.owner;
        if (current.uid(), current.gid()) == (uid, gid) {
            return Ok(());
        }
        std::os::unix::fs::chown(path, Some(uid), Some(gid))
            .or_else(|e| tolerate_refused_chown(e, path, (uid, gid)))
    }
}

/// Lacking the privilege to change a file's owner is only worth a warning.
#[cfg(unix)]
fn tolerate_refused_chown(err: io::Error, path: &Path, (uid, gid): (u32, u32)) -> Result<()> {
    if err.kind() == io::ErrorKind::PermissionDenied {
        warn!(
            "Unable to restore owner {uid}:{gid} of {}: {err}",
            path.display()
        );
        Ok(())
    } else {
        Err(Error::io(
            err,
            format!("restoring owner of '{}'", path.display()),
        ))
    }
}
