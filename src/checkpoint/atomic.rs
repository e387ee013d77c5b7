//! Write-to-temp-then-rename file replacement

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Replace `path` with `data` so that concurrent readers see either the old
/// or the new contents, never a partial write.
///
/// The temporary name embeds the process id; each pair's file has a single
/// writer, so that is enough to keep temporaries apart.
pub fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name().and_then(|n| n.to_str()).unwrap_or("checkpoint"),
        std::process::id()
    );
    let temp_path = path.with_file_name(temp_name);

    let result = (|| {
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&temp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
