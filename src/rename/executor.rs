use std::fs;

use tracing::{debug, info, trace};

use crate::config::{CollisionPolicy, Config, DecodeErrorPolicy, OperationMode};
use crate::progress::Progress;
use crate::scanner::DirectoryEntry;

use super::name_builder::replace_first_os;
use super::reencode::reencode_entry;
use super::types::{BatchResult, EntryError, OutcomeStatus, RenameOperation, RenameOutcome};

/// Rename one entry inside its directory. Content is never read or written.
pub fn rename_entry(op: &RenameOperation, collision: CollisionPolicy) -> Result<(), EntryError> {
    if op.source_path == op.destination_path {
        return Ok(());
    }

    if collision == CollisionPolicy::Refuse && op.destination_path.symlink_metadata().is_ok() {
        return Err(EntryError::DestinationExists);
    }

    fs::rename(&op.source_path, &op.destination_path)?;
    Ok(())
}

/// Process every entry in order, reporting each outcome as it happens.
///
/// A failing entry never stops the batch.
pub fn execute_batch(
    entries: &[DirectoryEntry],
    config: &Config,
    progress: &mut Progress,
) -> BatchResult {
    let mut result = BatchResult::new(config.mode);

    for entry in entries {
        let new_name = match replace_first_os(&entry.file_name, &config.match_word, &config.replacement) {
            Some(n) => n,
            None => {
                trace!(name = %entry.name, "No match, skipping");
                result.skipped += 1;
                continue;
            }
        };

        let op = RenameOperation::new(entry.path.clone(), new_name);

        let attempt = match config.mode {
            OperationMode::Rename => rename_entry(&op, config.collision),
            OperationMode::Reencode => reencode_entry(&op, config.collision),
        };

        let status = match attempt {
            Ok(()) => {
                info!("Processed: {} -> {}", op.source_name, op.destination_name);
                OutcomeStatus::Success
            }
            Err(e)
                if e.is_decode_failure() && config.decode_errors == DecodeErrorPolicy::Skip =>
            {
                debug!(name = %op.source_name, error = %e, "Skipping undecodable entry");
                OutcomeStatus::Suppressed(e)
            }
            Err(e) => {
                info!(name = %op.source_name, error = %e, "Entry failed");
                OutcomeStatus::Failed(e)
            }
        };

        let outcome = RenameOutcome {
            operation: op,
            status,
        };
        progress.report(&outcome);
        result.add_outcome(outcome);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_by_extension, JPEG_EXTENSIONS};
    use crate::progress::capture;
    use crate::scanner::scan_directory;
    use image::{Rgb, RgbImage};
    use std::path::Path;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), name).unwrap();
    }

    fn run(config: &Config, jpeg_only: bool) -> (BatchResult, String, String) {
        let mut entries = scan_directory(&config.target_dir).unwrap();
        if jpeg_only {
            entries = filter_by_extension(entries, &JPEG_EXTENSIONS);
        }
        let (mut progress, out, err) = capture();
        let result = execute_batch(&entries, config, &mut progress);
        (result, out.contents(), err.contents())
    }

    #[test]
    fn test_end_to_end_without_filter() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "photo_raw.jpg");
        touch(dir.path(), "photo_raw.png");
        touch(dir.path(), "unrelated.txt");

        let config = Config::new(dir.path(), "_raw", "");
        let (result, out, err) = run(&config, false);

        assert_eq!(result.succeeded_count(), 2);
        assert_eq!(result.skipped, 1);
        assert!(dir.path().join("photo.jpg").exists());
        assert!(dir.path().join("photo.png").exists());
        assert!(dir.path().join("unrelated.txt").exists());
        assert!(!dir.path().join("photo_raw.jpg").exists());

        assert_eq!(
            out,
            "success: photo_raw.jpg -> photo.jpg\nsuccess: photo_raw.png -> photo.png\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_end_to_end_with_jpeg_filter() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "photo_raw.jpg");
        touch(dir.path(), "photo_raw.png");
        touch(dir.path(), "unrelated.txt");

        let config = Config::new(dir.path(), "_raw", "");
        let (result, out, _) = run(&config, true);

        assert_eq!(result.succeeded_count(), 1);
        assert!(dir.path().join("photo.jpg").exists());
        assert!(dir.path().join("photo_raw.png").exists());
        assert!(!out.contains("png"));
    }

    #[test]
    fn test_content_is_untouched() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a_old.bin"), [0u8, 1, 2, 255]).unwrap();

        let config = Config::new(dir.path(), "_old", "_new");
        run(&config, false);

        assert_eq!(fs::read(dir.path().join("a_new.bin")).unwrap(), vec![0u8, 1, 2, 255]);
    }

    #[test]
    fn test_subdirectories_are_renamed() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("album_raw")).unwrap();
        touch(&dir.path().join("album_raw"), "inside_raw.jpg");

        let config = Config::new(dir.path(), "_raw", "");
        let (result, _, _) = run(&config, false);

        assert_eq!(result.succeeded_count(), 1);
        assert!(dir.path().join("album").join("inside_raw.jpg").exists());
    }

    #[test]
    fn test_second_run_affects_nothing() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a_raw.jpg");
        touch(dir.path(), "b_raw.jpg");

        let config = Config::new(dir.path(), "_raw", "");
        let (first, _, _) = run(&config, false);
        let (second, out, err) = run(&config, false);

        assert_eq!(first.succeeded_count(), 2);
        assert!(second.is_empty());
        assert_eq!(second.skipped, 2);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_renames_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"caf\xE9_raw.jpg")), "x").unwrap();

        let config = Config::new(dir.path(), "_raw", "");
        let (result, out, _) = run(&config, true);

        assert_eq!(result.succeeded_count(), 1);
        assert!(dir.path().join(OsStr::from_bytes(b"caf\xE9.jpg")).exists());
        assert!(!dir.path().join(OsStr::from_bytes(b"caf\xE9_raw.jpg")).exists());
        assert!(out.starts_with("success: caf\u{FFFD}_raw.jpg -> caf\u{FFFD}.jpg"));
    }

    #[test]
    fn test_collision_refused_and_batch_continues() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "a_raw.jpg");
        touch(dir.path(), "b_raw.jpg");

        let config = Config::new(dir.path(), "_raw", "");
        let (result, out, err) = run(&config, false);

        assert_eq!(result.failed_count(), 1);
        assert_eq!(result.succeeded_count(), 1);
        assert_eq!(fs::read_to_string(dir.path().join("a.jpg")).unwrap(), "a.jpg");
        assert!(dir.path().join("a_raw.jpg").exists());
        assert!(dir.path().join("b.jpg").exists());

        let expected = format!(
            "failed: {} -> {}, error: destination already exists",
            dir.path().join("a_raw.jpg").display(),
            dir.path().join("a.jpg").display()
        );
        assert!(err.contains(&expected));
        assert_eq!(out, "success: b_raw.jpg -> b.jpg\n");
    }

    #[test]
    fn test_collision_overwrite() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "a_raw.jpg");

        let mut config = Config::new(dir.path(), "_raw", "");
        config.collision = CollisionPolicy::Overwrite;
        let (result, _, _) = run(&config, false);

        assert_eq!(result.succeeded_count(), 1);
        assert_eq!(fs::read_to_string(dir.path().join("a.jpg")).unwrap(), "a_raw.jpg");
    }

    #[test]
    fn test_identical_names_succeed_without_change() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "same_x.jpg");

        let config = Config::new(dir.path(), "_x", "_x");
        let (result, out, _) = run(&config, false);

        assert_eq!(result.succeeded_count(), 1);
        assert_eq!(out, "success: same_x.jpg -> same_x.jpg\n");
    }

    #[test]
    fn test_reencode_reports_decode_failures() {
        let dir = tempdir().unwrap();
        RgbImage::from_pixel(4, 4, Rgb([0, 0, 255]))
            .save_with_format(dir.path().join("good_tag.jpg"), image::ImageFormat::Png)
            .unwrap();
        touch(dir.path(), "bad_tag.jpg");

        let mut config = Config::new(dir.path(), "_tag", "");
        config.mode = OperationMode::Reencode;
        let (result, out, err) = run(&config, true);

        assert_eq!(result.succeeded_count(), 1);
        assert_eq!(result.failed_count(), 1);
        assert!(dir.path().join("good.jpg").exists());
        assert!(dir.path().join("good_tag.jpg").exists());
        assert!(!dir.path().join("bad.jpg").exists());
        assert_eq!(out, "success: good_tag.jpg -> good.jpg\n");
        assert!(err.contains("failed:"));
        assert!(err.contains("failed to decode image"));
    }

    #[test]
    fn test_reencode_can_skip_decode_failures() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "bad_tag.jpg");

        let mut config = Config::new(dir.path(), "_tag", "");
        config.mode = OperationMode::Reencode;
        config.decode_errors = DecodeErrorPolicy::Skip;
        let (result, out, err) = run(&config, true);

        assert_eq!(result.suppressed_count(), 1);
        assert_eq!(result.failed_count(), 0);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }
}
