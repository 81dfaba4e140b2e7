use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use tracing::{debug, trace};

use crate::config::CollisionPolicy;

use super::types::{EntryError, RenameOperation};

/// JPEG quality used for every re-encoded copy
pub const JPEG_QUALITY: u8 = 100;

/// Decode the source as an image and write it as a JPEG to the destination.
///
/// The source file is left in place, so a destination equal to the source
/// is refused whatever the collision policy. The format is detected from the
/// file content, not its name.
pub fn reencode_entry(op: &RenameOperation, collision: CollisionPolicy) -> Result<(), EntryError> {
    if op.source_path == op.destination_path {
        return Err(EntryError::SameAsSource);
    }

    let image = decode_image(&op.source_path)?;

    trace!(
        name = %op.source_name,
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );

    let file = create_destination(&op.destination_path, collision)?;

    if let Err(e) = encode_jpeg(&image, file) {
        debug!(path = ?op.destination_path, "Removing partially written output");
        let _ = fs::remove_file(&op.destination_path);
        return Err(e);
    }

    Ok(())
}

fn decode_image(path: &Path) -> Result<DynamicImage, EntryError> {
    ImageReader::open(path)
        .map_err(EntryError::Read)?
        .with_guessed_format()
        .map_err(EntryError::Read)?
        .decode()
        .map_err(EntryError::Decode)
}

fn create_destination(path: &Path, collision: CollisionPolicy) -> Result<File, EntryError> {
    let mut options = OpenOptions::new();
    options.write(true);

    match collision {
        CollisionPolicy::Refuse => options.create_new(true),
        CollisionPolicy::Overwrite => options.create(true).truncate(true),
    };

    options.open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            EntryError::DestinationExists
        } else {
            EntryError::Io(e)
        }
    })
}

fn encode_jpeg(image: &DynamicImage, file: File) -> Result<(), EntryError> {
    let mut writer = BufWriter::new(file);

    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
        .encode_image(&image.to_rgb8())
        .map_err(EntryError::Encode)?;

    writer.flush()?;
    Ok(())
}
