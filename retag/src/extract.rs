use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use id3v2::frame::FrameContent;
use id3v2::image::sniff_image;
use id3v2::reader::read_mp3;

/// Extract one file's tag: text frames into `<stem>.json`, attached
/// pictures into `<stem>.<ext>` with the extension sniffed from the image
/// bytes. Frames the codec cannot decode are reported and skipped.
pub fn extract_file(mp3_path: &Path, output_folder: &str) -> Result<(), Box<dyn Error>> {
    let mp3 = read_mp3(mp3_path)?;

    let stem = mp3_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| format!("cannot derive an output name from '{}'", mp3_path.display()))?;
    let folder = resolve_output_folder(mp3_path, output_folder);
    fs::create_dir_all(&folder)?;

    let mut info = serde_json::Map::new();
    for frame in &mp3.tag.frames {
        match frame.content() {
            Ok(FrameContent::Text(text)) => {
                info.insert(frame.id.to_string(), serde_json::Value::String(text));
            }
            Ok(FrameContent::Picture(picture)) => {
                let image_path =
                    folder.join(format!("{stem}.{}", sniff_image(&picture.data).extension()));
                fs::write(&image_path, &picture.data)?;
                log::info!("Wrote cover art to {}", image_path.display());
                // The JSON records the image path, ready to feed back into merge.
                info.insert(
                    frame.id.to_string(),
                    serde_json::Value::String(image_path.display().to_string()),
                );
            }
            Err(e) => {
                log::warn!("Skipping {} frame: {}", frame.id, e);
            }
        }
    }

    let json_path = folder.join(format!("{stem}.json"));
    fs::write(
        &json_path,
        serde_json::to_string_pretty(&serde_json::Value::Object(info))?,
    )?;
    log::info!("Wrote tag data to {}", json_path.display());
    Ok(())
}

fn resolve_output_folder(mp3_path: &Path, output_folder: &str) -> PathBuf {
    if output_folder == "SRC-FOLDER" {
        mp3_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        PathBuf::from(output_folder)
    }
}
