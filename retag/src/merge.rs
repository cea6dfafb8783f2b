use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use id3v2::error::TagError;
use id3v2::frame::{Frame, FrameId};
use id3v2::reader::read_mp3;
use id3v2::tag::Tag;
use id3v2::text::TextEncoding;

/// Build a retagged copy of `mp3_path` from a JSON map of frame identifier
/// to value.
///
/// A fresh tag is always assembled — only the header fields of the source
/// tag are carried over, never its frames. The `"APIC"` key names an image
/// file to embed; every other key becomes a UTF-16 text frame. Audio bytes
/// pass through verbatim.
pub fn merge_file(
    mp3_path: &Path,
    info_path: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let (mut tag, audio) = match read_mp3(mp3_path) {
        Ok(mp3) => (
            Tag {
                version: mp3.tag.version,
                revision: mp3.tag.revision,
                flags: mp3.tag.flags,
                frames: Vec::new(),
            },
            mp3.audio,
        ),
        Err(TagError::BadMagic { .. }) => {
            log::warn!(
                "{} has no ID3v2 tag; writing a fresh ID3v2.3 tag",
                mp3_path.display()
            );
            (Tag::default(), fs::read(mp3_path)?)
        }
        Err(e) => return Err(e.into()),
    };

    let info: BTreeMap<String, String> = serde_json::from_str(&fs::read_to_string(info_path)?)?;

    for (key, value) in &info {
        if key == "APIC" {
            match fs::read(value) {
                Ok(image) => tag.frames.push(Frame::picture(&image)),
                Err(e) => log::warn!("Unable to read image '{}': {}", value, e),
            }
            continue;
        }

        let Some(id) = FrameId::parse(key) else {
            log::warn!("Skipping '{}': not a 4-character ASCII frame identifier", key);
            continue;
        };
        tag.frames.push(Frame::text(id, value, TextEncoding::Utf16));
    }

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(mp3_path),
    };

    let mut bytes = tag.to_bytes();
    bytes.extend_from_slice(&audio);
    fs::write(&output_path, bytes)?;
    log::info!(
        "Wrote {} frame(s) to {}",
        tag.frames.len(),
        output_path.display()
    );
    Ok(())
}

/// Derive a default output path: `[merged] <name>` beside the input.
fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("[merged] {name}"))
}
