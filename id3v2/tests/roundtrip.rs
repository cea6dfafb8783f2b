use id3v2::frame::{Frame, FrameContent, FrameFlags, FrameId};
use id3v2::picture::picture_type;
use id3v2::reader::{parse_mp3, parse_tag};
use id3v2::tag::{Tag, TagFlags};
use id3v2::text::TextEncoding;

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

/// A tag exercising every body shape: the three text encodings, an attached
/// picture, an unknown raw frame, an empty body and a duplicate identifier.
fn full_tag() -> Tag {
    Tag {
        version: 3,
        revision: 0,
        flags: TagFlags(0),
        frames: vec![
            Frame::text(FrameId(*b"TIT2"), "Song Title", TextEncoding::Latin1),
            Frame::text(FrameId(*b"TPE1"), "日本語アーティスト", TextEncoding::Utf16),
            Frame::text(FrameId(*b"TALB"), "Ålbum", TextEncoding::Utf8),
            Frame::picture(JPEG_BYTES),
            Frame::with_flags(FrameId(*b"XZZY"), FrameFlags(0x2000), vec![1, 2, 3, 4]),
            Frame::new(FrameId(*b"TCON"), Vec::new()),
            Frame::text(FrameId(*b"TIT2"), "Alternate Title", TextEncoding::Latin1),
        ],
    }
}

#[test]
fn test_tag_round_trips_field_for_field() {
    let tag = full_tag();
    let parsed = parse_tag(&tag.to_bytes()).expect("failed to reparse serialized tag");

    // The empty TCON body comes back as a single NUL, everything else
    // byte-identical in order.
    assert_eq!(parsed.version, tag.version);
    assert_eq!(parsed.revision, tag.revision);
    assert_eq!(parsed.flags, tag.flags);
    assert_eq!(parsed.frames.len(), tag.frames.len());
    for (read, written) in parsed.frames.iter().zip(&tag.frames) {
        assert_eq!(read.id, written.id);
        assert_eq!(read.flags, written.flags);
        if written.body.is_empty() {
            assert_eq!(read.body, vec![0]);
        } else {
            assert_eq!(read.body, written.body);
        }
    }
}

#[test]
fn test_reserialization_is_stable() {
    let first = full_tag().to_bytes();
    let reparsed = parse_tag(&first).expect("failed to reparse");
    assert_eq!(reparsed.to_bytes(), first);
}

#[test]
fn test_decoded_contents() {
    let tag = parse_tag(&full_tag().to_bytes()).expect("failed to reparse");

    match tag.frames[1].content().expect("TPE1 should decode") {
        FrameContent::Text(s) => assert_eq!(s, "日本語アーティスト"),
        other => panic!("expected text content, got {other:?}"),
    }

    match tag.frames[3].content().expect("APIC should decode") {
        FrameContent::Picture(p) => {
            assert_eq!(p.mime, "image/jpeg");
            assert_eq!(p.picture_type, picture_type::FRONT_COVER);
            assert_eq!(p.description, "");
            assert_eq!(p.data, JPEG_BYTES);
        }
        other => panic!("expected picture content, got {other:?}"),
    }
}

#[test]
fn test_mp3_buffer_round_trip() {
    let tag = full_tag();
    let audio: Vec<u8> = (0u16..2048).map(|n| (n % 251) as u8).collect();

    let mut file = tag.to_bytes();
    file.extend_from_slice(&audio);

    let mp3 = parse_mp3(&file).expect("failed to split MP3 buffer");
    assert_eq!(mp3.audio, audio);
    assert_eq!(mp3.tag.total_size(), tag.total_size());

    let mut rebuilt = mp3.tag.to_bytes();
    rebuilt.extend_from_slice(&mp3.audio);
    assert_eq!(rebuilt, file);
}

#[test]
fn test_golden_bytes_single_frame_tag() {
    let tag = Tag {
        frames: vec![Frame::text(FrameId(*b"TRCK"), "7", TextEncoding::Latin1)],
        ..Tag::default()
    };
    assert_eq!(
        tag.to_bytes(),
        [
            0x49, 0x44, 0x33, // "ID3"
            0x03, 0x00, // version 3, revision 0
            0x00, // flags
            0x00, 0x00, 0x00, 0x0C, // synchsafe 12: 2-byte body + 10
            0x54, 0x52, 0x43, 0x4B, // "TRCK"
            0x00, 0x00, 0x00, 0x02, // body size (plain big-endian)
            0x00, 0x00, // frame flags
            0x00, 0x37, // Latin-1 discriminator, "7"
        ]
    );
}

#[test]
fn test_json_projection_of_parsed_tag() {
    let tag = parse_tag(&full_tag().to_bytes()).expect("failed to reparse");
    let json = serde_json::to_value(&tag).expect("failed to serialise tag");

    assert_eq!(json["version"], 3);
    let frames = json["frames"].as_array().expect("frames should be a list");
    assert_eq!(frames.len(), 7);
    assert_eq!(frames[0]["id"], "TIT2");
    assert_eq!(frames[3]["id"], "APIC");
    // Raw bodies serialise as byte arrays.
    assert_eq!(frames[4]["body"], serde_json::json!([1, 2, 3, 4]));
}
