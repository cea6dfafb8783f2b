/// Image format classification by magic-byte prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Unknown,
}

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8];
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E];

/// Classify raw image bytes by their leading magic bytes.
pub fn sniff_image(data: &[u8]) -> ImageKind {
    if data.starts_with(JPEG_MAGIC) {
        ImageKind::Jpeg
    } else if data.starts_with(PNG_MAGIC) {
        ImageKind::Png
    } else {
        ImageKind::Unknown
    }
}

impl ImageKind {
    /// MIME type for an `APIC` frame. Unrecognised data is labelled JPEG,
    /// matching every tag writer observed; callers that would rather reject
    /// such data can match on [`ImageKind::Unknown`] before encoding.
    pub fn mime(self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg | ImageKind::Unknown => "image/jpeg",
        }
    }

    /// File extension used when extracting embedded cover art.
    pub fn extension(self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg | ImageKind::Unknown => "jpeg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff() {
        assert_eq!(sniff_image(&[0xFF, 0xD8, 0xFF, 0xE0]), ImageKind::Jpeg);
        assert_eq!(sniff_image(&[0x89, 0x50, 0x4E, 0x47]), ImageKind::Png);
        assert_eq!(sniff_image(&[0x47, 0x49, 0x46]), ImageKind::Unknown);
        assert_eq!(sniff_image(&[0xFF]), ImageKind::Unknown);
        assert_eq!(sniff_image(&[]), ImageKind::Unknown);
    }

    #[test]
    fn test_unknown_maps_to_jpeg() {
        assert_eq!(ImageKind::Unknown.mime(), "image/jpeg");
        assert_eq!(ImageKind::Unknown.extension(), "jpeg");
    }
}
