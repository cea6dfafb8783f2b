use crate::frame::FrameId;

/// Human-readable English description of an ID3v2.3 frame identifier.
///
/// Loaded once into the binary as read-only data; identifiers outside the
/// v2.3 vocabulary return `None` and are displayed as-is by callers.
pub fn describe(id: FrameId) -> Option<&'static str> {
    let name = match &id.0 {
        b"AENC" => "Audio encryption",
        b"APIC" => "Attached picture",
        b"COMM" => "Comments",
        b"COMR" => "Commercial frame",
        b"ENCR" => "Encryption method registration",
        b"EQUA" => "Equalization",
        b"ETCO" => "Event timing codes",
        b"GEOB" => "General encapsulated object",
        b"GRID" => "Group identification registration",
        b"IPLS" => "Involved people list",
        b"LINK" => "Linked information",
        b"MCDI" => "Music CD identifier",
        b"MLLT" => "MPEG location lookup table",
        b"OWNE" => "Ownership frame",
        b"PRIV" => "Private frame",
        b"PCNT" => "Play counter",
        b"POPM" => "Popularimeter",
        b"POSS" => "Position synchronisation frame",
        b"RBUF" => "Recommended buffer size",
        b"RVAD" => "Relative volume adjustment",
        b"RVRB" => "Reverb",
        b"SYLT" => "Synchronized lyric/text",
        b"SYTC" => "Synchronized tempo codes",
        b"TALB" => "Album/Movie/Show title",
        b"TBPM" => "BPM (beats per minute)",
        b"TCOM" => "Composer",
        b"TCON" => "Content type",
        b"TCOP" => "Copyright message",
        b"TDAT" => "Date",
        b"TDLY" => "Playlist delay",
        b"TENC" => "Encoded by",
        b"TEXT" => "Lyricist/Text writer",
        b"TFLT" => "File type",
        b"TIME" => "Time",
        b"TIT1" => "Content group description",
        b"TIT2" => "Title/songname/content description",
        b"TIT3" => "Subtitle/Description refinement",
        b"TKEY" => "Initial key",
        b"TLAN" => "Language(s)",
        b"TLEN" => "Length",
        b"TMED" => "Media type",
        b"TOAL" => "Original album/movie/show title",
        b"TOFN" => "Original filename",
        b"TOLY" => "Original lyricist(s)/text writer(s)",
        b"TOPE" => "Original artist(s)/performer(s)",
        b"TORY" => "Original release year",
        b"TOWN" => "File owner/licensee",
        b"TPE1" => "Lead performer(s)/Soloist(s)",
        b"TPE2" => "Band/orchestra/accompaniment",
        b"TPE3" => "Conductor/performer refinement",
        b"TPE4" => "Interpreted, remixed, or otherwise modified by",
        b"TPOS" => "Part of a set",
        b"TPUB" => "Publisher",
        b"TRCK" => "Track number/Position in set",
        b"TRDA" => "Recording dates",
        b"TRSN" => "Internet radio station name",
        b"TRSO" => "Internet radio station owner",
        b"TSIZ" => "Size",
        b"TSRC" => "ISRC (international standard recording code)",
        b"TSSE" => "Software/Hardware and settings used for encoding",
        b"TYER" => "Year",
        b"TXXX" => "User defined text information frame",
        b"UFID" => "Unique file identifier",
        b"USER" => "Terms of use",
        b"USLT" => "Unsychronized lyric/text transcription",
        b"WCOM" => "Commercial information",
        b"WCOP" => "Copyright/Legal information",
        b"WOAF" => "Official audio file webpage",
        b"WOAR" => "Official artist/performer webpage",
        b"WOAS" => "Official audio source webpage",
        b"WORS" => "Official internet radio station homepage",
        b"WPAY" => "Payment",
        b"WPUB" => "Publishers official webpage",
        b"WXXX" => "User defined URL link frame",
        _ => return None,
    };
    Some(name)
}
