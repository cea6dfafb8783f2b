use std::fs;
use std::path::Path;

use clap::Parser;
use id3v2::frame::{Frame, FrameContent};
use id3v2::names;
use id3v2::picture::picture_type;
use id3v2::reader::parse_tag;
use id3v2::tag::Tag;
use id3v2::v1;

#[derive(Parser)]
#[command(name = "id3v2-info", about = "Parse and display ID3v2 tag structure")]
struct Args {
    /// Input .mp3 file
    #[arg(short = 'f', long = "file")]
    file: Option<String>,

    /// Input .mp3 file (positional)
    #[arg(conflicts_with = "file", required_unless_present_any = ["file", "schema", "version"])]
    input: Option<String>,

    /// Filter by frame identifier (e.g. TIT2)
    #[arg(long = "frame")]
    frame_filter: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Print JSON schema for the output format and exit
    #[arg(long)]
    schema: bool,

    /// Display version and quit
    #[arg(long)]
    version: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reset SIGPIPE to default so piped output (e.g. head/tail) exits cleanly
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    let args = Args::parse();

    if args.version {
        print_version();
        return Ok(());
    }

    if args.schema {
        let schema = schemars::schema_for!(id3v2::tag::Tag);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let file = args.file.or(args.input).expect("file argument required");
    let buf = fs::read(Path::new(&file))?;
    let tag = parse_tag(&buf)?;

    if args.json {
        println!("{}", serde_json::to_string(&tag)?);
        return Ok(());
    }

    print_tag(&tag, args.frame_filter.as_deref());

    if let Some(trailer) = v1::parse_trailer(&buf) {
        print_trailer(&trailer);
    }

    Ok(())
}

fn print_tag(tag: &Tag, frame_filter: Option<&str>) {
    println!(
        "ID3v2.{}.{}  flags 0x{:02X}  {} frame(s)  {} tag bytes",
        tag.version,
        tag.revision,
        tag.flags.0,
        tag.frames.len(),
        tag.total_size() as usize + id3v2::tag::TAG_HEADER_LEN,
    );
    println!(
        "{:>4} {:>8} {:>6}  {:<38} {}",
        "ID", "SIZE", "FLAGS", "DESCRIPTION", "CONTENT"
    );

    for frame in &tag.frames {
        if let Some(filter) = frame_filter {
            if frame.id.as_str() != filter {
                continue;
            }
        }

        println!(
            "{:>4} {:>8} {:>6}  {:<38} {}",
            frame.id,
            frame.body_len(),
            format!("0x{:04X}", frame.flags.0),
            names::describe(frame.id).unwrap_or(""),
            content_preview(frame),
        );
    }
}

/// One-line rendering of a frame body for the table view.
fn content_preview(frame: &Frame) -> String {
    match frame.content() {
        Ok(FrameContent::Text(text)) => {
            let mut preview: String = text.chars().take(60).collect();
            if preview.len() < text.len() {
                preview.push('…');
            }
            preview
        }
        Ok(FrameContent::Picture(p)) => format!(
            "<{}, {} bytes, {}>",
            p.mime,
            p.data.len(),
            picture_type::describe(p.picture_type).unwrap_or("unknown type"),
        ),
        Err(e) => format!("<undecodable: {e}>"),
    }
}

fn print_trailer(trailer: &v1::TrailerTag) {
    println!();
    println!("ID3v1 trailer:");
    println!("\tTitle:    {}", trailer.title);
    println!("\tArtist:   {}", trailer.artist);
    println!("\tAlbum:    {}", trailer.album);
    println!("\tYear:     {}", trailer.year);
    println!("\tComment:  {}", trailer.comment);
    println!("\tGenre:    {}", trailer.genre);
}

fn print_version() {
    println!("ID3v2 Info Tool");
    println!();

    let release = env!("RELEASE_VERSION");
    let commit = env!("GIT_COMMIT");
    if !release.is_empty() {
        println!("\tVersion:     {}", release);
    } else {
        println!("\tGit commit:  {}", commit);
    }
}
