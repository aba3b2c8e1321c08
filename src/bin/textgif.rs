use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(
    name = "textgif",
    version,
    about = "Render a line of text as a looping, extruded, hue-cycling GIF"
)]
struct Cli {
    /// Text to render (single line).
    #[arg(default_value = textgif::DEFAULT_TEXT)]
    text: String,

    /// Output GIF path. An existing file is replaced.
    #[arg(short, long, default_value = textgif::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of frames (>= 2). Values that are not non-negative integers are ignored.
    #[arg(short, long, value_name = "INT", allow_hyphen_values = true)]
    frames: Vec<String>,

    /// Extrusion depth in pixels. Values that are not non-negative integers are ignored.
    #[arg(short, long, value_name = "INT", allow_hyphen_values = true)]
    depth: Vec<String>,

    /// Print the resolved font (family, face index, SHA-256 of the font bytes).
    #[arg(long)]
    dump_font: bool,

    /// Print every frame's animation parameters as JSON lines on stdout.
    #[arg(long)]
    dump_params: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> textgif::AnimationConfig {
        textgif::AnimationConfig {
            text: self.text.clone(),
            output_path: self.output.clone(),
            frame_count: last_valid_u32(&self.frames, textgif::DEFAULT_FRAME_COUNT),
            depth: last_valid_u32(&self.depth, textgif::DEFAULT_DEPTH),
        }
    }
}

/// Rewrite raw arguments into a form clap parses without failing.
///
/// The first argument is always the text, even when it looks like a flag.
/// Flag names match case-insensitively; a value flag with no value after it
/// and any unrecognized argument are dropped and returned separately.
fn normalize_args(raw: impl IntoIterator<Item = String>) -> (Vec<String>, Vec<String>) {
    let mut raw = raw.into_iter();
    let mut out: Vec<String> = raw.next().into_iter().collect();
    let mut ignored = Vec::new();

    let text = raw.next();
    let mut rest = raw.peekable();
    while let Some(arg) = rest.next() {
        let flag = arg.to_lowercase();
        let long = match flag.as_str() {
            "-o" | "--output" => Some("--output"),
            "-f" | "--frames" => Some("--frames"),
            "-d" | "--depth" => Some("--depth"),
            _ => None,
        };
        match long {
            Some(long) => match rest.next() {
                Some(value) => out.push(format!("{long}={value}")),
                None => ignored.push(arg),
            },
            None if is_switch(&flag) => out.push(flag),
            None => ignored.push(arg),
        }
    }

    if let Some(text) = text {
        out.push("--".to_string());
        out.push(text);
    }
    (out, ignored)
}

fn is_switch(flag: &str) -> bool {
    matches!(
        flag,
        "--dump-font" | "--dump-params" | "--verbose" | "-h" | "--help" | "-v" | "--version"
    ) || (flag.len() > 2 && flag.starts_with('-') && flag[1..].bytes().all(|b| b == b'v'))
}

/// Fold repeated occurrences: a well-formed value replaces the previous one,
/// a malformed value leaves it in place.
fn last_valid_u32(raw: &[String], default: u32) -> u32 {
    raw.iter()
        .fold(default, |prev, v| v.trim().parse::<u32>().unwrap_or(prev))
}

fn main() -> anyhow::Result<()> {
    let (args, ignored) = normalize_args(std::env::args());
    let cli = Cli::parse_from(args);
    init_tracing(cli.verbose);
    for arg in &ignored {
        tracing::warn!(%arg, "ignoring unrecognized argument");
    }

    let config = cli.config();
    config.validate()?;

    eprintln!("Generating GIF...");
    eprintln!(" Text:     {}", config.text);
    eprintln!(" Output:   {}", config.output_path.display());
    eprintln!(" Frames:   {}", config.frame_count);
    eprintln!(" Depth:    {}", config.depth);

    let font = textgif::FontResolver::new()
        .resolve()
        .context("resolve bold sans-serif font")?;

    if cli.dump_font {
        dump_font_diagnostics(&font);
    }

    if cli.dump_params {
        for params in textgif::frame_schedule(config.frame_count)? {
            println!(
                "{}",
                serde_json::to_string(&params).context("serialize frame params")?
            );
        }
    }

    let summary =
        textgif::generate_gif_with_font(&config, &font, textgif::GifOptions::default())
            .with_context(|| format!("generate '{}'", config.output_path.display()))?;

    eprintln!(
        "wrote {} ({}x{}, {} frames, {} bytes)",
        summary.output_path.display(),
        summary.canvas.width,
        summary.canvas.height,
        summary.frames,
        summary.bytes
    );
    eprintln!("Done!");
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dump_font_diagnostics(font: &textgif::ResolvedFont) {
    eprintln!("font diagnostics:");
    eprintln!("  family:      {}", font.family);
    eprintln!("  weight:      {}", font.weight);
    eprintln!("  face_index:  {}", font.index);
    eprintln!("  sha256:      {}", sha256_hex(&font.bytes));
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
