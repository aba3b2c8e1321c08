#![allow(dead_code)]

use std::time::Duration;

use image::AnimationDecoder as _;

/// System bold sans-serif font, or `None` (with a note on stderr) when the
/// machine has no usable fonts.
pub fn font_or_skip() -> Option<textgif::ResolvedFont> {
    match textgif::FontResolver::new().resolve() {
        Ok(font) => Some(font),
        Err(e) => {
            eprintln!("skipping: {e}");
            None
        }
    }
}

pub struct DecodedGif {
    pub frames: Vec<image::Frame>,
    pub loop_count: Option<u16>,
}

impl DecodedGif {
    pub fn delays(&self) -> Vec<Duration> {
        self.frames.iter().map(|f| Duration::from(f.delay())).collect()
    }
}

pub fn decode_gif(bytes: &[u8]) -> DecodedGif {
    let decoder =
        image::codecs::gif::GifDecoder::new(std::io::Cursor::new(bytes.to_vec())).unwrap();
    let frames = decoder.into_frames().collect_frames().unwrap();
    DecodedGif {
        frames,
        loop_count: netscape_loop_count(bytes),
    }
}

/// Loop count stored in the NETSCAPE2.0 application extension, if present.
pub fn netscape_loop_count(bytes: &[u8]) -> Option<u16> {
    let tag = b"NETSCAPE2.0";
    let at = bytes.windows(tag.len()).position(|w| w == tag)?;
    let sub = bytes.get(at + tag.len()..at + tag.len() + 4)?;
    (sub[0] == 3 && sub[1] == 1).then(|| u16::from_le_bytes([sub[2], sub[3]]))
}
