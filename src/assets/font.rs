use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use usvg::fontdb;

use crate::foundation::error::{TextGifError, TextGifResult};

/// Environment variable naming an extra directory of font files searched before system fonts.
pub const FONT_DIR_ENV: &str = "TEXTGIF_FONT_DIR";

/// Bold sans-serif families tried in order before the generic sans-serif family.
pub const PREFERRED_FAMILIES: &[&str] = &[
    "Arial",
    "Helvetica",
    "Liberation Sans",
    "DejaVu Sans",
    "Noto Sans",
];

#[derive(Clone)]
/// A resolved font face: raw file bytes plus the face index inside them.
pub struct ResolvedFont {
    /// Raw font file bytes (may hold a collection).
    pub bytes: Arc<Vec<u8>>,
    /// Face index within `bytes`.
    pub index: u32,
    /// Primary family name reported by the font.
    pub family: String,
    /// CSS-style weight of the selected face.
    pub weight: u16,
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .field("family", &self.family)
            .field("weight", &self.weight)
            .finish()
    }
}

struct FontSource {
    label: String,
    db: fontdb::Database,
    /// Accept any face when no preferred family matches.
    any_face_fallback: bool,
}

/// Looks up the single bold sans-serif face used for every frame.
pub struct FontResolver {
    sources: Vec<FontSource>,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FontResolver {
    /// `TEXTGIF_FONT_DIR` (when set) followed by the system font collection.
    pub fn new() -> Self {
        let mut resolver = Self {
            sources: Vec::new(),
        };
        if let Some(dir) = std::env::var_os(FONT_DIR_ENV).filter(|v| !v.is_empty()) {
            resolver.push_dir(&PathBuf::from(dir));
        }
        resolver.push_system();
        resolver
    }

    /// Only fonts found under `dir`.
    pub fn from_dir(dir: &Path) -> Self {
        let mut resolver = Self {
            sources: Vec::new(),
        };
        resolver.push_dir(dir);
        resolver
    }

    fn push_dir(&mut self, dir: &Path) {
        let mut db = fontdb::Database::new();
        db.load_fonts_dir(dir);
        tracing::debug!(dir = %dir.display(), faces = db.len(), "loaded font directory");
        self.sources.push(FontSource {
            label: format!("font dir '{}'", dir.display()),
            db,
            any_face_fallback: true,
        });
    }

    fn push_system(&mut self) {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        self.sources.push(FontSource {
            label: "system fonts".to_string(),
            db,
            any_face_fallback: false,
        });
    }

    /// Total number of faces across all sources.
    pub fn face_count(&self) -> usize {
        self.sources.iter().map(|s| s.db.len()).sum()
    }

    pub fn resolve(&self) -> TextGifResult<ResolvedFont> {
        let mut families: Vec<fontdb::Family<'_>> = PREFERRED_FAMILIES
            .iter()
            .map(|&name| fontdb::Family::Name(name))
            .collect();
        families.push(fontdb::Family::SansSerif);

        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight::BOLD,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };

        for source in &self.sources {
            let id = source.db.query(&query).or_else(|| {
                if source.any_face_fallback {
                    pick_boldest(&source.db)
                } else {
                    None
                }
            });
            let Some(id) = id else {
                tracing::debug!(source = %source.label, "no bold sans-serif face");
                continue;
            };
            return load_face(&source.db, id, &source.label);
        }

        Err(TextGifError::font_resolution(format!(
            "no bold sans-serif font found (tried {}, searched {} faces)",
            PREFERRED_FAMILIES.join(", "),
            self.face_count()
        )))
    }
}

fn pick_boldest(db: &fontdb::Database) -> Option<fontdb::ID> {
    db.faces()
        .filter(|f| f.style == fontdb::Style::Normal)
        .min_by_key(|f| f.weight.0.abs_diff(fontdb::Weight::BOLD.0))
        .map(|f| f.id)
}

fn load_face(db: &fontdb::Database, id: fontdb::ID, label: &str) -> TextGifResult<ResolvedFont> {
    let info = db
        .face(id)
        .ok_or_else(|| TextGifError::font_resolution(format!("face vanished from {label}")))?;
    let family = info
        .families
        .first()
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| info.post_script_name.clone());
    let weight = info.weight.0;

    let (bytes, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| {
            TextGifError::font_resolution(format!("failed to read font data for '{family}'"))
        })?;

    tracing::info!(%family, weight, index, source = %label, "resolved font");
    Ok(ResolvedFont {
        bytes: Arc::new(bytes),
        index,
        family,
        weight,
    })
}
