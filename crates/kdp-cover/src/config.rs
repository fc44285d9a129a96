use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-page paper thickness in inches for every paper stock
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThicknessTable {
    pub white_paperback: f64,
    pub cream_paperback: f64,
    pub white_hardcover: f64,
    pub cream_hardcover: f64,
}

impl Default for ThicknessTable {
    fn default() -> Self {
        Self {
            white_paperback: WHITE_PAPERBACK_THICKNESS_IN,
            cream_paperback: CREAM_PAPERBACK_THICKNESS_IN,
            white_hardcover: WHITE_HARDCOVER_THICKNESS_IN,
            cream_hardcover: CREAM_HARDCOVER_THICKNESS_IN,
        }
    }
}

impl ThicknessTable {
    /// Thickness of a single page for the given stock
    pub fn per_page(&self, stock: PaperStock) -> f64 {
        match (stock.color, stock.binding) {
            (PaperColor::White, BindingType::Paperback) => self.white_paperback,
            (PaperColor::Cream, BindingType::Paperback) => self.cream_paperback,
            (PaperColor::White, BindingType::Hardcover) => self.white_hardcover,
            (PaperColor::Cream, BindingType::Hardcover) => self.cream_hardcover,
        }
    }

    fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("white_paperback", self.white_paperback),
            ("cream_paperback", self.cream_paperback),
            ("white_hardcover", self.white_hardcover),
            ("cream_hardcover", self.cream_hardcover),
        ]
    }
}

/// Area reserved for the ISBN barcode in the bottom-right of the back cover
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BarcodeArea {
    pub width: f64,
    pub height: f64,
    /// Distance from the back cover trim and from the spine fold
    pub margin: f64,
}

impl Default for BarcodeArea {
    fn default() -> Self {
        Self {
            width: BARCODE_WIDTH_IN,
            height: BARCODE_HEIGHT_IN,
            margin: BARCODE_MARGIN_IN,
        }
    }
}

/// Inside margin used for books up to `max_pages` pages
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GutterTier {
    pub max_pages: u32,
    pub gutter: f64,
}

/// Interior margin rules
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InteriorMargins {
    /// Ascending by `max_pages`; the last tier is the page count ceiling
    pub gutter_tiers: Vec<GutterTier>,
    pub outside: f64,
    pub outside_with_bleed: f64,
}

impl Default for InteriorMargins {
    fn default() -> Self {
        Self {
            gutter_tiers: INTERIOR_GUTTER_TIERS
                .iter()
                .map(|&(max_pages, gutter)| GutterTier { max_pages, gutter })
                .collect(),
            outside: INTERIOR_OUTSIDE_MARGIN_IN,
            outside_with_bleed: INTERIOR_OUTSIDE_MARGIN_BLEED_IN,
        }
    }
}

impl InteriorMargins {
    /// Gutter for a page count, or None above the last tier
    pub fn gutter_for(&self, page_count: u32) -> Option<f64> {
        self.gutter_tiers
            .iter()
            .find(|tier| page_count <= tier.max_pages)
            .map(|tier| tier.gutter)
    }

    /// Largest page count covered by the tiers
    pub fn max_pages(&self) -> u32 {
        self.gutter_tiers.last().map_or(0, |tier| tier.max_pages)
    }
}

/// Print vendor configuration injected into the calculators
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoverConfig {
    pub bleed: f64,
    pub cover_safe_margin: f64,
    pub spine_safe_margin: f64,
    pub min_spine_width: f64,
    pub thickness: ThicknessTable,
    pub barcode: BarcodeArea,
    /// Spine text is suppressed at or below this page count
    pub min_spine_text_pages: u32,
    pub interior: InteriorMargins,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            bleed: BLEED_IN,
            cover_safe_margin: COVER_SAFE_MARGIN_IN,
            spine_safe_margin: SPINE_SAFE_MARGIN_IN,
            min_spine_width: MIN_SPINE_WIDTH_IN,
            thickness: ThicknessTable::default(),
            barcode: BarcodeArea::default(),
            min_spine_text_pages: MIN_SPINE_TEXT_PAGES,
            interior: InteriorMargins::default(),
        }
    }
}

impl CoverConfig {
    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config: CoverConfig = serde_json::from_slice(&bytes)
            .map_err(|e| CoverError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CoverError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("bleed", self.bleed),
            ("cover_safe_margin", self.cover_safe_margin),
            ("spine_safe_margin", self.spine_safe_margin),
            ("min_spine_width", self.min_spine_width),
            ("barcode.width", self.barcode.width),
            ("barcode.height", self.barcode.height),
            ("barcode.margin", self.barcode.margin),
            ("interior.outside", self.interior.outside),
            ("interior.outside_with_bleed", self.interior.outside_with_bleed),
        ];
        for (name, value) in lengths {
            check_length(name, value)?;
        }

        for (name, value) in self.thickness.entries() {
            check_length(name, value)?;
            if value == 0.0 {
                return Err(CoverError::Config(format!(
                    "Paper thickness {} must be positive",
                    name
                )));
            }
        }

        let tiers = &self.interior.gutter_tiers;
        if tiers.is_empty() {
            return Err(CoverError::Config(
                "At least one interior gutter tier is required".to_string(),
            ));
        }
        for tier in tiers {
            check_length("interior.gutter", tier.gutter)?;
        }
        if tiers.windows(2).any(|w| w[0].max_pages >= w[1].max_pages) {
            return Err(CoverError::Config(
                "Interior gutter tiers must be sorted by ascending max_pages".to_string(),
            ));
        }

        Ok(())
    }
}

fn check_length(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoverError::Config(format!(
            "{} must be a finite, non-negative length (got {})",
            name, value
        )));
    }
    Ok(())
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // Trim sizes travel as their catalog names ("6x9")
    impl Serialize for TrimSize {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for TrimSize {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(|_| {
                serde::de::Error::unknown_variant(
                    &s,
                    &[
                        "5x8",
                        "5.25x8",
                        "5.5x8.5",
                        "6x9",
                        "6.14x9.21",
                        "7x10",
                        "8x10",
                        "8.25x11",
                        "8.5x11",
                    ],
                )
            })
        }
    }
}
