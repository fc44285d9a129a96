use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Degenerate {panel} geometry: {width:.4} x {height:.4} in")]
    DegenerateGeometry { panel: Panel, width: f64, height: f64 },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CoverError>;

/// A panel of the printed cover sheet, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Back,
    Spine,
    Front,
    /// Interior page live area
    Interior,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Panel::Back => "back",
            Panel::Spine => "spine",
            Panel::Front => "front",
            Panel::Interior => "interior",
        })
    }
}

/// Standard trim sizes (width × height in inches)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrimSize {
    In5x8,
    In5_25x8,
    In5_5x8_5,
    In6x9,
    In6_14x9_21,
    In7x10,
    In8x10,
    In8_25x11,
    In8_5x11,
}

impl TrimSize {
    pub const ALL: [TrimSize; 9] = [
        TrimSize::In5x8,
        TrimSize::In5_25x8,
        TrimSize::In5_5x8_5,
        TrimSize::In6x9,
        TrimSize::In6_14x9_21,
        TrimSize::In7x10,
        TrimSize::In8x10,
        TrimSize::In8_25x11,
        TrimSize::In8_5x11,
    ];

    /// Get dimensions as (width, height) in inches
    pub fn dimensions_in(self) -> (f64, f64) {
        match self {
            TrimSize::In5x8 => (5.0, 8.0),
            TrimSize::In5_25x8 => (5.25, 8.0),
            TrimSize::In5_5x8_5 => (5.5, 8.5),
            TrimSize::In6x9 => (6.0, 9.0),
            TrimSize::In6_14x9_21 => (6.14, 9.21),
            TrimSize::In7x10 => (7.0, 10.0),
            TrimSize::In8x10 => (8.0, 10.0),
            TrimSize::In8_25x11 => (8.25, 11.0),
            TrimSize::In8_5x11 => (8.5, 11.0),
        }
    }

    pub fn width_in(self) -> f64 {
        self.dimensions_in().0
    }

    pub fn height_in(self) -> f64 {
        self.dimensions_in().1
    }

    /// Catalog name, e.g. "6x9" or "8.5x11"
    pub fn name(self) -> &'static str {
        match self {
            TrimSize::In5x8 => "5x8",
            TrimSize::In5_25x8 => "5.25x8",
            TrimSize::In5_5x8_5 => "5.5x8.5",
            TrimSize::In6x9 => "6x9",
            TrimSize::In6_14x9_21 => "6.14x9.21",
            TrimSize::In7x10 => "7x10",
            TrimSize::In8x10 => "8x10",
            TrimSize::In8_25x11 => "8.25x11",
            TrimSize::In8_5x11 => "8.5x11",
        }
    }
}

impl fmt::Display for TrimSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrimSize {
    type Err = CoverError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_ascii_lowercase().replace(' ', "").replace('×', "x");
        TrimSize::ALL
            .into_iter()
            .find(|size| size.name() == normalized)
            .ok_or_else(|| {
                CoverError::InvalidArgument(format!("Unknown trim size '{}'", s))
            })
    }
}

/// Paper color class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PaperColor {
    White,
    Cream,
}

impl PaperColor {
    pub const ALL: [PaperColor; 2] = [PaperColor::White, PaperColor::Cream];

    pub fn name(self) -> &'static str {
        match self {
            PaperColor::White => "white",
            PaperColor::Cream => "cream",
        }
    }
}

impl fmt::Display for PaperColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperColor {
    type Err = CoverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" => Ok(PaperColor::White),
            "cream" => Ok(PaperColor::Cream),
            _ => Err(CoverError::InvalidArgument(format!(
                "Unknown paper type '{}' (expected white or cream)",
                s
            ))),
        }
    }
}

/// Binding class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BindingType {
    /// Perfect-bound softcover
    Paperback,
    /// Case-laminate hardcover
    Hardcover,
}

impl BindingType {
    pub fn name(self) -> &'static str {
        match self {
            BindingType::Paperback => "paperback",
            BindingType::Hardcover => "hardcover",
        }
    }
}

impl fmt::Display for BindingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BindingType {
    type Err = CoverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paperback" => Ok(BindingType::Paperback),
            "hardcover" => Ok(BindingType::Hardcover),
            _ => Err(CoverError::InvalidArgument(format!(
                "Unknown binding type '{}' (expected paperback or hardcover)",
                s
            ))),
        }
    }
}

/// Paper color combined with binding; selects a per-page thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaperStock {
    pub color: PaperColor,
    pub binding: BindingType,
}

impl PaperStock {
    pub fn new(color: PaperColor, binding: BindingType) -> Self {
        Self { color, binding }
    }
}

/// Input to the cover pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverSpec {
    pub page_count: u32,
    pub trim_size: TrimSize,
    pub paper_stock: PaperStock,
}

/// A rectangle in inches, origin at the bottom-left of the full cover sheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (bottom edge)
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Shrink by independent amounts on each edge
    pub fn inset(&self, left: f64, bottom: f64, right: f64, top: f64) -> Rect {
        Rect::new(
            self.x + left,
            self.y + bottom,
            self.width - left - right,
            self.height - bottom - top,
        )
    }

    /// Shrink by the same amount on every edge
    pub fn inset_uniform(&self, margin: f64) -> Rect {
        self.inset(margin, margin, margin, margin)
    }

    /// Whether both dimensions are positive
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Whether `other` lies strictly inside this rectangle
    pub fn strictly_contains(&self, other: &Rect) -> bool {
        other.x > self.x
            && other.y > self.y
            && other.right() < self.right()
            && other.top() < self.top()
    }
}

/// Bleed-inclusive geometry of the full cover sheet (back, spine, front)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverGeometry {
    pub spine_width: f64,
    pub total_width: f64,
    pub total_height: f64,
    pub front_width: f64,
    pub back_width: f64,
    /// Trim height of every panel
    pub height: f64,
    pub bleed: f64,
    pub front_start_x: f64,
    pub spine_start_x: f64,
    pub back_start_x: f64,
}

impl CoverGeometry {
    /// Trim rectangle of the back cover
    pub fn back_panel(&self) -> Rect {
        Rect::new(self.back_start_x, self.bleed, self.back_width, self.height)
    }

    /// Trim rectangle of the spine
    pub fn spine_panel(&self) -> Rect {
        Rect::new(self.spine_start_x, self.bleed, self.spine_width, self.height)
    }

    /// Trim rectangle of the front cover
    pub fn front_panel(&self) -> Rect {
        Rect::new(self.front_start_x, self.bleed, self.front_width, self.height)
    }

    /// Trim rectangle of the whole sheet (everything inside the bleed)
    pub fn trim_rect(&self) -> Rect {
        Rect::new(
            self.bleed,
            self.bleed,
            self.total_width - 2.0 * self.bleed,
            self.height,
        )
    }

    pub fn panel(&self, panel: Panel) -> Option<Rect> {
        match panel {
            Panel::Back => Some(self.back_panel()),
            Panel::Spine => Some(self.spine_panel()),
            Panel::Front => Some(self.front_panel()),
            Panel::Interior => None,
        }
    }
}

/// Text-safe rectangles for each cover panel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafeZones {
    pub front: Rect,
    pub spine: Rect,
    pub back: Rect,
    /// Area reserved for the ISBN barcode on the back cover
    pub barcode: Rect,
}

/// Complete cover layout for one book
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverLayout {
    pub spec: CoverSpec,
    pub geometry: CoverGeometry,
    pub front_safe: Rect,
    pub back_safe: Rect,
    /// None when the spine is too thin for text
    pub spine_safe: Option<Rect>,
    pub barcode: Rect,
}

/// One row of the spine width reference chart
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpineChartRow {
    pub page_count: u32,
    pub white: f64,
    pub cream: f64,
}

/// Interior page size and margins
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteriorGeometry {
    /// Page width including bleed on the outside edge
    pub page_width: f64,
    /// Page height including bleed top and bottom
    pub page_height: f64,
    /// Bleed applied (0 when the interior does not bleed)
    pub bleed: f64,
    /// Inside margin next to the binding
    pub gutter: f64,
    /// Fore-edge margin
    pub outside: f64,
    pub top: f64,
    pub bottom: f64,
    /// Live area of a right-hand page (gutter on the left)
    pub recto_live: Rect,
    /// Live area of a left-hand page (gutter on the right)
    pub verso_live: Rect,
}
