//! Shared constants for cover and interior geometry
//!
//! All lengths are in inches unless the name says otherwise. These are the
//! KDP reference numbers; `CoverConfig::default()` is built from them.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch (PDF user space)
pub const POINTS_PER_INCH: f64 = 72.0;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Convert inches to points
#[inline]
pub fn in_to_pt(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

/// Convert points to inches
#[inline]
pub fn pt_to_in(pt: f64) -> f64 {
    pt / POINTS_PER_INCH
}

/// Convert inches to millimeters
#[inline]
pub fn in_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

// =============================================================================
// Cover
// =============================================================================

/// Bleed printed beyond the trim line on every outer edge
pub const BLEED_IN: f64 = 0.125;

/// Safe margin inside the front and back cover trim
pub const COVER_SAFE_MARGIN_IN: f64 = 0.25;

/// Safe margin inside the spine panel
pub const SPINE_SAFE_MARGIN_IN: f64 = 0.0625;

/// Minimum printable spine width
pub const MIN_SPINE_WIDTH_IN: f64 = 0.06;

/// Spine text needs more pages than this
pub const MIN_SPINE_TEXT_PAGES: u32 = 79;

// =============================================================================
// Paper Thickness (inches per page)
// =============================================================================

pub const WHITE_PAPERBACK_THICKNESS_IN: f64 = 0.002252;
pub const CREAM_PAPERBACK_THICKNESS_IN: f64 = 0.0025;
pub const WHITE_HARDCOVER_THICKNESS_IN: f64 = 0.0025;
pub const CREAM_HARDCOVER_THICKNESS_IN: f64 = 0.00275;

// =============================================================================
// Barcode
// =============================================================================

/// Width of the area reserved for the ISBN barcode on the back cover
pub const BARCODE_WIDTH_IN: f64 = 2.0;

/// Height of the area reserved for the ISBN barcode
pub const BARCODE_HEIGHT_IN: f64 = 1.2;

/// Distance of the barcode area from the back cover trim and the spine fold
pub const BARCODE_MARGIN_IN: f64 = 0.25;

// =============================================================================
// Interior
// =============================================================================

/// Outside (top, bottom, fore-edge) margin without bleed
pub const INTERIOR_OUTSIDE_MARGIN_IN: f64 = 0.25;

/// Outside margin when the interior bleeds
pub const INTERIOR_OUTSIDE_MARGIN_BLEED_IN: f64 = 0.375;

/// Gutter tiers as (maximum page count, inside margin)
pub const INTERIOR_GUTTER_TIERS: [(u32, f64); 5] = [
    (150, 0.375),
    (300, 0.5),
    (500, 0.625),
    (700, 0.75),
    (828, 0.875),
];

// =============================================================================
// Text
// =============================================================================

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f64 = 0.5;

/// Step used when searching for the largest font size that fits
pub const FONT_SIZE_STEP_PT: f64 = 0.5;

// =============================================================================
// Template Guides
// =============================================================================

/// Line width for trim and safe-zone guides (points)
pub const GUIDE_LINE_WIDTH: f64 = 0.5;

/// Line width for spine fold lines (points)
pub const FOLD_LINE_WIDTH: f64 = 0.5;
