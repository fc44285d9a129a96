//! Single-line text fitting
//!
//! Estimates text width from an average glyph width, which is close enough
//! for choosing a font size. Callers still render and measure real glyphs.

use crate::constants::{FONT_SIZE_STEP_PT, HELVETICA_CHAR_WIDTH_RATIO, in_to_pt, pt_to_in};
use crate::types::Rect;

/// Reading direction of a line of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrientation {
    /// Runs left to right
    Horizontal,
    /// Rotated 90°, runs along the spine
    Vertical,
}

/// Result of fitting text into a zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFit {
    pub font_size_pt: f64,
    /// Rectangle occupied by the text, centered in the zone (inches)
    pub bounds: Rect,
    /// Rotation to apply when drawing (0.0 or 90.0)
    pub rotation_degrees: f64,
}

/// Estimated advance width of `text` in points
pub fn estimate_text_width_pt(text: &str, font_size_pt: f64) -> f64 {
    text.chars().count() as f64 * font_size_pt * HELVETICA_CHAR_WIDTH_RATIO
}

/// Find the largest font size at which `text` fits in `zone`.
///
/// Candidate sizes lie on the half-point grid between `min_font_pt` and
/// `max_font_pt`. Returns `None` for empty text, non-finite inputs, or when
/// nothing fits.
pub fn fit_text(
    zone: &Rect,
    text: &str,
    orientation: TextOrientation,
    max_font_pt: f64,
    min_font_pt: f64,
) -> Option<TextFit> {
    let finite = [zone.x, zone.y, zone.width, zone.height, max_font_pt, min_font_pt]
        .iter()
        .all(|v| v.is_finite());
    if !finite || text.trim().is_empty() || !zone.is_positive() || min_font_pt <= 0.0 {
        return None;
    }

    // Length runs along the text, thickness across it
    let (length_pt, thickness_pt) = match orientation {
        TextOrientation::Horizontal => (in_to_pt(zone.width), in_to_pt(zone.height)),
        TextOrientation::Vertical => (in_to_pt(zone.height), in_to_pt(zone.width)),
    };

    // Nothing above this can fit, so start the search there
    let length_limit = length_pt / estimate_text_width_pt(text, 1.0);
    let largest = max_font_pt.min(thickness_pt).min(length_limit);
    if largest < min_font_pt {
        return None;
    }

    let lowest_step = (min_font_pt / FONT_SIZE_STEP_PT).ceil() as u64;
    let mut step = (largest / FONT_SIZE_STEP_PT).floor() as u64;
    while step >= lowest_step && step > 0 {
        let size = step as f64 * FONT_SIZE_STEP_PT;
        let text_length = estimate_text_width_pt(text, size);
        if text_length <= length_pt && size <= thickness_pt {
            let (width, height, rotation_degrees) = match orientation {
                TextOrientation::Horizontal => (text_length, size, 0.0),
                TextOrientation::Vertical => (size, text_length, 90.0),
            };
            let width = pt_to_in(width);
            let height = pt_to_in(height);
            return Some(TextFit {
                font_size_pt: size,
                bounds: Rect::new(
                    zone.center_x() - width / 2.0,
                    zone.center_y() - height / 2.0,
                    width,
                    height,
                ),
                rotation_degrees,
            });
        }
        step -= 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_width() {
        assert_eq!(estimate_text_width_pt("abcd", 10.0), 20.0);
        assert_eq!(estimate_text_width_pt("", 10.0), 0.0);
    }

    #[test]
    fn test_vertical_swaps_axes() {
        // 0.25 in thick, 8 in long
        let zone = Rect::new(6.0, 0.5, 0.25, 8.0);
        let fit = fit_text(&zone, "TITLE", TextOrientation::Vertical, 24.0, 6.0).unwrap();
        assert_eq!(fit.font_size_pt, 18.0);
        assert_eq!(fit.rotation_degrees, 90.0);
        assert!((fit.bounds.center_x() - zone.center_x()).abs() < 1e-9);
    }
}
