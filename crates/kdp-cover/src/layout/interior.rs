//! Interior page geometry
//!
//! Margins are measured from the page edge. With bleed the page grows by one
//! bleed on the outside edge and on the top and bottom; the spine edge never
//! bleeds.

use crate::config::CoverConfig;
use crate::types::*;

use super::cover::{SpineCalculator, validate_zone};

/// Calculate interior page size and live areas.
///
/// # Arguments
/// * `config` - Vendor configuration (bleed and margin rules)
/// * `page_count` - Number of interior pages
/// * `trim_size` - Trim size of the book
/// * `bleed` - Whether interior artwork bleeds off the page
pub fn calculate_interior(
    config: &CoverConfig,
    page_count: u32,
    trim_size: TrimSize,
    bleed: bool,
) -> Result<InteriorGeometry> {
    if page_count == 0 {
        return Err(CoverError::InvalidArgument(
            "Page count must be a positive integer".to_string(),
        ));
    }

    let gutter = config.interior.gutter_for(page_count).ok_or_else(|| {
        CoverError::InvalidArgument(format!(
            "Page count {} exceeds the maximum of {}",
            page_count,
            config.interior.max_pages()
        ))
    })?;

    let (trim_width, trim_height) = trim_size.dimensions_in();
    let (bleed, outside) = if bleed {
        (config.bleed, config.interior.outside_with_bleed)
    } else {
        (0.0, config.interior.outside)
    };

    let page_width = trim_width + bleed;
    let page_height = trim_height + 2.0 * bleed;
    let page = Rect::new(0.0, 0.0, page_width, page_height);

    // Recto binds on the left, verso on the right
    let recto_live = validate_zone(
        Panel::Interior,
        page.inset(gutter, outside, outside, outside),
    )?;
    let verso_live = validate_zone(
        Panel::Interior,
        page.inset(outside, outside, gutter, outside),
    )?;

    Ok(InteriorGeometry {
        page_width,
        page_height,
        bleed,
        gutter,
        outside,
        top: outside,
        bottom: outside,
        recto_live,
        verso_live,
    })
}

impl SpineCalculator {
    /// Interior geometry using this calculator's configuration
    pub fn calculate_interior(
        &self,
        page_count: u32,
        trim_size: TrimSize,
        bleed: bool,
    ) -> Result<InteriorGeometry> {
        calculate_interior(self.config(), page_count, trim_size, bleed)
    }
}
