//! Cover geometry calculation
//!
//! The printed cover is one continuous sheet laid out left to right as
//! back cover, spine, front cover, with bleed on every outer edge:
//!
//! ```text
//! ┌────────────────────────────────────────┐  bleed
//! │ ┌─────────────┬───────┬─────────────┐  │
//! │ │    back     │ spine │    front    │  │
//! │ │  ┌──────┐   │ ┌───┐ │  ┌───────┐  │  │
//! │ │  │ safe │   │ │   │ │  │ safe  │  │  │
//! │ │  └──────┘ ▒▒│ └───┘ │  └───────┘  │  │
//! │ └─────────────┴───────┴─────────────┘  │  trim
//! └────────────────────────────────────────┘
//! ```
//!
//! All calculations are pure; the calculator only reads its configuration.

use log::debug;

use crate::config::CoverConfig;
use crate::types::*;

/// Allowed drift between a caller's spine width and the geometry's
const SPINE_WIDTH_TOLERANCE_IN: f64 = 1e-9;

/// Cover geometry calculator for a single print vendor configuration
#[derive(Debug, Clone, Default)]
pub struct SpineCalculator {
    config: CoverConfig,
}

impl SpineCalculator {
    /// Create a calculator, rejecting invalid configuration
    pub fn new(config: CoverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CoverConfig {
        &self.config
    }

    // =========================================================================
    // Spine
    // =========================================================================

    /// Spine width in inches, never below the configured minimum.
    pub fn calculate_spine_width(
        &self,
        page_count: u32,
        paper: PaperColor,
        binding: BindingType,
    ) -> Result<f64> {
        if page_count == 0 {
            return Err(CoverError::InvalidArgument(
                "Page count must be a positive integer".to_string(),
            ));
        }

        let per_page = self
            .config
            .thickness
            .per_page(PaperStock::new(paper, binding));
        let raw = page_count as f64 * per_page;

        if raw < self.config.min_spine_width {
            debug!(
                "Spine width {:.4} in for {} pages clamped to {:.4} in",
                raw, page_count, self.config.min_spine_width
            );
            return Ok(self.config.min_spine_width);
        }
        Ok(raw)
    }

    /// Spine widths for both paper colors at each page count.
    pub fn spine_chart(
        &self,
        page_counts: &[u32],
        binding: BindingType,
    ) -> Result<Vec<SpineChartRow>> {
        page_counts
            .iter()
            .map(|&page_count| -> Result<SpineChartRow> {
                Ok(SpineChartRow {
                    page_count,
                    white: self.calculate_spine_width(page_count, PaperColor::White, binding)?,
                    cream: self.calculate_spine_width(page_count, PaperColor::Cream, binding)?,
                })
            })
            .collect()
    }

    // =========================================================================
    // Cover Sheet
    // =========================================================================

    /// Full-cover geometry for a trim size and spine width.
    ///
    /// The spine width is usually the output of
    /// [`calculate_spine_width`](Self::calculate_spine_width) but any finite,
    /// non-negative value is accepted.
    pub fn calculate_cover_dimensions(
        &self,
        trim_size: TrimSize,
        spine_width: f64,
    ) -> Result<CoverGeometry> {
        if !spine_width.is_finite() || spine_width < 0.0 {
            return Err(CoverError::InvalidArgument(format!(
                "Spine width must be a finite, non-negative length (got {})",
                spine_width
            )));
        }

        let bleed = self.config.bleed;
        let (trim_width, trim_height) = trim_size.dimensions_in();
        let back_width = trim_width;
        let front_width = trim_width;

        let back_start_x = bleed;
        let spine_start_x = bleed + back_width;
        let front_start_x = bleed + back_width + spine_width;

        Ok(CoverGeometry {
            spine_width,
            total_width: back_width + spine_width + front_width + 2.0 * bleed,
            total_height: trim_height + 2.0 * bleed,
            front_width,
            back_width,
            height: trim_height,
            bleed,
            front_start_x,
            spine_start_x,
            back_start_x,
        })
    }

    // =========================================================================
    // Safe Zones
    // =========================================================================

    /// Safe zones for all three panels plus the barcode reservation.
    ///
    /// `spine_width` must be the width `geometry` was built with. Fails with
    /// [`CoverError::DegenerateGeometry`] when any zone would have a
    /// non-positive width or height.
    pub fn calculate_safe_zones(
        &self,
        geometry: &CoverGeometry,
        spine_width: f64,
    ) -> Result<SafeZones> {
        let drift = (spine_width - geometry.spine_width).abs();
        if drift.is_nan() || drift > SPINE_WIDTH_TOLERANCE_IN {
            return Err(CoverError::InvalidArgument(format!(
                "Spine width {} does not match the cover geometry ({})",
                spine_width, geometry.spine_width
            )));
        }

        let front = validate_zone(Panel::Front, self.front_safe_zone(geometry))?;
        let back = validate_zone(Panel::Back, self.back_safe_zone(geometry))?;
        let spine = validate_zone(Panel::Spine, self.spine_safe_zone(geometry))?;

        Ok(SafeZones {
            front,
            spine,
            back,
            barcode: self.barcode_area(geometry),
        })
    }

    /// Run the whole pipeline for one book.
    ///
    /// Unlike [`calculate_safe_zones`](Self::calculate_safe_zones), a spine
    /// too thin for text is not an error here: the spine zone is dropped.
    pub fn calculate_layout(&self, spec: &CoverSpec) -> Result<CoverLayout> {
        let spine_width = self.calculate_spine_width(
            spec.page_count,
            spec.paper_stock.color,
            spec.paper_stock.binding,
        )?;
        let geometry = self.calculate_cover_dimensions(spec.trim_size, spine_width)?;

        let front_safe = validate_zone(Panel::Front, self.front_safe_zone(&geometry))?;
        let back_safe = validate_zone(Panel::Back, self.back_safe_zone(&geometry))?;

        let spine_safe = if spec.page_count <= self.config.min_spine_text_pages {
            debug!(
                "Spine text suppressed: {} pages, more than {} needed",
                spec.page_count, self.config.min_spine_text_pages
            );
            None
        } else {
            match validate_zone(Panel::Spine, self.spine_safe_zone(&geometry)) {
                Ok(zone) => Some(zone),
                Err(e) => {
                    debug!("Spine text suppressed: {}", e);
                    None
                }
            }
        };

        Ok(CoverLayout {
            spec: *spec,
            geometry,
            front_safe,
            back_safe,
            spine_safe,
            barcode: self.barcode_area(&geometry),
        })
    }

    fn front_safe_zone(&self, geometry: &CoverGeometry) -> Rect {
        geometry
            .front_panel()
            .inset_uniform(self.config.cover_safe_margin)
    }

    fn back_safe_zone(&self, geometry: &CoverGeometry) -> Rect {
        let margin = self.config.cover_safe_margin;
        // Trailing edge gives up the barcode width
        geometry
            .back_panel()
            .inset(margin, margin, margin + self.config.barcode.width, margin)
    }

    fn spine_safe_zone(&self, geometry: &CoverGeometry) -> Rect {
        geometry
            .spine_panel()
            .inset_uniform(self.config.spine_safe_margin)
    }

    /// Barcode box in the bottom-right corner of the back cover
    fn barcode_area(&self, geometry: &CoverGeometry) -> Rect {
        let barcode = &self.config.barcode;
        let back = geometry.back_panel();
        Rect::new(
            back.right() - barcode.margin - barcode.width,
            back.y + barcode.margin,
            barcode.width,
            barcode.height,
        )
    }
}

pub(crate) fn validate_zone(panel: Panel, zone: Rect) -> Result<Rect> {
    if zone.is_positive() {
        Ok(zone)
    } else {
        Err(CoverError::DegenerateGeometry {
            panel,
            width: zone.width,
            height: zone.height,
        })
    }
}
