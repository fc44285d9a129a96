//! Plain-data request and report shapes for callers that speak strings/JSON

use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Untyped cover request, validated into a [`CoverSpec`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoverRequest {
    pub page_count: i64,
    pub trim_size: String,
    pub paper_type: String,
    pub binding_type: String,
}

impl TryFrom<CoverRequest> for CoverSpec {
    type Error = CoverError;

    fn try_from(request: CoverRequest) -> Result<Self> {
        if request.page_count <= 0 || request.page_count > u32::MAX as i64 {
            return Err(CoverError::InvalidArgument(format!(
                "Page count must be a positive integer (got {})",
                request.page_count
            )));
        }

        Ok(CoverSpec {
            page_count: request.page_count as u32,
            trim_size: request.trim_size.parse()?,
            paper_stock: PaperStock::new(
                request.paper_type.parse()?,
                request.binding_type.parse()?,
            ),
        })
    }
}

#[cfg(feature = "serde")]
impl CoverRequest {
    /// Parse a request from JSON; a non-integer page count is an invalid argument
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| CoverError::InvalidArgument(format!("Malformed cover request: {}", e)))
    }
}

/// Safe zones as reported to callers
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportSafeZones {
    pub front: Rect,
    /// None when spine text is suppressed
    pub spine: Option<Rect>,
    pub back: Rect,
}

/// Cover geometry summary, all lengths in inches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoverReport {
    pub spine_width: f64,
    pub total_width: f64,
    pub total_height: f64,
    pub front_width: f64,
    pub back_width: f64,
    pub bleed: f64,
    pub safe_zones: ReportSafeZones,
}

impl From<&CoverLayout> for CoverReport {
    fn from(layout: &CoverLayout) -> Self {
        let g = &layout.geometry;
        Self {
            spine_width: g.spine_width,
            total_width: g.total_width,
            total_height: g.total_height,
            front_width: g.front_width,
            back_width: g.back_width,
            bleed: g.bleed,
            safe_zones: ReportSafeZones {
                front: layout.front_safe,
                spine: layout.spine_safe,
                back: layout.back_safe,
            },
        }
    }
}
