//! Cover guide template
//!
//! Produces a one-page PDF the size of the full cover (bleed included) with
//! vector guides for the trim line, spine folds, safe zones and the barcode
//! reservation. The page carries TrimBox and BleedBox entries so prepress
//! tools see the same geometry.

use crate::constants::{FOLD_LINE_WIDTH, GUIDE_LINE_WIDTH, in_to_pt};
use crate::types::{CoverError, CoverLayout, Rect, Result};
use lopdf::{Dictionary, Document, Object, Stream};
use std::path::Path;

/// RGB stroke colors for each guide type
const TRIM_COLOR: &str = "0 0 0";
const FOLD_COLOR: &str = "0.5 0.5 0.5";
const SAFE_COLOR: &str = "0 0.4 1";
const BARCODE_COLOR: &str = "1 0 0";

/// Build the guide template document for a cover layout
pub fn render_cover_template(layout: &CoverLayout) -> Result<Document> {
    let geometry = &layout.geometry;
    let width_pt = in_to_pt(geometry.total_width);
    let height_pt = in_to_pt(geometry.total_height);

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let content = generate_guides(layout);
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let media_box = pdf_box(&Rect::new(0.0, 0.0, geometry.total_width, geometry.total_height));
    let page_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        ("MediaBox", media_box.clone()),
        ("BleedBox", media_box),
        ("TrimBox", pdf_box(&geometry.trim_rect())),
        ("Resources", Object::Dictionary(Dictionary::new())),
        ("Contents", Object::Reference(content_id)),
    ]));

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
        ("Count", Object::Integer(1)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    log::debug!(
        "Rendered cover template {:.1} x {:.1} pt",
        width_pt,
        height_pt
    );
    Ok(doc)
}

/// Render the guide template for `layout` and write it to `path`.
///
/// Rendering and serialization run on the blocking pool.
pub async fn write_cover_template(layout: &CoverLayout, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let layout = *layout;
    let bytes = tokio::task::spawn_blocking(move || {
        let mut doc = render_cover_template(&layout)?;
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok::<_, CoverError>(bytes)
    })
    .await??;

    tokio::fs::write(path, &bytes).await?;
    log::info!(
        "Wrote cover template {} ({} bytes)",
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Generate the guide drawing as PDF content stream operations
pub fn generate_guides(layout: &CoverLayout) -> String {
    let geometry = &layout.geometry;
    let mut ops = String::new();

    // Save graphics state
    ops.push_str("q\n");
    ops.push_str(&format!("{} w\n", GUIDE_LINE_WIDTH));

    // Trim line around the whole sheet
    ops.push_str(&format!("{} RG\n", TRIM_COLOR));
    ops.push_str(&stroke_rect(&geometry.trim_rect()));

    // Spine folds (dashed)
    ops.push_str(&format!("{} RG\n", FOLD_COLOR));
    ops.push_str(&format!("{} w\n", FOLD_LINE_WIDTH));
    ops.push_str("[6 3] 0 d\n");
    let bottom = in_to_pt(geometry.bleed);
    let top = in_to_pt(geometry.bleed + geometry.height);
    for x in [geometry.spine_start_x, geometry.front_start_x] {
        let x = in_to_pt(x);
        ops.push_str(&format!("{} {} m {} {} l S\n", x, bottom, x, top));
    }
    ops.push_str("[] 0 d\n");

    // Safe zones
    ops.push_str(&format!("{} w\n", GUIDE_LINE_WIDTH));
    ops.push_str(&format!("{} RG\n", SAFE_COLOR));
    ops.push_str(&stroke_rect(&layout.front_safe));
    ops.push_str(&stroke_rect(&layout.back_safe));
    if let Some(spine) = &layout.spine_safe {
        ops.push_str(&stroke_rect(spine));
    }

    // Barcode reservation
    ops.push_str(&format!("{} RG\n", BARCODE_COLOR));
    ops.push_str(&stroke_rect(&layout.barcode));

    // Restore graphics state
    ops.push_str("Q\n");

    ops
}

fn stroke_rect(rect: &Rect) -> String {
    format!(
        "{} {} {} {} re S\n",
        in_to_pt(rect.x),
        in_to_pt(rect.y),
        in_to_pt(rect.width),
        in_to_pt(rect.height)
    )
}

/// A PDF box array `[llx lly urx ury]` in points
fn pdf_box(rect: &Rect) -> Object {
    Object::Array(vec![
        Object::Real(in_to_pt(rect.x) as f32),
        Object::Real(in_to_pt(rect.y) as f32),
        Object::Real(in_to_pt(rect.right()) as f32),
        Object::Real(in_to_pt(rect.top()) as f32),
    ])
}
