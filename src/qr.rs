use std::path::Path;

use anyhow::Result;

/// Whether this build can decode QR images. Resolved at compile time from
/// the `qr-scan` feature; callers render a disabled state when false.
pub const fn scanning_enabled() -> bool {
    cfg!(feature = "qr-scan")
}

/// Decodes every QR grid found in the image, in detection order. Grids that
/// fail to decode are skipped with a warning.
#[cfg(feature = "qr-scan")]
pub fn decode_image(path: &Path) -> Result<Vec<String>> {
    use tracing::warn;

    let luma = image::open(path)?.to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(luma);

    let mut payloads = Vec::new();
    for grid in prepared.detect_grids() {
        match grid.decode() {
            Ok((_meta, content)) => payloads.push(content),
            Err(err) => warn!(%err, "skipping undecodable QR grid"),
        }
    }
    Ok(payloads)
}

#[cfg(not(feature = "qr-scan"))]
pub fn decode_image(_path: &Path) -> Result<Vec<String>> {
    Err(anyhow::anyhow!(
        "QR code scanning is disabled: built without the qr-scan feature"
    ))
}
