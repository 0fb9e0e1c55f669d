use crate::core::data::viewport::Viewport;

/// `Center: x0 ± dx, y0 ± dy`. Extents are printed in scientific notation
/// so they stay distinguishable at deep zoom.
#[must_use]
pub fn status_line(viewport: &Viewport) -> String {
    let center = viewport.center();
    let (dx, dy) = viewport.half_extents();

    format!(
        "Center: {:.6} ± {:.6e}, {:.6} ± {:.6e}",
        center.real, dx, center.imag, dy
    )
}
