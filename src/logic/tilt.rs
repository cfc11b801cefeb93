//! Pointer-driven perspective for the decorative background
//!
//! Pure functions; the pointer itself is stored verbatim by the model and
//! only normalized here.

/// Maximum rotation (degrees) at the viewport edge, per axis
pub const TILT_DEGREES: f64 = 10.0;

/// Maximum translation of a background dot, per axis
pub const DOT_TRAVEL: f64 = 20.0;

/// Anchors (fractions of the viewport) of the five floating dots
pub const DOT_ANCHORS: [(f64, f64); 5] = [(0.2, 0.1), (0.7, 0.3), (0.4, 0.5), (0.9, 0.7), (0.1, 0.9)];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

/// Normalize a pointer position to `0.0..=1.0` fractions of the viewport.
///
/// A zero-sized dimension normalizes to the centre.
///
/// # Examples
/// ```
/// use foliotui::logic::tilt::normalize;
///
/// assert_eq!(normalize((40, 10), (80, 20)), (0.5, 0.5));
/// assert_eq!(normalize((5, 5), (0, 0)), (0.5, 0.5));
/// ```
pub fn normalize(position: (u16, u16), viewport: (u16, u16)) -> (f64, f64) {
    let axis = |value: u16, extent: u16| {
        if extent == 0 {
            0.5
        } else {
            value as f64 / extent as f64
        }
    };
    (axis(position.0, viewport.0), axis(position.1, viewport.1))
}

/// Affine tilt from the normalized pointer offset to the viewport centre
pub fn perspective(nx: f64, ny: f64) -> Tilt {
    Tilt {
        rotate_x_deg: (ny - 0.5) * TILT_DEGREES,
        rotate_y_deg: (nx - 0.5) * TILT_DEGREES,
    }
}

/// Translation of a background dot anchored at `anchor`
pub fn dot_offset(nx: f64, ny: f64, anchor: (f64, f64)) -> (f64, f64) {
    ((nx - anchor.0) * DOT_TRAVEL, (ny - anchor.1) * DOT_TRAVEL)
}

/// Horizontal shear (in grid units per unit of height) that approximates a
/// rotation around the Y axis on a flat grid
pub fn grid_shear(tilt: Tilt) -> f64 {
    tilt.rotate_y_deg.to_radians().tan()
}
