//! Page size and margins, expressed in millimetres.

/// Supported paper sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PaperSize {
    /// ISO A4, 210 x 297 mm.
    #[default]
    A4,
    /// ISO A5, 148 x 210 mm.
    A5,
    /// US Letter, 215.9 x 279.4 mm.
    Letter,
    /// Arbitrary dimensions.
    Custom {
        /// Page width in millimetres.
        width_mm: f64,
        /// Page height in millimetres.
        height_mm: f64,
    },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match *self {
            Self::A4 => (210.0, 297.0),
            Self::A5 => (148.0, 210.0),
            Self::Letter => (215.9, 279.4),
            Self::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }
}

/// Default margin applied to all four sides.
pub const DEFAULT_MARGIN_MM: f64 = 20.0;

/// Page margins in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl PageMargins {
    /// Uses the same margin on every side.
    pub fn uniform(margin_mm: f64) -> Self {
        Self {
            top: margin_mm,
            right: margin_mm,
            bottom: margin_mm,
            left: margin_mm,
        }
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN_MM)
    }
}

/// Geometry handed to the layout engine together with the nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageGeometry {
    pub paper: PaperSize,
    pub margins: PageMargins,
}

impl PageGeometry {
    /// A4 with 20mm margins.
    pub fn a4() -> Self {
        Self::default()
    }

    /// Width and height left for content once the margins are removed.
    pub fn content_area_mm(&self) -> (f64, f64) {
        let (width, height) = self.paper.dimensions_mm();
        (
            width - self.margins.left - self.margins.right,
            height - self.margins.top - self.margins.bottom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a4_with_twenty_millimetre_margins() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.paper, PaperSize::A4);
        assert_eq!(geometry.margins, PageMargins::uniform(20.0));
        assert_eq!(geometry.content_area_mm(), (170.0, 257.0));
    }
}
