//! Screen <-> logical coordinate transform
//!
//! The track is drawn into a view box that the host scales to fit the
//! rendered element, keeping its aspect ratio and centering it (SVG
//! `preserveAspectRatio="xMidYMid meet"`). Pointer events arrive in screen
//! pixels and must be mapped back before resolving.

use crate::layout::ViewBox;
use longplay_core::Point;

/// Placement of a view box inside a rendered element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    view_box: ViewBox,
    width: f64,
    height: f64,
    origin: Point,
}

/// Uniform scale plus centering offset of the fitted view box
#[derive(Debug, Clone, Copy)]
struct Fit {
    scale: f64,
    offset: Point,
}

impl Viewport {
    /// Element of `width` x `height` pixels showing `view_box`
    pub fn new(view_box: ViewBox, width: f64, height: f64) -> Self {
        Self {
            view_box,
            width,
            height,
            origin: Point::ORIGIN,
        }
    }

    /// Screen position of the element's top-left corner
    ///
    /// Pointer coordinates are usually page- or client-relative; the origin
    /// is subtracted before scaling.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Resize the element
    #[must_use]
    pub fn resized(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Rendered element size in pixels
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Logical canvas being displayed
    pub fn view_box(&self) -> ViewBox {
        self.view_box
    }

    fn fit(&self) -> Option<Fit> {
        let sized = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        if !sized || !self.view_box.is_valid() || !self.origin.is_finite() {
            return None;
        }

        let scale = (self.width / self.view_box.width).min(self.height / self.view_box.height);
        let offset = Point::new(
            (self.width - self.view_box.width * scale) / 2.0,
            (self.height - self.view_box.height * scale) / 2.0,
        );
        Some(Fit { scale, offset })
    }

    /// Map a screen position to track coordinates
    ///
    /// Without a usable element size the position is passed through
    /// unchanged.
    pub fn to_logical(&self, screen: Point) -> Point {
        let Some(fit) = self.fit() else {
            return screen;
        };

        let local = screen - self.origin - fit.offset;
        Point::new(
            local.x / fit.scale + self.view_box.min_x,
            local.y / fit.scale + self.view_box.min_y,
        )
    }

    /// Map a track position to screen coordinates
    pub fn to_screen(&self, logical: Point) -> Point {
        let Some(fit) = self.fit() else {
            return logical;
        };

        let local = Point::new(
            logical.x - self.view_box.min_x,
            logical.y - self.view_box.min_y,
        );
        local * fit.scale + fit.offset + self.origin
    }
}
