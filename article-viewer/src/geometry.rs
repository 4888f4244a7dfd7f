use std::cell::Cell;

use article_params::Boundary;
use iced::{Point, Rectangle, Size};

pub(crate) const DRAWER_WIDTH: f32 = 616.0;
pub(crate) const ARROW_SIZE: f32 = 48.0;
pub(crate) const ARROW_MARGIN: f32 = 24.0;

/// Where a host interaction landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum HostTarget {
    /// A position in window coordinates.
    Point(Point),
    /// Outside the window entirely, e.g. focus moved to another app.
    Detached,
}

/// Screen area owned by the drawer: the drawer itself plus the toggle arrow
/// in its open position.
///
/// The viewport is updated by the host on resize, so the region lives in a
/// `Cell` and can be refreshed through a shared reference.
#[derive(Debug)]
pub(crate) struct DrawerRegion {
    viewport: Cell<Size>,
}

impl DrawerRegion {
    pub(crate) fn new(viewport: Size) -> Self {
        Self {
            viewport: Cell::new(viewport),
        }
    }

    pub(crate) fn set_viewport(&self, viewport: Size) {
        self.viewport.set(viewport);
    }

    #[cfg(test)]
    pub(crate) fn viewport(&self) -> Size {
        self.viewport.get()
    }

    /// Bounds of the open drawer, clamped to the viewport width.
    pub(crate) fn drawer_bounds(&self) -> Rectangle {
        let viewport = self.viewport.get();
        Rectangle::new(
            Point::ORIGIN,
            Size::new(DRAWER_WIDTH.min(viewport.width), viewport.height),
        )
    }

    /// Bounds of the toggle arrow for the given drawer state.
    pub(crate) fn arrow_bounds(&self, open: bool) -> Rectangle {
        Rectangle::new(arrow_origin(open), Size::new(ARROW_SIZE, ARROW_SIZE))
    }
}

impl Boundary<HostTarget> for DrawerRegion {
    fn contains(&self, target: &HostTarget) -> bool {
        match target {
            HostTarget::Point(point) => {
                self.drawer_bounds().contains(*point)
                    || self.arrow_bounds(true).contains(*point)
            },
            HostTarget::Detached => false,
        }
    }
}

/// Top-left corner of the toggle arrow.
pub(crate) fn arrow_origin(open: bool) -> Point {
    let x = if open {
        DRAWER_WIDTH + ARROW_MARGIN
    } else {
        ARROW_MARGIN
    };
    Point::new(x, ARROW_MARGIN)
}
