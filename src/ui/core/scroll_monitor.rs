//! Scroll-boundary tracking for scrollable detail panes.
//!
//! A pane with more content below the fold draws a shadow over its footer.
//! [`ScrollBoundaryMonitor`] answers "is there nothing left to scroll?" from
//! raw geometry samples. It is a plain value owned by the host; hosts opt in
//! through [`ScrollShadowHost`], which wires the monitor into their
//! first-render and scroll hooks.

/// A snapshot of a scrollable region, in rows.
///
/// Signed so that a sample taken mid-layout (offset past the content end)
/// still compares cleanly instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollGeometry {
    pub scroll_top: i64,
    pub client_height: i64,
    pub scroll_height: i64,
}

impl ScrollGeometry {
    pub fn new(scroll_top: i64, client_height: i64, scroll_height: i64) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    /// Exact equality: the remaining content exactly fills the viewport.
    pub fn is_at_boundary(&self) -> bool {
        self.scroll_height - self.scroll_top == self.client_height
    }
}

/// Anything that can report its scroll geometry.
pub trait ScrollRegion {
    fn geometry(&self) -> ScrollGeometry;
}

impl ScrollRegion for ScrollGeometry {
    fn geometry(&self) -> ScrollGeometry {
        *self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollBoundaryMonitor {
    attached: bool,
    no_scroll: bool,
}

impl ScrollBoundaryMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind to the host's region at first render.
    ///
    /// With no region the monitor stays detached and keeps reporting
    /// "more to scroll" forever.
    pub fn attach<R: ScrollRegion + ?Sized>(&mut self, region: Option<&R>) {
        match region {
            Some(region) => {
                self.attached = true;
                self.evaluate(region.geometry());
            }
            None => {
                log::debug!("scroll monitor: no region to attach to, staying idle");
                self.attached = false;
                self.no_scroll = false;
            }
        }
    }

    /// Feed one scroll sample. Ignored while detached.
    pub fn on_scroll<R: ScrollRegion + ?Sized>(&mut self, region: &R) {
        if self.attached {
            self.evaluate(region.geometry());
        }
    }

    pub fn detach(&mut self) {
        self.attached = false;
        self.no_scroll = false;
    }

    fn evaluate(&mut self, geometry: ScrollGeometry) {
        self.no_scroll = geometry.is_at_boundary();
    }

    /// `true` once the content is scrolled all the way down (or never
    /// needed scrolling).
    pub fn no_scroll(&self) -> bool {
        self.no_scroll
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Capability for hosts that own a scrollable region and want the footer
/// shadow behaviour.
pub trait ScrollShadowHost {
    type Region: ScrollRegion + ?Sized;

    fn scroll_region(&self) -> Option<&Self::Region>;
    fn scroll_monitor(&self) -> &ScrollBoundaryMonitor;
    fn scroll_monitor_mut(&mut self) -> &mut ScrollBoundaryMonitor;

    /// Call once, after the host's first render.
    fn first_updated(&mut self) {
        let geometry = self.scroll_region().map(|region| region.geometry());
        self.scroll_monitor_mut().attach(geometry.as_ref());
    }

    /// Call after every change to the region's scroll position or size.
    fn content_scroll(&mut self) {
        if let Some(geometry) = self.scroll_region().map(|region| region.geometry()) {
            self.scroll_monitor_mut().on_scroll(&geometry);
        }
    }

    fn no_scroll(&self) -> bool {
        self.scroll_monitor().no_scroll()
    }
}
