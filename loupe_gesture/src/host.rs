// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

/// Layout information owned by the embedding UI.
///
/// Every method may return `None` while the viewport is not laid out or no
/// content is loaded. The engine then skips the affected work instead of
/// failing:
/// - no local mapping: the event is ignored entirely;
/// - no viewport or content size: bounds correction is skipped.
pub trait ViewportHost {
    /// Maps a global position into viewport‑local coordinates.
    fn global_to_local(&self, global: Point) -> Option<Point>;

    /// Current viewport size.
    fn viewport_size(&self) -> Option<Size>;

    /// Untransformed size of the content being viewed.
    fn content_size(&self) -> Option<Size>;
}

/// A viewport at a fixed global origin.
///
/// Useful for hosts without nested layout, and in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticViewport {
    /// Global position of the viewport's top‑left corner.
    pub origin: Point,
    /// Viewport size.
    pub size: Size,
    /// Content size, if content is loaded.
    pub content: Option<Size>,
}

impl StaticViewport {
    /// A viewport at the global origin.
    #[must_use]
    pub fn new(size: Size, content: Option<Size>) -> Self {
        Self {
            origin: Point::ORIGIN,
            size,
            content,
        }
    }
}

impl ViewportHost for StaticViewport {
    fn global_to_local(&self, global: Point) -> Option<Point> {
        Some(global - self.origin.to_vec2())
    }

    fn viewport_size(&self) -> Option<Size> {
        Some(self.size)
    }

    fn content_size(&self) -> Option<Size> {
        self.content
    }
}

impl<T: ViewportHost + ?Sized> ViewportHost for &T {
    fn global_to_local(&self, global: Point) -> Option<Point> {
        (**self).global_to_local(global)
    }

    fn viewport_size(&self) -> Option<Size> {
        (**self).viewport_size()
    }

    fn content_size(&self) -> Option<Size> {
        (**self).content_size()
    }
}

