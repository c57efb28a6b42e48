//! Content trait: the capability every layout leaf wraps.
//!
//! The layout engine never looks inside a content. It tells the content how
//! much room it has, asks for its lines, and checks them against that room.

use std::any::Any;

/// Type-erased access to a concrete content.
///
/// Blanket-implemented for every `'static` type so a host can get its own
/// type back out of a `Box<dyn Content>`.
pub trait AsAny: Any {
    /// Borrow as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
    /// Borrow as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A component that renders itself as lines of text.
pub trait Content: AsAny {
    /// Receive the extent the content will be displayed at.
    ///
    /// Called once per render pass, before [`Content::lines`].
    fn resize(&mut self, width: u16, height: u16);

    /// The current display, one entry per row.
    ///
    /// At most `height` lines, none wider than `width` columns, for the
    /// last extent given to [`Content::resize`]. Shorter output is padded.
    fn lines(&self) -> Vec<String>;
}

impl dyn Content {
    /// Downcast to the concrete content type.
    pub fn downcast_ref<T: Content>(&self) -> Option<&T> {
        <Self as AsAny>::as_any(self).downcast_ref()
    }

    /// Mutably downcast to the concrete content type.
    pub fn downcast_mut<T: Content>(&mut self) -> Option<&mut T> {
        <Self as AsAny>::as_any_mut(self).downcast_mut()
    }

    /// Check whether the content is of type `T`.
    pub fn is<T: Content>(&self) -> bool {
        <Self as AsAny>::as_any(self).is::<T>()
    }
}

impl Content for String {
    fn resize(&mut self, _width: u16, _height: u16) {}

    fn lines(&self) -> Vec<String> {
        str::lines(self).map(str::to_string).collect()
    }
}

impl Content for &'static str {
    fn resize(&mut self, _width: u16, _height: u16) {}

    fn lines(&self) -> Vec<String> {
        str::lines(self).map(str::to_string).collect()
    }
}
