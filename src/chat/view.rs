//! Message list surface.
//!
//! DESIGN
//! ======
//! `ChatView` stands in for the `chat-messages` list and the `send-message`
//! input. The core only needs scroll geometry, an element-exists check,
//! append, scroll-to-bottom and input clearing. `MessageList` is the
//! in-memory implementation used by the terminal client and by tests; it
//! models each rendered message as a fixed-height row.

use super::types::RenderedMessage;

/// Scroll geometry of the message list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl Viewport {
    /// At the bottom, or nothing to scroll. New content should follow.
    #[must_use]
    pub fn is_pinned(&self) -> bool {
        let at_bottom = ((self.scroll_height - self.scroll_top).ceil() - self.client_height).abs() < f64::EPSILON;
        at_bottom || self.scroll_height <= self.client_height
    }
}

pub trait ChatView: Send {
    fn viewport(&self) -> Viewport;

    /// Whether an element tagged with `id` is already rendered.
    fn contains_element(&self, id: &str) -> bool;

    fn append(&mut self, message: RenderedMessage);

    fn scroll_to_bottom(&mut self);

    /// Clear the outgoing message input.
    fn clear_input(&mut self);
}

// =============================================================================
// IN-MEMORY LIST
// =============================================================================

#[derive(Debug, Clone)]
pub struct MessageList {
    items: Vec<RenderedMessage>,
    row_height: f64,
    client_height: f64,
    scroll_top: f64,
    input: String,
}

impl MessageList {
    #[must_use]
    pub fn new(row_height: f64, client_height: f64) -> Self {
        Self { items: Vec::new(), row_height, client_height, scroll_top: 0.0, input: String::new() }
    }

    #[must_use]
    pub fn items(&self) -> &[RenderedMessage] {
        &self.items
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|m| m.id.as_str())
    }

    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Simulate the user scrolling; clamped to the scrollable range.
    pub fn scroll_to(&mut self, top: f64) {
        self.scroll_top = top.clamp(0.0, self.max_scroll_top());
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    fn scroll_height(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let rows = self.items.len() as f64;
        (rows * self.row_height).max(self.client_height)
    }

    fn max_scroll_top(&self) -> f64 {
        (self.scroll_height() - self.client_height).max(0.0)
    }
}

impl Default for MessageList {
    fn default() -> Self {
        Self::new(20.0, 400.0)
    }
}

impl ChatView for MessageList {
    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_top: self.scroll_top,
            scroll_height: self.scroll_height(),
            client_height: self.client_height,
        }
    }

    fn contains_element(&self, id: &str) -> bool {
        self.items.iter().any(|m| m.id == id)
    }

    fn append(&mut self, message: RenderedMessage) {
        self.items.push(message);
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_top = self.max_scroll_top();
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
