/// Input event types the card understands.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The cursor moved to logical coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A click/tap began at logical coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// The cursor left the document.
    PointerLeave,
    /// The viewport was resized (logical size + device pixel ratio).
    Resize { width: f32, height: f32, dpr: f32 },
    /// The host's card element was clicked: reveal the panel.
    OpenPanel,
    /// The overlay backdrop or close button was clicked: dismiss the panel.
    ClosePanel,
}

/// A queue of input events.
/// JS writes events into the queue; the card reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
