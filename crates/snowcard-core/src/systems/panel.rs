//! The click-to-reveal card panel.
//!
//! The DOM side only toggles CSS classes; all sequencing lives here as a
//! small state machine driven by the fixed tick. Opening shows the overlay
//! immediately and the content a beat later so the CSS transitions layer;
//! closing hides the content first and drops the overlay once the close
//! transition has played out.

use crate::api::events::CardEvent;

/// Delay between showing the overlay and the content (seconds).
const OPEN_CONTENT_DELAY: f32 = 0.05;
/// Time the content close transition takes before the overlay hides.
const CLOSE_OVERLAY_DELAY: f32 = 0.4;

/// Panel lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelPhase {
    Closed,
    /// Overlay visible, waiting to reveal the content.
    Opening { elapsed: f32 },
    Open,
    /// Content hidden, waiting out the transition before the overlay drops.
    Closing { elapsed: f32 },
}

/// The card panel state machine.
pub struct CardPanel {
    phase: PanelPhase,
}

impl CardPanel {
    pub fn new() -> Self {
        Self {
            phase: PanelPhase::Closed,
        }
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Request opening. Ignored unless fully closed.
    pub fn open(&mut self, events: &mut Vec<CardEvent>) {
        if self.phase == PanelPhase::Closed {
            self.phase = PanelPhase::Opening { elapsed: 0.0 };
            events.push(CardEvent::new(CardEvent::SHOW_OVERLAY));
        }
    }

    /// Request closing. Ignored unless fully open.
    pub fn close(&mut self, events: &mut Vec<CardEvent>) {
        if self.phase == PanelPhase::Open {
            self.phase = PanelPhase::Closing { elapsed: 0.0 };
            events.push(CardEvent::new(CardEvent::HIDE_CONTENT));
        }
    }

    /// Advance transition timers.
    pub fn tick(&mut self, dt: f32, events: &mut Vec<CardEvent>) {
        match self.phase {
            PanelPhase::Opening { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= OPEN_CONTENT_DELAY {
                    self.phase = PanelPhase::Open;
                    events.push(CardEvent::new(CardEvent::SHOW_CONTENT));
                } else {
                    self.phase = PanelPhase::Opening { elapsed };
                }
            }
            PanelPhase::Closing { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= CLOSE_OVERLAY_DELAY {
                    self.phase = PanelPhase::Closed;
                    events.push(CardEvent::new(CardEvent::HIDE_OVERLAY));
                } else {
                    self.phase = PanelPhase::Closing { elapsed };
                }
            }
            PanelPhase::Closed | PanelPhase::Open => {}
        }
    }
}

impl Default for CardPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn kinds(events: &[CardEvent]) -> Vec<f32> {
        events.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn open_shows_overlay_then_content() {
        let mut panel = CardPanel::new();
        let mut events = Vec::new();

        panel.open(&mut events);
        assert_eq!(kinds(&events), vec![CardEvent::SHOW_OVERLAY]);

        // 0.05 s delay = 3 ticks at 60 Hz.
        panel.tick(DT, &mut events);
        panel.tick(DT, &mut events);
        panel.tick(DT, &mut events);
        assert_eq!(
            kinds(&events),
            vec![CardEvent::SHOW_OVERLAY, CardEvent::SHOW_CONTENT]
        );
        assert_eq!(panel.phase(), PanelPhase::Open);
    }

    #[test]
    fn close_hides_content_then_overlay() {
        let mut panel = CardPanel::new();
        let mut events = Vec::new();
        panel.open(&mut events);
        for _ in 0..5 {
            panel.tick(DT, &mut events);
        }
        events.clear();

        panel.close(&mut events);
        assert_eq!(kinds(&events), vec![CardEvent::HIDE_CONTENT]);

        // 0.4 s = 24 ticks.
        for _ in 0..24 {
            panel.tick(DT, &mut events);
        }
        assert_eq!(
            kinds(&events),
            vec![CardEvent::HIDE_CONTENT, CardEvent::HIDE_OVERLAY]
        );
        assert_eq!(panel.phase(), PanelPhase::Closed);
    }

    #[test]
    fn redundant_requests_mid_transition_are_ignored() {
        let mut panel = CardPanel::new();
        let mut events = Vec::new();

        panel.open(&mut events);
        panel.open(&mut events); // still Opening: no second overlay event
        panel.close(&mut events); // not Open yet: ignored
        assert_eq!(kinds(&events), vec![CardEvent::SHOW_OVERLAY]);
    }

    #[test]
    fn close_while_closed_is_a_no_op() {
        let mut panel = CardPanel::new();
        let mut events = Vec::new();
        panel.close(&mut events);
        assert!(events.is_empty());
        assert_eq!(panel.phase(), PanelPhase::Closed);
    }
}
