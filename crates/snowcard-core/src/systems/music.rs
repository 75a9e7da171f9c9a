//! Background music gate.
//!
//! Browsers reject `audio.play()` until the user has interacted with the
//! page, so playback is requested on the first pointer-down and the host
//! reports the outcome back. A rejection is the card's only recognized
//! failure mode: log it, keep the flag down, and retry on the next
//! interaction.

use crate::api::events::CardEvent;

/// Tracks whether background music has successfully started.
pub struct MusicGate {
    played: bool,
    /// A play request is in flight (awaiting the host's verdict).
    pending: bool,
}

impl MusicGate {
    pub fn new() -> Self {
        Self {
            played: false,
            pending: false,
        }
    }

    /// A user interaction happened; request playback unless it already
    /// started or a request is pending.
    pub fn on_interaction(&mut self, events: &mut Vec<CardEvent>) {
        if !self.played && !self.pending {
            self.pending = true;
            events.push(CardEvent::new(CardEvent::PLAY_MUSIC));
        }
    }

    /// The host reports that playback started.
    pub fn playback_started(&mut self) {
        self.played = true;
        self.pending = false;
        log::info!("background music playing");
    }

    /// The host reports that autoplay policy rejected playback. The flag
    /// stays down so the next interaction retries.
    pub fn playback_failed(&mut self) {
        self.pending = false;
        log::warn!("background music playback rejected; will retry on next interaction");
    }

    pub fn played(&self) -> bool {
        self.played
    }
}

impl Default for MusicGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_interaction_requests_playback() {
        let mut gate = MusicGate::new();
        let mut events = Vec::new();
        gate.on_interaction(&mut events);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, CardEvent::PLAY_MUSIC);
    }

    #[test]
    fn no_duplicate_request_while_pending() {
        let mut gate = MusicGate::new();
        let mut events = Vec::new();
        gate.on_interaction(&mut events);
        gate.on_interaction(&mut events);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn success_stops_further_requests() {
        let mut gate = MusicGate::new();
        let mut events = Vec::new();
        gate.on_interaction(&mut events);
        gate.playback_started();
        assert!(gate.played());

        events.clear();
        gate.on_interaction(&mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn failure_allows_retry_on_next_interaction() {
        let mut gate = MusicGate::new();
        let mut events = Vec::new();
        gate.on_interaction(&mut events);
        gate.playback_failed();
        assert!(!gate.played());

        events.clear();
        gate.on_interaction(&mut events);
        assert_eq!(events.len(), 1, "failed playback should retry");
    }
}
