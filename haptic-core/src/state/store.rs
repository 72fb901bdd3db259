use std::sync::mpsc::{self, Receiver, Sender};

use super::settings::{HapticSettings, ParamId};

/// Notification posted to subscribers after every mutation. Carries the
/// post-mutation snapshot so a subscriber never has to re-query the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingsChange {
    pub settings: HapticSettings,
    pub has_haptics: bool,
    pub has_audio: bool,
}

/// Holds the current parameter values and the two feature toggles.
///
/// Mutations produce a new immutable snapshot and post a `SettingsChange`
/// to every subscriber. Subscribers whose receiver has been dropped are
/// pruned on the next notification. No operation here can fail.
pub struct SettingsStore {
    settings: HapticSettings,
    has_haptics: bool,
    has_audio: bool,
    subscribers: Vec<Sender<SettingsChange>>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self {
            settings: HapticSettings::default(),
            has_haptics: true,
            has_audio: false,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<SettingsChange> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn settings(&self) -> HapticSettings {
        self.settings
    }

    pub fn has_haptics(&self) -> bool {
        self.has_haptics
    }

    pub fn has_audio(&self) -> bool {
        self.has_audio
    }

    /// No bounds validation; the UI guarantees range via slider bounds.
    pub fn set(&mut self, param: ParamId, value: f32) {
        self.settings.set(param, value);
        self.notify();
    }

    pub fn set_has_haptics(&mut self, enabled: bool) {
        self.has_haptics = enabled;
        self.notify();
    }

    pub fn set_has_audio(&mut self, enabled: bool) {
        self.has_audio = enabled;
        self.notify();
    }

    fn notify(&mut self) {
        let change = SettingsChange {
            settings: self.settings,
            has_haptics: self.has_haptics,
            has_audio: self.has_audio,
        };
        self.subscribers.retain(|tx| tx.send(change).is_ok());
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_posts_one_change_with_snapshot() {
        let mut store = SettingsStore::new();
        let rx = store.subscribe();

        store.set(ParamId::HapticIntensity, 0.8);

        let change = rx.try_recv().expect("one change expected");
        assert_eq!(change.settings.haptic_intensity, 0.8);
        assert!(change.has_haptics);
        assert!(!change.has_audio);
        assert!(rx.try_recv().is_err(), "exactly one change expected");
    }

    #[test]
    fn test_toggle_notifies_like_any_mutation() {
        let mut store = SettingsStore::new();
        let rx = store.subscribe();

        store.set_has_audio(true);
        let change = rx.try_recv().expect("toggle should notify");
        assert!(change.has_audio);

        store.set_has_haptics(false);
        let change = rx.try_recv().expect("toggle should notify");
        assert!(!change.has_haptics);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut store = SettingsStore::new();
        let rx = store.subscribe();
        drop(rx);

        // Must not error or panic; dead channel gets pruned.
        store.set(ParamId::AudioVolume, 0.1);
        store.set(ParamId::AudioVolume, 0.2);
        assert_eq!(store.settings().audio_volume, 0.2);
    }

    #[test]
    fn test_multiple_subscribers_each_receive() {
        let mut store = SettingsStore::new();
        let rx1 = store.subscribe();
        let rx2 = store.subscribe();

        store.set(ParamId::Sustained, 0.75);

        assert_eq!(rx1.try_recv().unwrap().settings.sustained, 0.75);
        assert_eq!(rx2.try_recv().unwrap().settings.sustained, 0.75);
    }
}
