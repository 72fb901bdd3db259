use crate::state::HapticSettings;

/// Engine parameter IDs. Wire names are what the renderer expects in
/// pattern messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventParam {
    Intensity,
    Sharpness,
    Volume,
    Pitch,
    Pan,
    Brightness,
    AttackTime,
    DecayTime,
    ReleaseTime,
    Sustained,
}

impl EventParam {
    pub fn wire_name(&self) -> &'static str {
        match self {
            EventParam::Intensity => "intensity",
            EventParam::Sharpness => "sharpness",
            EventParam::Volume => "volume",
            EventParam::Pitch => "pitch",
            EventParam::Pan => "pan",
            EventParam::Brightness => "brightness",
            EventParam::AttackTime => "attack_time",
            EventParam::DecayTime => "decay_time",
            EventParam::ReleaseTime => "release_time",
            EventParam::Sustained => "sustained",
        }
    }
}

/// One playable event: a transient haptic tap or a short continuous audio
/// tone, each an ordered parameter list plus relative timing. Event lists
/// are rebuilt on every trigger and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectEvent {
    Haptic {
        params: Vec<(EventParam, f32)>,
        relative_time: f32,
    },
    Audio {
        params: Vec<(EventParam, f32)>,
        relative_time: f32,
        duration: f32,
    },
}

impl EffectEvent {
    pub fn params(&self) -> &[(EventParam, f32)] {
        match self {
            EffectEvent::Haptic { params, .. } => params,
            EffectEvent::Audio { params, .. } => params,
        }
    }
}

/// Duration of the one-shot audio event.
pub const AUDIO_EVENT_DURATION: f32 = 0.1;

/// Translate the current settings snapshot and toggle state into the event
/// list submitted to the engine. Pure; the haptic event (if any) always
/// precedes the audio event (if any).
pub fn build_events(
    settings: &HapticSettings,
    has_haptics: bool,
    has_audio: bool,
) -> Vec<EffectEvent> {
    let mut events = Vec::with_capacity(2);

    if has_haptics {
        events.push(EffectEvent::Haptic {
            params: vec![
                (EventParam::Intensity, settings.haptic_intensity),
                (EventParam::Sharpness, settings.haptic_sharpness),
                (EventParam::AttackTime, settings.attack_time),
                (EventParam::DecayTime, settings.decay_time),
                (EventParam::ReleaseTime, settings.release_time),
                (EventParam::Sustained, settings.sustained),
            ],
            relative_time: 0.0,
        });
    }

    if has_audio {
        // One settings field per parameter slot; pitch, pan and brightness
        // are distinct parameters.
        events.push(EffectEvent::Audio {
            params: vec![
                (EventParam::Volume, settings.audio_volume),
                (EventParam::Pitch, settings.audio_pitch),
                (EventParam::Pan, settings.audio_pan),
                (EventParam::Brightness, settings.audio_brightness),
                (EventParam::AttackTime, settings.attack_time),
                (EventParam::DecayTime, settings.decay_time),
                (EventParam::ReleaseTime, settings.release_time),
                (EventParam::Sustained, settings.sustained),
            ],
            relative_time: 0.0,
            duration: AUDIO_EVENT_DURATION,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_disabled_yields_empty() {
        let settings = HapticSettings {
            haptic_intensity: 1.0,
            audio_volume: 1.0,
            ..HapticSettings::default()
        };
        assert!(build_events(&settings, false, false).is_empty());
    }

    #[test]
    fn test_haptics_only() {
        let mut settings = HapticSettings::default();
        settings.haptic_intensity = 0.8;
        settings.haptic_sharpness = 0.3;

        let events = build_events(&settings, true, false);
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            EffectEvent::Haptic {
                params: vec![
                    (EventParam::Intensity, 0.8),
                    (EventParam::Sharpness, 0.3),
                    (EventParam::AttackTime, 0.0),
                    (EventParam::DecayTime, 0.0),
                    (EventParam::ReleaseTime, 0.5),
                    (EventParam::Sustained, 0.5),
                ],
                relative_time: 0.0,
            }
        );
    }

    #[test]
    fn test_audio_event_field_mapping() {
        let mut settings = HapticSettings::default();
        settings.audio_volume = 0.9;
        settings.audio_pitch = 0.1;
        settings.audio_pan = -0.4;
        settings.audio_brightness = 0.7;

        let events = build_events(&settings, false, true);
        assert_eq!(events.len(), 1);
        match &events[0] {
            EffectEvent::Audio {
                params,
                relative_time,
                duration,
            } => {
                assert_eq!(*relative_time, 0.0);
                assert_eq!(*duration, 0.1);
                // Each audio field lands in its own parameter slot.
                assert_eq!(params[0], (EventParam::Volume, 0.9));
                assert_eq!(params[1], (EventParam::Pitch, 0.1));
                assert_eq!(params[2], (EventParam::Pan, -0.4));
                assert_eq!(params[3], (EventParam::Brightness, 0.7));
                assert_eq!(params[4], (EventParam::AttackTime, 0.0));
                assert_eq!(params[5], (EventParam::DecayTime, 0.0));
                assert_eq!(params[6], (EventParam::ReleaseTime, 0.5));
                assert_eq!(params[7], (EventParam::Sustained, 0.5));
            }
            other => panic!("expected audio event, got {:?}", other),
        }
    }

    #[test]
    fn test_haptic_precedes_audio() {
        let settings = HapticSettings::default();
        let events = build_events(&settings, true, true);
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], EffectEvent::Haptic { .. }));
        assert!(matches!(events[1], EffectEvent::Audio { .. }));
    }

    #[test]
    fn test_envelope_shared_by_both_events() {
        let mut settings = HapticSettings::default();
        settings.attack_time = -0.2;
        settings.decay_time = 0.6;

        let events = build_events(&settings, true, true);
        for event in &events {
            let params = event.params();
            assert!(params.contains(&(EventParam::AttackTime, -0.2)));
            assert!(params.contains(&(EventParam::DecayTime, 0.6)));
        }
    }

    #[test]
    fn test_idempotent_for_identical_input() {
        let settings = HapticSettings::default();
        let a = build_events(&settings, true, true);
        let b = build_events(&settings, true, true);
        assert_eq!(a, b);
    }
}
