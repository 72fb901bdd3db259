/// The ten tunable playback parameters, grouped into three families:
/// haptic (intensity, sharpness), audio (volume, pitch, pan, brightness)
/// and envelope (attack, decay, release, sustained).
///
/// Values are assumed in-range; the UI clamps via slider bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HapticSettings {
    pub haptic_intensity: f32,
    pub haptic_sharpness: f32,

    pub audio_volume: f32,
    pub audio_pitch: f32,
    pub audio_pan: f32,
    pub audio_brightness: f32,

    pub attack_time: f32,
    pub decay_time: f32,
    pub release_time: f32,
    pub sustained: f32,
}

impl Default for HapticSettings {
    fn default() -> Self {
        Self {
            haptic_intensity: 0.5,
            haptic_sharpness: 0.5,
            audio_volume: 0.5,
            audio_pitch: 0.0,
            audio_pan: 0.0,
            audio_brightness: 0.5,
            attack_time: 0.0,
            decay_time: 0.0,
            release_time: 0.5,
            sustained: 0.5,
        }
    }
}

impl HapticSettings {
    pub fn get(&self, param: ParamId) -> f32 {
        match param {
            ParamId::HapticIntensity => self.haptic_intensity,
            ParamId::HapticSharpness => self.haptic_sharpness,
            ParamId::AudioVolume => self.audio_volume,
            ParamId::AudioPitch => self.audio_pitch,
            ParamId::AudioPan => self.audio_pan,
            ParamId::AudioBrightness => self.audio_brightness,
            ParamId::AttackTime => self.attack_time,
            ParamId::DecayTime => self.decay_time,
            ParamId::ReleaseTime => self.release_time,
            ParamId::Sustained => self.sustained,
        }
    }

    pub fn set(&mut self, param: ParamId, value: f32) {
        match param {
            ParamId::HapticIntensity => self.haptic_intensity = value,
            ParamId::HapticSharpness => self.haptic_sharpness = value,
            ParamId::AudioVolume => self.audio_volume = value,
            ParamId::AudioPitch => self.audio_pitch = value,
            ParamId::AudioPan => self.audio_pan = value,
            ParamId::AudioBrightness => self.audio_brightness = value,
            ParamId::AttackTime => self.attack_time = value,
            ParamId::DecayTime => self.decay_time = value,
            ParamId::ReleaseTime => self.release_time = value,
            ParamId::Sustained => self.sustained = value,
        }
    }
}

/// Identifies one settings field. Slider rows are built from `ParamId::ALL`
/// so labels and bounds live in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    HapticIntensity,
    HapticSharpness,
    AudioVolume,
    AudioPitch,
    AudioPan,
    AudioBrightness,
    AttackTime,
    DecayTime,
    ReleaseTime,
    Sustained,
}

impl ParamId {
    pub const ALL: [ParamId; 10] = [
        ParamId::HapticIntensity,
        ParamId::HapticSharpness,
        ParamId::AudioVolume,
        ParamId::AudioPitch,
        ParamId::AudioPan,
        ParamId::AudioBrightness,
        ParamId::AttackTime,
        ParamId::DecayTime,
        ParamId::ReleaseTime,
        ParamId::Sustained,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ParamId::HapticIntensity => "Intensity",
            ParamId::HapticSharpness => "Sharpness",
            ParamId::AudioVolume => "Volume",
            ParamId::AudioPitch => "Pitch",
            ParamId::AudioPan => "Pan",
            ParamId::AudioBrightness => "Brightness",
            ParamId::AttackTime => "Attack time",
            ParamId::DecayTime => "Decay time",
            ParamId::ReleaseTime => "Release time",
            ParamId::Sustained => "Sustained",
        }
    }

    /// Slider bounds for this parameter.
    pub fn range(&self) -> (f32, f32) {
        match self {
            ParamId::AudioPitch
            | ParamId::AudioPan
            | ParamId::AttackTime
            | ParamId::DecayTime => (-1.0, 1.0),
            _ => (0.0, 1.0),
        }
    }

    pub fn default_value(&self) -> f32 {
        HapticSettings::default().get(*self)
    }
}
