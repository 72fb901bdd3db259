use crate::state::ParamId;

/// User intentions produced by the UI layer and applied by `dispatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    SetParam(ParamId, f32),
    ToggleHaptics,
    ToggleAudio,
    Quit,
}
