use crate::action::Action;
use crate::state::SettingsStore;

#[derive(Debug, Default)]
pub struct DispatchResult {
    pub quit: bool,
}

/// Apply a UI action to the settings store. Store subscribers see one
/// change notification per mutating action; the main loop turns those into
/// debounce re-arms.
pub fn dispatch_action(action: &Action, store: &mut SettingsStore) -> DispatchResult {
    let mut result = DispatchResult::default();

    match action {
        Action::None => {}
        Action::SetParam(param, value) => {
            store.set(*param, *value);
        }
        Action::ToggleHaptics => {
            store.set_has_haptics(!store.has_haptics());
        }
        Action::ToggleAudio => {
            store.set_has_audio(!store.has_audio());
        }
        Action::Quit => {
            result.quit = true;
        }
    }

    result
}
