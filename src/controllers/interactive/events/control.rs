use crate::core::params::param_change::ParamChange;

/// Input to the interactive controller from whatever front end drives it.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    Change(ParamChange),
    TogglePlay,
    Play,
    Pause,
    /// Restore default params and rebuild.
    ResetParams,
    Quit,
}
