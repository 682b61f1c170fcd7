use crate::app::state::EffectKind;

/// Side-effecting intents returned by the handler. Each user action maps to
/// one session-model call or one host effect, applied by the main loop.
#[derive(Debug)]
pub enum Action {
    Increment,
    SubmitMessage { text: String },
    StartTask,
    LaunchEffect { kind: EffectKind },
    SaveConfig,
    Quit,
}
