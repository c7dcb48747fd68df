//! Scene lifecycle state
//!
//! ```text
//! [Loading] → [Running]
//!     ↓
//!  [Failed]
//! ```
//!
//! - **Loading**: configured assets are being fetched; nothing is spawned yet
//! - **Running**: the scene is built and reacts to picks every frame
//! - **Failed**: an asset could not be loaded; startup stops here

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

/// Primary scene state
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, States, Reflect)]
pub enum SceneState {
    /// Waiting for configured assets (starting state)
    #[default]
    Loading,

    /// Scene constructed, move controller active
    Running,

    /// Initialization failed; the failure has been logged
    Failed,
}

/// Returns true for the transitions the scene lifecycle allows
pub fn is_valid_state_transition(from: SceneState, to: SceneState) -> bool {
    matches!(
        (from, to),
        (SceneState::Loading, SceneState::Running) | (SceneState::Loading, SceneState::Failed)
    )
}

/// Logs every scene state transition, flagging unexpected ones
pub fn validate_and_log_state_transitions(
    mut transition_events: MessageReader<StateTransitionEvent<SceneState>>,
) {
    for event in transition_events.read() {
        match (event.exited, event.entered) {
            (Some(exited), Some(entered)) if exited == entered => {}
            (Some(exited), Some(entered)) => {
                if is_valid_state_transition(exited, entered) {
                    info!("[TRANSITION] {:?} -> {:?}", exited, entered);
                } else {
                    error!(
                        "[TRANSITION] INVALID: {:?} -> {:?} (scene may be inconsistent)",
                        exited, entered
                    );
                }
            }
            (None, Some(entered)) => {
                debug!("[TRANSITION] Enter: {:?}", entered);
            }
            _ => {}
        }
    }
}
