use std::collections::HashSet;

/// One of the demo's fixed input bindings.
///
/// The windowing layer decides which physical key maps to which binding;
/// everything downstream works in terms of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Thrust along the ship heading (Space).
    Thrust,
    /// Straight-up thrust (Up arrow).
    ThrustUp,
    /// Rotate the ship heading left (Left arrow).
    RotateLeft,
    /// Rotate the ship heading right (Right arrow).
    RotateRight,
    /// Reset the player to the start position (R).
    Reset,
    /// Orbit the debug camera (W/A/S/D).
    OrbitLeft,
    OrbitRight,
    OrbitUp,
    OrbitDown,
    /// Quit the demo (Escape).
    Quit,
}

/// Directional input flags consumed by one player update step.
///
/// Flags are independent; any combination may be set in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerInput {
    pub thrust: bool,
    pub thrust_up: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub reset: bool,
}

/// Camera orbit flags for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraInput {
    pub orbit_left: bool,
    pub orbit_right: bool,
    pub orbit_up: bool,
    pub orbit_down: bool,
}

/// Currently-held bindings, updated from press/release edges.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Binding>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release edge for a binding.
    pub fn set(&mut self, binding: Binding, pressed: bool) {
        if pressed {
            self.held.insert(binding);
        } else {
            self.held.remove(&binding);
        }
    }

    pub fn is_held(&self, binding: Binding) -> bool {
        self.held.contains(&binding)
    }

    /// Snapshot the player-facing flags for this frame.
    pub fn player_input(&self) -> PlayerInput {
        PlayerInput {
            thrust: self.is_held(Binding::Thrust),
            thrust_up: self.is_held(Binding::ThrustUp),
            rotate_left: self.is_held(Binding::RotateLeft),
            rotate_right: self.is_held(Binding::RotateRight),
            reset: self.is_held(Binding::Reset),
        }
    }

    /// Snapshot the camera orbit flags for this frame.
    pub fn camera_input(&self) -> CameraInput {
        CameraInput {
            orbit_left: self.is_held(Binding::OrbitLeft),
            orbit_right: self.is_held(Binding::OrbitRight),
            orbit_up: self.is_held(Binding::OrbitUp),
            orbit_down: self.is_held(Binding::OrbitDown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut state = InputState::new();
        state.set(Binding::Thrust, true);
        assert!(state.is_held(Binding::Thrust));
        state.set(Binding::Thrust, false);
        assert!(!state.is_held(Binding::Thrust));
    }

    #[test]
    fn player_snapshot_reflects_held_bindings() {
        let mut state = InputState::new();
        state.set(Binding::Thrust, true);
        state.set(Binding::RotateLeft, true);
        let input = state.player_input();
        assert!(input.thrust);
        assert!(input.rotate_left);
        assert!(!input.rotate_right);
        assert!(!input.reset);
    }

    #[test]
    fn multiple_flags_coexist() {
        // Reset and thrust may be held in the same frame; both must survive
        // into the snapshot.
        let mut state = InputState::new();
        state.set(Binding::Reset, true);
        state.set(Binding::Thrust, true);
        let input = state.player_input();
        assert!(input.reset && input.thrust);
    }

    #[test]
    fn camera_snapshot_is_independent_of_player_bindings() {
        let mut state = InputState::new();
        state.set(Binding::OrbitLeft, true);
        state.set(Binding::Thrust, true);
        let cam = state.camera_input();
        assert!(cam.orbit_left);
        assert!(!cam.orbit_right && !cam.orbit_up && !cam.orbit_down);
    }
}
