use std::time::Instant;

use super::model::{SIDEBAR_TRANSITION, SidebarPhase};

/// Running width transition. Progress starts at `from_progress` so a
/// reversal continues from where the previous transition stopped.
#[derive(Debug, Clone, Copy)]
struct Transition {
    started_at: Instant,
    from_progress: f32,
}

/// Instance-owned open/closed state, the running transition and pointer
/// interaction with navigation items.
#[derive(Debug, Default)]
pub(super) struct SidebarState {
    phase: SidebarPhase,
    transition: Option<Transition>,
    hovered_item: Option<&'static str>,
    pressed_item: Option<&'static str>,
}

impl SidebarState {
    pub(super) fn phase(&self) -> SidebarPhase {
        self.phase
    }

    pub(super) fn toggle(&mut self, now: Instant) {
        // Reversing mid-flight resumes from the mirrored progress.
        let from_progress = 1.0 - self.progress(now);

        self.phase = self.phase.toggled();
        self.transition = Some(Transition {
            started_at: now,
            from_progress,
        });
    }

    /// Transition progress into the current phase, in `0.0..=1.0`.
    pub(super) fn progress(&self, now: Instant) -> f32 {
        let Some(transition) = self.transition else {
            return 1.0;
        };

        let elapsed = now.saturating_duration_since(transition.started_at);
        let advanced =
            elapsed.as_secs_f32() / SIDEBAR_TRANSITION.as_secs_f32();

        (transition.from_progress + advanced).min(1.0)
    }

    pub(super) fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    pub(super) fn hovered_item(&self) -> Option<&'static str> {
        self.hovered_item
    }

    pub(super) fn pressed_item(&self) -> Option<&'static str> {
        self.pressed_item
    }

    pub(super) fn enter_item(&mut self, path: &'static str) {
        self.hovered_item = Some(path);
    }

    /// Leaving an item also cancels a press held on it.
    pub(super) fn leave_item(&mut self, path: &'static str) {
        if self.hovered_item == Some(path) {
            self.hovered_item = None;
        }
        if self.pressed_item == Some(path) {
            self.pressed_item = None;
        }
    }

    pub(super) fn press_item(&mut self, path: &'static str) {
        self.pressed_item = Some(path);
    }

    pub(super) fn release_item(&mut self) {
        self.pressed_item = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::SidebarState;
    use crate::widgets::sidebar::model::{SIDEBAR_TRANSITION, SidebarPhase};

    #[test]
    fn given_fresh_state_when_inspected_then_open_and_settled() {
        let state = SidebarState::default();
        let now = Instant::now();

        assert_eq!(state.phase(), SidebarPhase::Open);
        assert_eq!(state.progress(now), 1.0);
        assert!(!state.is_animating(now));
        assert_eq!(state.hovered_item(), None);
        assert_eq!(state.pressed_item(), None);
    }

    #[test]
    fn given_toggle_when_time_passes_then_progress_reaches_completion() {
        let mut state = SidebarState::default();
        let start = Instant::now();

        state.toggle(start);

        assert_eq!(state.phase(), SidebarPhase::Closed);
        assert_eq!(state.progress(start), 0.0);
        assert!(state.is_animating(start));

        let halfway = start + SIDEBAR_TRANSITION / 2;
        let progress = state.progress(halfway);
        assert!((progress - 0.5).abs() < 1e-3, "progress {progress}");

        let done = start + SIDEBAR_TRANSITION;
        assert_eq!(state.progress(done), 1.0);
        assert!(!state.is_animating(done + Duration::from_secs(5)));
    }

    #[test]
    fn given_running_transition_when_toggled_again_then_progress_is_mirrored() {
        let mut state = SidebarState::default();
        let start = Instant::now();

        state.toggle(start);
        let quarter = start + SIDEBAR_TRANSITION / 4;
        state.toggle(quarter);

        assert_eq!(state.phase(), SidebarPhase::Open);
        let progress = state.progress(quarter);
        assert!((progress - 0.75).abs() < 1e-3, "progress {progress}");

        // Only the remaining quarter of the transition is left to run.
        assert!(state.is_animating(quarter + SIDEBAR_TRANSITION / 8));
        let past = quarter + SIDEBAR_TRANSITION / 4 + Duration::from_millis(1);
        assert_eq!(state.progress(past), 1.0);
        assert!(!state.is_animating(past));
    }

    #[test]
    fn given_reversal_at_toggle_instant_when_measured_then_state_is_settled() {
        let mut state = SidebarState::default();
        let now = Instant::now();

        state.toggle(now);
        state.toggle(now);

        assert_eq!(state.phase(), SidebarPhase::Open);
        assert_eq!(state.progress(now), 1.0);
        assert!(!state.is_animating(now));
    }

    #[test]
    fn given_pressed_item_when_pointer_leaves_then_hover_and_press_clear() {
        let mut state = SidebarState::default();

        state.enter_item("/sales");
        state.press_item("/sales");
        state.leave_item("/costs");

        assert_eq!(state.hovered_item(), Some("/sales"));
        assert_eq!(state.pressed_item(), Some("/sales"));

        state.leave_item("/sales");

        assert_eq!(state.hovered_item(), None);
        assert_eq!(state.pressed_item(), None);
    }
}
