//! Onboarding slide flow.
//!
//! # Responsibility
//! - Walk the user through the intro slides exactly once per install.
//! - Persist the `hasOnboarded` flag through the settings repository when
//!   the flow completes or is skipped.
//! - Expose the small read API the slide screen renders from (labels, skip
//!   visibility, current slide).
//!
//! # Invariants
//! - `Completed` is terminal; `advance` and `skip` become no-ops there.
//! - Both completion paths persist the flag before reporting the
//!   transition; a persistence failure is logged and surfaced in the
//!   outcome but never blocks the user from reaching the task screen.
//! - A flag-read failure at startup falls back to showing the slides.

use crate::repo::settings_repo::{
    SettingsRepository, HAS_ONBOARDED_KEY, HAS_ONBOARDED_VALUE,
};
use log::{info, warn};

/// One informational slide of the intro carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub description: String,
}

impl Slide {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The built-in NexTask slide deck.
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "Welcome to NexTask",
            "NexTask is your go-to app for managing tasks efficiently. Organize \
             your daily tasks and set reminders to stay on top of your schedule.",
        ),
        Slide::new(
            "Manage Your Tasks",
            "Create and manage tasks with ease. Track your progress and \
             prioritize your tasks to boost productivity.",
        ),
        Slide::new(
            "Stay Organized",
            "With NexTask, you can keep everything organized in one place. \
             Never miss a deadline and stay on top of your goals.",
        ),
    ]
}

/// Position within the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingState {
    /// Showing the slide at this index.
    Slide(usize),
    /// Flow finished; control belongs to the task screen.
    Completed,
}

/// Result of a completing transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// Whether the `hasOnboarded` flag reached storage. `false` means the
    /// flow will run again on next launch; the transition still happened.
    pub persisted: bool,
}

/// Slide-deck state machine over a settings repository.
pub struct OnboardingFlow<R: SettingsRepository> {
    slides: Vec<Slide>,
    state: OnboardingState,
    repo: R,
}

impl<R: SettingsRepository> OnboardingFlow<R> {
    /// Builds a flow positioned at the first slide.
    ///
    /// An empty deck degenerates to `Completed` without touching storage.
    pub fn new(repo: R, slides: Vec<Slide>) -> Self {
        let state = if slides.is_empty() {
            OnboardingState::Completed
        } else {
            OnboardingState::Slide(0)
        };
        Self {
            slides,
            state,
            repo,
        }
    }

    /// Builds a flow that first consults the persisted flag.
    ///
    /// A stored `"true"` jumps straight to `Completed` so the app can route
    /// to the task screen. A read failure is logged and treated as
    /// not-onboarded, so the slides show.
    pub fn start(repo: R, slides: Vec<Slide>) -> Self {
        let mut flow = Self::new(repo, slides);
        match flow.repo.get(HAS_ONBOARDED_KEY) {
            Ok(Some(value)) if value == HAS_ONBOARDED_VALUE => {
                info!("event=onboarding_check module=onboarding status=ok onboarded=true");
                flow.state = OnboardingState::Completed;
            }
            Ok(_) => {
                info!("event=onboarding_check module=onboarding status=ok onboarded=false");
            }
            Err(err) => {
                warn!("event=onboarding_check module=onboarding status=error error={err}");
            }
        }
        flow
    }

    pub fn state(&self) -> OnboardingState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == OnboardingState::Completed
    }

    /// The full deck, for carousel rendering.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide under the current state; `None` once completed.
    pub fn current_slide(&self) -> Option<&Slide> {
        match self.state {
            OnboardingState::Slide(index) => self.slides.get(index),
            OnboardingState::Completed => None,
        }
    }

    /// Whether the current slide is the final one.
    pub fn is_last_slide(&self) -> bool {
        matches!(self.state, OnboardingState::Slide(index) if index + 1 == self.slides.len())
    }

    /// Primary button label: "Get Started" on the last slide.
    pub fn continue_label(&self) -> &'static str {
        if self.is_last_slide() {
            "Get Started"
        } else {
            "Continue"
        }
    }

    /// The skip button hides on the last slide.
    pub fn show_skip(&self) -> bool {
        matches!(self.state, OnboardingState::Slide(index) if index + 1 < self.slides.len())
    }

    /// Moves to the next slide, or completes the flow from the last one.
    ///
    /// Returns `Some(outcome)` only when this call completed the flow.
    pub fn advance(&mut self) -> Option<CompletionOutcome> {
        match self.state {
            OnboardingState::Slide(index) if index + 1 < self.slides.len() => {
                self.state = OnboardingState::Slide(index + 1);
                None
            }
            OnboardingState::Slide(_) => Some(self.complete("advance")),
            OnboardingState::Completed => None,
        }
    }

    /// Completes the flow from any slide.
    ///
    /// Persists the flag exactly like `advance` on the last slide does, so
    /// both paths are gated uniformly. Returns `None` when already
    /// completed.
    pub fn skip(&mut self) -> Option<CompletionOutcome> {
        match self.state {
            OnboardingState::Slide(_) => Some(self.complete("skip")),
            OnboardingState::Completed => None,
        }
    }

    fn complete(&mut self, trigger: &str) -> CompletionOutcome {
        let persisted = match self.repo.set(HAS_ONBOARDED_KEY, HAS_ONBOARDED_VALUE) {
            Ok(()) => {
                info!(
                    "event=onboarding_complete module=onboarding status=ok trigger={trigger}"
                );
                true
            }
            Err(err) => {
                warn!(
                    "event=onboarding_complete module=onboarding status=error trigger={trigger} error={err}"
                );
                false
            }
        };

        self.state = OnboardingState::Completed;
        CompletionOutcome { persisted }
    }
}

#[cfg(test)]
mod tests {
    use super::{default_slides, OnboardingFlow, OnboardingState};
    use crate::repo::settings_repo::{RepoResult, SettingsRepository};
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemorySettings {
        values: RefCell<HashMap<String, String>>,
    }

    impl SettingsRepository for MemorySettings {
        fn get(&self, key: &str) -> RepoResult<Option<String>> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> RepoResult<()> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn default_deck_has_three_slides() {
        let slides = default_slides();
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].title, "Welcome to NexTask");
    }

    #[test]
    fn empty_deck_starts_completed() {
        let flow = OnboardingFlow::new(MemorySettings::default(), Vec::new());
        assert_eq!(flow.state(), OnboardingState::Completed);
        assert!(flow.current_slide().is_none());
    }

    #[test]
    fn labels_follow_position() {
        let mut flow = OnboardingFlow::new(MemorySettings::default(), default_slides());
        assert_eq!(flow.continue_label(), "Continue");
        assert!(flow.show_skip());

        flow.advance();
        flow.advance();
        assert!(flow.is_last_slide());
        assert_eq!(flow.continue_label(), "Get Started");
        assert!(!flow.show_skip());
    }
}
