//! Client-side show/hide state for the interactive widgets.
//!
//! The transitions are plain reducers so they can be exercised without a browser; the Leptos
//! hooks at the bottom wire them to signals and timers.

use std::time::Duration;

use leptos::*;
use leptos::leptos_dom::helpers::TimeoutHandle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ids of the currently expanded accordion items.
pub struct OpenSet {
    open: Vec<String>,
    multiple: bool,
}

impl OpenSet {
    /// Creates a set. Without `multiple`, only the first initially open id is kept.
    pub fn new(multiple: bool, initially_open: impl IntoIterator<Item = String>) -> Self {
        let mut open: Vec<String> = Vec::new();
        for id in initially_open {
            if !multiple && !open.is_empty() {
                break;
            }
            if !open.contains(&id) {
                open.push(id);
            }
        }
        Self { open, multiple }
    }

    /// Returns `true` while `id` is expanded.
    pub fn is_open(&self, id: &str) -> bool {
        self.open.iter().any(|open| open == id)
    }

    /// Flips `id` and returns its new state. Opening an item closes the others unless the set
    /// allows multiple open items.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_open(id) {
            self.open.retain(|open| open != id);
            return false;
        }
        if !self.multiple {
            self.open.clear();
        }
        self.open.push(id.to_string());
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Lifecycle of a dismissible widget.
pub enum DismissPhase {
    /// Rendered and fully visible.
    Shown,
    /// Leave transition running.
    Leaving,
    /// Unmounted.
    Removed,
}

impl DismissPhase {
    /// Returns `true` while the widget's markup should stay mounted.
    pub fn is_present(self) -> bool {
        !matches!(self, Self::Removed)
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Shown => "shown",
            Self::Leaving => "leaving",
            Self::Removed => "removed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Events accepted by [`reduce_dismiss`].
pub enum DismissAction {
    /// The dismiss control was activated.
    Dismiss,
    /// The leave transition finished.
    Finish,
}

/// Applies a [`DismissAction`]. Out-of-order actions leave the phase unchanged.
pub fn reduce_dismiss(phase: DismissPhase, action: DismissAction) -> DismissPhase {
    match (phase, action) {
        (DismissPhase::Shown, DismissAction::Dismiss) => DismissPhase::Leaving,
        (DismissPhase::Leaving, DismissAction::Finish) => DismissPhase::Removed,
        (phase, _) => phase,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Timed leave transition for a dismissible widget.
pub struct DismissTransition {
    /// Time between the dismiss click and unmounting.
    pub duration: Duration,
    /// Transition utilities present in every phase.
    pub base: &'static str,
    /// Classes while shown.
    pub shown: &'static str,
    /// Classes while leaving.
    pub leaving: &'static str,
}

impl DismissTransition {
    /// Fade and shrink, used by badges.
    pub const FADE_SCALE: Self = Self {
        duration: Duration::from_millis(300),
        base: "transition duration-300 ease-out",
        shown: "opacity-100 scale-100",
        leaving: "opacity-0 scale-95",
    };

    /// Fade and slide up, used by banners.
    pub const FADE_SLIDE: Self = Self {
        duration: Duration::from_millis(200),
        base: "transition-all duration-200 ease-in",
        shown: "opacity-100 translate-y-0",
        leaving: "opacity-0 -translate-y-2",
    };

    /// Transition classes for `phase`.
    pub fn classes(&self, phase: DismissPhase) -> String {
        match phase {
            DismissPhase::Shown => format!("{} {}", self.base, self.shown),
            DismissPhase::Leaving | DismissPhase::Removed => {
                format!("{} {}", self.base, self.leaving)
            }
        }
    }
}

/// Visibility utilities for popovers that stay mounted while closed.
pub(crate) fn reveal_class(open: bool) -> &'static str {
    if open {
        "visible opacity-100 translate-y-0"
    } else {
        "invisible opacity-0 -translate-y-1 pointer-events-none"
    }
}

#[derive(Clone, Copy)]
/// Reactive handle returned by [`use_dismiss`].
pub struct DismissHandle {
    phase: RwSignal<DismissPhase>,
    transition: DismissTransition,
    on_dismiss: StoredValue<Option<Callback<()>>>,
    pending: StoredValue<Option<TimeoutHandle>>,
}

impl DismissHandle {
    /// Current phase (tracked).
    pub fn phase(&self) -> DismissPhase {
        self.phase.get()
    }

    /// Returns `true` while the widget is mounted (tracked).
    pub fn is_present(&self) -> bool {
        self.phase.get().is_present()
    }

    /// Transition classes for the current phase (tracked).
    pub fn classes(&self) -> String {
        self.transition.classes(self.phase.get())
    }

    /// Starts the leave transition and schedules removal.
    pub fn dismiss(&self) {
        let current = self.phase.get_untracked();
        let next = reduce_dismiss(current, DismissAction::Dismiss);
        if next == current {
            return;
        }
        self.phase.set(next);

        let handle = *self;
        match set_timeout_with_handle(move || handle.finish(), self.transition.duration) {
            Ok(timeout) => self.pending.set_value(Some(timeout)),
            Err(err) => {
                logging::warn!("dismiss timer unavailable, removing immediately: {err:?}");
                self.finish();
            }
        }
    }

    // The timer may outlive the widget; every access tolerates a disposed owner.
    fn finish(&self) {
        let _ = self.pending.try_update_value(|pending| pending.take());
        let Some(current) = self.phase.try_get_untracked() else {
            return;
        };
        let next = reduce_dismiss(current, DismissAction::Finish);
        if next == current || self.phase.try_set(next).is_some() {
            return;
        }
        self.on_dismiss.try_with_value(|on_dismiss| {
            if let Some(on_dismiss) = on_dismiss.as_ref() {
                on_dismiss.call(());
            }
        });
    }
}

/// Creates dismiss state for one widget instance. A pending removal timer is cleared when the
/// widget unmounts.
pub fn use_dismiss(transition: DismissTransition, on_dismiss: Option<Callback<()>>) -> DismissHandle {
    let pending = store_value(None::<TimeoutHandle>);
    on_cleanup(move || {
        if let Some(Some(timeout)) = pending.try_update_value(|pending| pending.take()) {
            timeout.clear();
        }
    });

    DismissHandle {
        phase: create_rw_signal(DismissPhase::Shown),
        transition,
        on_dismiss: store_value(on_dismiss),
        pending,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_open_set_closes_siblings() {
        let mut set = OpenSet::new(false, ["a".to_string(), "b".to_string()]);
        assert!(set.is_open("a"));
        assert!(!set.is_open("b"));

        assert!(set.toggle("b"));
        assert!(set.is_open("b"));
        assert!(!set.is_open("a"));

        assert!(!set.toggle("b"));
        assert!(!set.is_open("b"));
    }

    #[test]
    fn multiple_open_set_keeps_siblings() {
        let mut set = OpenSet::new(true, ["a".to_string(), "a".to_string()]);
        assert!(set.toggle("b"));
        assert!(set.is_open("a"));
        assert!(set.is_open("b"));
        assert!(!set.toggle("a"));
        assert!(set.is_open("b"));
    }

    #[test]
    fn dismiss_runs_shown_leaving_removed() {
        let phase = reduce_dismiss(DismissPhase::Shown, DismissAction::Finish);
        assert_eq!(phase, DismissPhase::Shown);

        let phase = reduce_dismiss(phase, DismissAction::Dismiss);
        assert_eq!(phase, DismissPhase::Leaving);
        assert_eq!(
            reduce_dismiss(phase, DismissAction::Dismiss),
            DismissPhase::Leaving
        );

        let phase = reduce_dismiss(phase, DismissAction::Finish);
        assert_eq!(phase, DismissPhase::Removed);
        assert!(!phase.is_present());
        assert_eq!(
            reduce_dismiss(phase, DismissAction::Dismiss),
            DismissPhase::Removed
        );
    }

    #[test]
    fn transition_classes_follow_phase() {
        let fade = DismissTransition::FADE_SCALE;
        assert_eq!(fade.duration, Duration::from_millis(300));
        assert_eq!(
            fade.classes(DismissPhase::Shown),
            "transition duration-300 ease-out opacity-100 scale-100"
        );
        assert_eq!(
            fade.classes(DismissPhase::Leaving),
            "transition duration-300 ease-out opacity-0 scale-95"
        );
    }

    #[test]
    fn finish_removes_and_notifies_once() {
        let _ = create_runtime();
        let calls = create_rw_signal(0_u32);
        let handle = use_dismiss(
            DismissTransition::FADE_SLIDE,
            Some(Callback::new(move |_| calls.update(|count| *count += 1))),
        );
        assert!(handle.is_present());

        handle.finish();
        assert_eq!(handle.phase(), DismissPhase::Shown);
        assert_eq!(calls.get_untracked(), 0);

        handle.phase.set(DismissPhase::Leaving);
        handle.finish();
        assert!(!handle.is_present());
        assert_eq!(calls.get_untracked(), 1);

        handle.finish();
        assert_eq!(calls.get_untracked(), 1);
    }

    #[test]
    fn finish_after_unmount_is_ignored() {
        let _ = create_runtime();
        let calls = create_rw_signal(0_u32);
        let mount = as_child_of_current_owner(move |()| {
            use_dismiss(
                DismissTransition::FADE_SCALE,
                Some(Callback::new(move |_| calls.update(|count| *count += 1))),
            )
        });
        let (handle, disposer) = mount(());
        handle.phase.set(DismissPhase::Leaving);
        drop(disposer);

        handle.finish();
        assert_eq!(calls.get_untracked(), 0);
    }

    #[test]
    fn reveal_class_hides_closed_popovers() {
        assert!(reveal_class(true).starts_with("visible"));
        assert!(reveal_class(false).contains("invisible"));
    }
}
