/// Page transition events the frontend reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTransition {
    Hide,
    Show,
}

/// What the running animation should do about a page transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// Page is going into the back/forward cache: stop scheduling frames but
    /// keep the field so it can pick up where it left off.
    Pause,
    /// Page came back out of the back/forward cache.
    Resume,
    /// Page is being unloaded for good.
    Teardown,
    Nothing,
}

/// `persisted` is `PageTransitionEvent.persisted`.
pub fn page_action(transition: PageTransition, persisted: bool) -> PageAction {
    match (transition, persisted) {
        (PageTransition::Hide, true) => PageAction::Pause,
        (PageTransition::Hide, false) => PageAction::Teardown,
        (PageTransition::Show, true) => PageAction::Resume,
        // a fresh load; `start` already ran
        (PageTransition::Show, false) => PageAction::Nothing,
    }
}
