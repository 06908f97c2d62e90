//! Click routing for the overlay.
//!
//! Clicks visit regions from the innermost hit outward. Two handlers exist:
//! the backdrop (and the dismiss button) request closure, and the content
//! panel absorbs the event so it never reaches the backdrop. Closing is
//! therefore an explicit decision per region rather than a side effect of
//! whatever bubbling rules a host toolkit uses.

use crate::props::OverlayProps;

/// Hit-testable regions of a visible overlay, innermost last in nesting order:
/// the dismiss button sits in the panel, which sits on the backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Dimmed area around the panel.
    Backdrop,
    /// Content panel holding header, list, and footer.
    Panel,
    /// Dismiss control in the header.
    DismissButton,
}

impl Region {
    /// Regions a click on `self` visits, innermost first.
    #[must_use]
    pub const fn bubble_path(self) -> &'static [Self] {
        match self {
            Self::Backdrop => &[Self::Backdrop],
            Self::Panel => &[Self::Panel, Self::Backdrop],
            Self::DismissButton => &[Self::DismissButton, Self::Panel, Self::Backdrop],
        }
    }

    /// The handler attached to this region.
    #[must_use]
    pub const fn handler(self) -> Handler {
        match self {
            Self::Backdrop | Self::DismissButton => Handler::RequestClose,
            Self::Panel => Handler::Absorb,
        }
    }
}

/// What a region does with a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Invoke the dismiss callback and let the event continue outward.
    RequestClose,
    /// Swallow the event.
    Absorb,
}

/// Whether an event keeps travelling outward after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Visit the next enclosing region.
    Continue,
    /// Stop here.
    Stop,
}

impl Handler {
    /// Run the handler; returns how propagation proceeds and whether the
    /// dismiss callback fired.
    pub fn invoke(self, on_dismiss: &dyn Fn()) -> (Propagation, bool) {
        match self {
            Self::RequestClose => {
                on_dismiss();
                (Propagation::Continue, true)
            }
            Self::Absorb => (Propagation::Stop, false),
        }
    }
}

/// Result of routing one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DismissOutcome {
    /// The dismiss callback was invoked.
    pub dismissed: bool,
    /// Region whose handler stopped propagation, if any.
    pub stopped_at: Option<Region>,
}

/// Route a click through the overlay's handlers.
///
/// The panel stops every click that starts inside it, so the dismiss callback
/// fires at most once per click. Clicks on a hidden overlay are ignored.
pub fn dispatch_click(region: Region, props: &OverlayProps<'_>) -> DismissOutcome {
    let mut outcome = DismissOutcome::default();
    if !props.open {
        return outcome;
    }

    for &visited in region.bubble_path() {
        let (propagation, fired) = visited.handler().invoke(props.on_dismiss);
        outcome.dismissed |= fired;
        if propagation == Propagation::Stop {
            outcome.stopped_at = Some(visited);
            break;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "targetboard::interaction",
        ?region,
        dismissed = outcome.dismissed,
        "overlay click"
    );

    outcome
}
