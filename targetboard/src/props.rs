use std::borrow::Cow;
use std::fmt;

use targetboard_core::{DisplayMode, OverlayLabels, PriceTargetRecord, TargetboardError};

use crate::interaction::{DismissOutcome, Region, dispatch_click};
use crate::view::OverlayView;

/// Everything the overlay needs for one render, owned by the caller.
///
/// Props are rebuilt (or reused) by the host on each render; the overlay never
/// keeps them. Visibility, the record collection, and the dismiss callback all
/// stay under the caller's control.
pub struct OverlayProps<'a> {
    /// Whether the overlay is shown.
    pub open: bool,
    /// Invoked once per click that requests closure.
    pub on_dismiss: &'a dyn Fn(),
    /// Instrument label shown in the header, e.g. "AAPL".
    pub title: &'a str,
    /// Records to rank. Only borrowed.
    pub records: &'a [PriceTargetRecord],
    /// Ranking direction.
    pub mode: DisplayMode,
    /// User-facing strings.
    pub labels: Cow<'a, OverlayLabels>,
}

impl fmt::Debug for OverlayProps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayProps")
            .field("open", &self.open)
            .field("title", &self.title)
            .field("records", &self.records.len())
            .field("mode", &self.mode)
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

impl<'a> OverlayProps<'a> {
    /// Start building props. A dismiss callback is required.
    #[must_use]
    pub fn builder() -> OverlayPropsBuilder<'a> {
        OverlayPropsBuilder::new()
    }

    /// Render the overlay for these props; `None` while hidden.
    #[must_use]
    pub fn render(&self) -> Option<OverlayView> {
        crate::render::render(self)
    }

    /// Route a click on `region` through the overlay's handlers.
    pub fn click(&self, region: Region) -> DismissOutcome {
        dispatch_click(region, self)
    }
}

/// Builder for [`OverlayProps`].
pub struct OverlayPropsBuilder<'a> {
    open: bool,
    on_dismiss: Option<&'a dyn Fn()>,
    title: &'a str,
    records: &'a [PriceTargetRecord],
    mode: DisplayMode,
    labels: Cow<'a, OverlayLabels>,
}

impl Default for OverlayPropsBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> OverlayPropsBuilder<'a> {
    /// Closed overlay, no records, `High` mode, default labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: false,
            on_dismiss: None,
            title: "",
            records: &[],
            mode: DisplayMode::default(),
            labels: Cow::Owned(OverlayLabels::default()),
        }
    }

    /// Set visibility.
    #[must_use]
    pub const fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Set the callback fired when the user asks to close the overlay.
    #[must_use]
    pub fn on_dismiss(mut self, f: &'a dyn Fn()) -> Self {
        self.on_dismiss = Some(f);
        self
    }

    /// Set the header title.
    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Set the record collection.
    #[must_use]
    pub const fn records(mut self, records: &'a [PriceTargetRecord]) -> Self {
        self.records = records;
        self
    }

    /// Set the ranking direction.
    #[must_use]
    pub const fn mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the user-facing strings.
    #[must_use]
    pub fn labels(mut self, labels: &'a OverlayLabels) -> Self {
        self.labels = Cow::Borrowed(labels);
        self
    }

    /// Finish building.
    ///
    /// # Errors
    /// Returns `Err(TargetboardError::MissingField)` if no dismiss callback was set.
    pub fn build(self) -> Result<OverlayProps<'a>, TargetboardError> {
        let on_dismiss = self
            .on_dismiss
            .ok_or_else(|| TargetboardError::missing_field("on_dismiss"))?;
        Ok(OverlayProps {
            open: self.open,
            on_dismiss,
            title: self.title,
            records: self.records,
            mode: self.mode,
            labels: self.labels,
        })
    }
}
