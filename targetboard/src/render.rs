use targetboard_core::{select, summarize};

use crate::props::OverlayProps;
use crate::view::{Body, EntryRow, Header, OverlayView};

/// Render the overlay for one set of props.
///
/// Returns `None` while `props.open` is false; nothing is ranked or formatted
/// in that case. Every visible render recomputes the ranking from
/// `props.records`, so two renders with equal props produce equal views.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "targetboard::render",
        level = "debug",
        skip(props),
        fields(open = props.open, mode = %props.mode, records = props.records.len()),
    )
)]
#[must_use]
pub fn render(props: &OverlayProps<'_>) -> Option<OverlayView> {
    if !props.open {
        return None;
    }
    let labels = props.labels.as_ref();

    let entries = select(props.records, props.mode);
    let body = if entries.is_empty() {
        Body::Empty {
            message: labels.empty_message.clone(),
        }
    } else {
        Body::List(
            entries
                .iter()
                .map(|e| EntryRow::from_entry(e, labels))
                .collect(),
        )
    };

    let summary = summarize(props.records);
    let footer = (!summary.is_empty())
        .then(|| format!("Showing {} of {} analyst targets", summary.shown, summary.valid));

    Some(OverlayView {
        header: Header {
            title: labels.heading(props.title),
            dismiss_label: labels.dismiss_label.clone(),
        },
        body,
        footer,
        mode: props.mode,
    })
}
