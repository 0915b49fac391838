use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;
use thaw::*;

/// Heading and body text for an empty result.
pub fn empty_state_text(is_filtering: bool) -> (&'static str, &'static str) {
    if is_filtering {
        (
            "No matches found",
            "Nothing matches the current filters. Try adjusting or clearing them.",
        )
    } else {
        (
            "No records yet",
            "Records will appear here once they are created.",
        )
    }
}

/// Placeholder shown instead of rows. The reset button only appears
/// while filters are narrowing the result.
#[component]
pub fn EmptyState(
    #[prop(into)] is_filtering: Signal<bool>,
    #[prop(optional)] on_reset: Option<Callback<()>>,
    /// Render as a table row spanning this many columns
    #[prop(optional)]
    col_span: Option<usize>,
) -> impl IntoView {
    let body = move || {
        let (title, message) = empty_state_text(is_filtering.get());
        view! {
            <div class="empty-state">
                <div class="empty-state__icon">{icon(Icon::Inbox)}</div>
                <div class="empty-state__title">{title}</div>
                <div class="empty-state__message">{message}</div>
                {move || match on_reset {
                    Some(reset) if is_filtering.get() => Some(view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset.run(())>
                            "Clear all filters"
                        </Button>
                    }),
                    _ => None,
                }}
            </div>
        }
    };

    match col_span {
        Some(span) => view! {
            <TableRow>
                <TableCell attr:colspan=span.to_string()>{body}</TableCell>
            </TableRow>
        }
        .into_any(),
        None => body.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_text() {
        assert_eq!(empty_state_text(true).0, "No matches found");
        assert_eq!(empty_state_text(false).0, "No records yet");
    }
}
