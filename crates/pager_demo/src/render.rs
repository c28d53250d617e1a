use pager_core::{Footer, ListStatus, ListViewModel, Placeholder};

/// Text rendering of one status: a header line, the rows, then the footer.
pub fn render(status: &ListStatus<String>) -> Vec<String> {
    let view = ListViewModel::from_status(status);
    let mut lines = vec![format!("[{}] {} items", view.phase, view.item_count)];

    match view.placeholder {
        Some(Placeholder::NotLoaded) => lines.push("  (pull to load)".to_string()),
        Some(Placeholder::NoItems) => lines.push("  (nothing here yet)".to_string()),
        None => {}
    }
    lines.extend(status.items().iter().map(|item| format!("  - {item}")));

    match view.footer {
        Footer::None => {}
        Footer::Spinner => lines.push("  ...loading".to_string()),
        Footer::NoMoreItems => lines.push("  -- no more items --".to_string()),
        Footer::Error(message) => lines.push(format!("  !! {message} (tap to retry)")),
    }
    lines
}
