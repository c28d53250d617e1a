use crate::ListStatus;

/// What to show in place of rows when the list has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// No load attempted yet.
    NotLoaded,
    /// A load succeeded and returned nothing.
    NoItems,
}

/// Affordance rendered after the last row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Footer {
    #[default]
    None,
    Spinner,
    NoMoreItems,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    pub phase: &'static str,
    pub item_count: usize,
    pub show_spinner: bool,
    pub placeholder: Option<Placeholder>,
    pub footer: Footer,
    /// Whether the surface should offer `LoadMore` now.
    pub can_load_more: bool,
    pub dirty: bool,
}

impl ListViewModel {
    pub fn from_status<T>(status: &ListStatus<T>) -> Self {
        let placeholder = match status {
            ListStatus::Idle => Some(Placeholder::NotLoaded),
            ListStatus::Loaded(items) if items.is_empty() => Some(Placeholder::NoItems),
            _ => None,
        };
        let footer = match status {
            ListStatus::Loading(_) => Footer::Spinner,
            ListStatus::Exhausted(_) => Footer::NoMoreItems,
            ListStatus::Failed { error, .. } => Footer::Error(error.to_string()),
            ListStatus::Idle | ListStatus::Loaded(_) => Footer::None,
        };
        Self {
            phase: status.label(),
            item_count: status.item_count(),
            show_spinner: status.is_loading(),
            placeholder,
            footer,
            can_load_more: matches!(status, ListStatus::Loaded(_) | ListStatus::Failed { .. }),
            dirty: false,
        }
    }
}
