//! Interaction events and the presentation-owned state they update.

use serde::{Deserialize, Serialize};

use crate::selection::{ClickData, SelectionPath};
use crate::table::{PageWindow, SortSpec};

/// What triggered a recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InteractionEvent {
    HierarchyClick(ClickData),
    PageChange(PageWindow),
    SortChange {
        #[serde(default)]
        sort: Option<SortSpec>,
    },
}

/// Inputs of one view computation. Owned by the presentation layer and
/// passed in on every call; the explorer keeps no copy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardState {
    #[serde(default)]
    pub click: Option<ClickData>,
    #[serde(default)]
    pub page: PageWindow,
    #[serde(default)]
    pub sort: Option<SortSpec>,
}

impl DashboardState {
    /// Folds one event into the state. Each event replaces only the input it
    /// carries.
    #[must_use]
    pub fn apply(self, event: InteractionEvent) -> Self {
        match event {
            InteractionEvent::HierarchyClick(click) => Self {
                click: Some(click),
                ..self
            },
            InteractionEvent::PageChange(page) => Self {
                page: page.normalized(),
                ..self
            },
            InteractionEvent::SortChange { sort } => Self { sort, ..self },
        }
    }

    pub fn selection(&self) -> SelectionPath {
        SelectionPath::from_click(self.click.as_ref())
    }

    #[must_use]
    pub fn with_click(mut self, click: ClickData) -> Self {
        self.click = Some(click);
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: PageWindow) -> Self {
        self.page = page.normalized();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort;
        self
    }
}
