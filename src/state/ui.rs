#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state: the mobile navigation menu.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Tabs in the dashboard sidebar. Independent of the main view selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Events,
    Board,
    Links,
}

impl DashboardTab {
    pub const ALL: [Self; 3] = [Self::Events, Self::Board, Self::Links];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Events => "Events",
            Self::Board => "Message Board",
            Self::Links => "Resources",
        }
    }
}
