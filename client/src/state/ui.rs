//! Dashboard chrome state: which sidebar section is showing.
//!
//! DESIGN
//! ======
//! Only presentation lives here. Backend data is held by the panels that
//! fetch it, so switching sections never touches a remote resource.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Sidebar destinations, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Dashboard,
    LiveShipments,
    AiPredictions,
    Warehouses,
    OrdersInventory,
    Reports,
    Settings,
}

impl Section {
    pub const ALL: [Self; 7] = [
        Self::Dashboard,
        Self::LiveShipments,
        Self::AiPredictions,
        Self::Warehouses,
        Self::OrdersInventory,
        Self::Reports,
        Self::Settings,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::LiveShipments => "Live Shipments",
            Self::AiPredictions => "AI Predictions",
            Self::Warehouses => "Warehouses",
            Self::OrdersInventory => "Orders & Inventory",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }

    /// Whether the section renders backend data yet.
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, Self::Dashboard | Self::LiveShipments | Self::AiPredictions)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub section: Section,
    pub sidebar_collapsed: bool,
}
