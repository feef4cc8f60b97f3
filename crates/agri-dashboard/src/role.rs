//! Role capability table
//!
//! Everything that differs between farmer, retailer and consumer views is a
//! row in [`PROFILES`]. Callers look a row up instead of branching on the
//! role.

use agri_model::Role;
use std::fmt;

/// Navigable section of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Role dashboard
    Dashboard,
    /// Product list
    Products,
    /// Code scanner
    QrScanner,
    /// Read-only ledger
    Ledger,
    /// Network analytics
    Analytics,
}

impl Section {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Products => "products",
            Self::QrScanner => "scanner",
            Self::Ledger => "blockchain",
            Self::Analytics => "analytics",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Target section
    pub section: Section,
    /// Label shown to the user
    pub label: &'static str,
}

/// Per-role presentation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    /// Role this row describes
    pub role: Role,
    /// Human-readable role name
    pub display_name: &'static str,
    /// Heading of the product list view
    pub product_list_title: &'static str,
    /// Navigation entries, in order
    pub navigation: &'static [NavItem],
}

const DASHBOARD: NavItem = NavItem {
    section: Section::Dashboard,
    label: "Dashboard",
};

const LEDGER: NavItem = NavItem {
    section: Section::Ledger,
    label: "Blockchain Ledger",
};

/// One row per role
pub static PROFILES: [RoleProfile; 3] = [
    RoleProfile {
        role: Role::Farmer,
        display_name: "Farmer",
        product_list_title: "My Products",
        navigation: &[
            DASHBOARD,
            NavItem {
                section: Section::Products,
                label: "My Products",
            },
            LEDGER,
        ],
    },
    RoleProfile {
        role: Role::Retailer,
        display_name: "Retailer/Distributor",
        product_list_title: "Inventory",
        navigation: &[
            DASHBOARD,
            NavItem {
                section: Section::Products,
                label: "Inventory",
            },
            LEDGER,
            NavItem {
                section: Section::Analytics,
                label: "Analytics",
            },
        ],
    },
    RoleProfile {
        role: Role::Consumer,
        display_name: "Consumer",
        product_list_title: "Available Products",
        navigation: &[
            DASHBOARD,
            NavItem {
                section: Section::Products,
                label: "Products",
            },
            NavItem {
                section: Section::QrScanner,
                label: "QR Scanner",
            },
            LEDGER,
        ],
    },
];

/// Profile row for `role`
#[must_use]
pub fn profile(role: Role) -> &'static RoleProfile {
    match role {
        Role::Farmer => &PROFILES[0],
        Role::Retailer => &PROFILES[1],
        Role::Consumer => &PROFILES[2],
    }
}

/// Navigation entries for `role`, in display order
#[must_use]
pub fn navigation(role: Role) -> &'static [NavItem] {
    profile(role).navigation
}

/// Whether `role` can reach `section`
#[must_use]
pub fn can_access(role: Role, section: Section) -> bool {
    navigation(role).iter().any(|item| item.section == section)
}
