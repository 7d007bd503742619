use crate::model::MAX_APPLICATIONS;
use std::fmt;

/// Icon next to the application count of a node card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppsIcon {
    Set,
    Unset,
}

impl AppsIcon {
    pub fn name(self) -> &'static str {
        match self {
            AppsIcon::Set => "check_circle_outline",
            AppsIcon::Unset => "error",
        }
    }
}

/// Status icon of a whole node card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatusIcon {
    Configured,
    NotConfigured,
}

impl NodeStatusIcon {
    pub fn from_configured(configured: bool) -> Self {
        if configured {
            NodeStatusIcon::Configured
        } else {
            NodeStatusIcon::NotConfigured
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NodeStatusIcon::Configured => "fas fa-check-circle fa-2x",
            NodeStatusIcon::NotConfigured => "fas fa-times-circle fa-2x",
        }
    }
}

/// Explanation shown while a node's applications are not configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppsTooltip {
    InvalidQuantity,
    AboveMaximum(u32),
    NotConfigured,
}

impl fmt::Display for AppsTooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppsTooltip::InvalidQuantity => write!(f, "Invalid quantity!"),
            AppsTooltip::AboveMaximum(max) => write!(f, "The maximum value is {}!", max),
            AppsTooltip::NotConfigured => write!(f, "Applications are not configured!"),
        }
    }
}

/// Raw inputs the application status is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInputs {
    /// Requested number of applications.
    pub target: u32,
    /// Sum of the quantities of the applications defined so far.
    pub configured_total: u32,
    pub dialog_valid: bool,
    pub form_valid: bool,
}

/// Derived application state of a node. Always computed as a whole from
/// [`StatusInputs`], never patched flag by flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppsStatus {
    pub configured: bool,
    pub icon: AppsIcon,
    /// `None` while configured.
    pub tooltip: Option<AppsTooltip>,
}

impl AppsStatus {
    pub fn derive(inputs: StatusInputs) -> Self {
        let configured =
            inputs.dialog_valid && inputs.form_valid && inputs.configured_total == inputs.target;
        if configured {
            return Self {
                configured,
                icon: AppsIcon::Set,
                tooltip: None,
            };
        }

        let tooltip = if inputs.target > MAX_APPLICATIONS {
            AppsTooltip::AboveMaximum(MAX_APPLICATIONS)
        } else if inputs.target == 0 {
            AppsTooltip::InvalidQuantity
        } else {
            AppsTooltip::NotConfigured
        };
        Self {
            configured,
            icon: AppsIcon::Unset,
            tooltip: Some(tooltip),
        }
    }
}
