//! Panel value types: what a panel shows, how big it is, and its identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of content a panel displays.
///
/// Closed set; the catalog and the renderer table both match on it
/// exhaustively, so a new variant must be wired into both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelType {
    /// Headline KPIs (active clients, open projects, revenue).
    KpiSummary,
    /// Projects flagged as at risk of slipping.
    AtRiskProjects,
    /// Clients with overdue or disputed payments.
    PaymentRisk,
    /// Workload per team member.
    TeamLoad,
    /// Per-project risk cards.
    ProjectRiskCards,
    /// Revenue, costs and margin.
    Financials,
}

impl PanelType {
    /// Every panel type, in catalog order.
    pub const ALL: [PanelType; 6] = [
        PanelType::KpiSummary,
        PanelType::AtRiskProjects,
        PanelType::PaymentRisk,
        PanelType::TeamLoad,
        PanelType::ProjectRiskCards,
        PanelType::Financials,
    ];

    /// Stable kebab-case identifier, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            PanelType::KpiSummary => "kpi-summary",
            PanelType::AtRiskProjects => "at-risk-projects",
            PanelType::PaymentRisk => "payment-risk",
            PanelType::TeamLoad => "team-load",
            PanelType::ProjectRiskCards => "project-risk-cards",
            PanelType::Financials => "financials",
        }
    }
}

impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error type for parsing a [`PanelType`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePanelTypeError(pub String);

impl fmt::Display for ParsePanelTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid panel type: {}", self.0)
    }
}

impl std::error::Error for ParsePanelTypeError {}

impl FromStr for PanelType {
    type Err = ParsePanelTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PanelType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| ParsePanelTypeError(s.to_string()))
    }
}

/// Grid footprint of a panel.
///
/// Ordered from smallest to largest; [`PanelSize::next`] cycles through
/// the order and wraps back to `Small`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PanelSize {
    /// One column, one row.
    Small,
    /// Two columns, one row.
    #[default]
    Medium,
    /// Two columns, two rows.
    Large,
    /// Four columns, two rows.
    ExtraLarge,
}

impl PanelSize {
    /// Every size, smallest first.
    pub const ALL: [PanelSize; 4] = [
        PanelSize::Small,
        PanelSize::Medium,
        PanelSize::Large,
        PanelSize::ExtraLarge,
    ];

    /// The next size in the cycle small -> medium -> large -> extra-large -> small.
    pub fn next(self) -> Self {
        match self {
            PanelSize::Small => PanelSize::Medium,
            PanelSize::Medium => PanelSize::Large,
            PanelSize::Large => PanelSize::ExtraLarge,
            PanelSize::ExtraLarge => PanelSize::Small,
        }
    }

    /// Grid span as `(columns, rows)`.
    pub fn span(self) -> (u16, u16) {
        match self {
            PanelSize::Small => (1, 1),
            PanelSize::Medium => (2, 1),
            PanelSize::Large => (2, 2),
            PanelSize::ExtraLarge => (4, 2),
        }
    }

    /// Stable kebab-case identifier, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            PanelSize::Small => "small",
            PanelSize::Medium => "medium",
            PanelSize::Large => "large",
            PanelSize::ExtraLarge => "extra-large",
        }
    }
}

impl fmt::Display for PanelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error type for parsing a [`PanelSize`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePanelSizeError(pub String);

impl fmt::Display for ParsePanelSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid panel size: {}", self.0)
    }
}

impl std::error::Error for ParsePanelSizeError {}

impl FromStr for PanelSize {
    type Err = ParsePanelSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" | "s" => Ok(PanelSize::Small),
            "medium" | "m" => Ok(PanelSize::Medium),
            "large" | "l" => Ok(PanelSize::Large),
            "extra-large" | "xl" => Ok(PanelSize::ExtraLarge),
            _ => Err(ParsePanelSizeError(s.to_string())),
        }
    }
}

/// Opaque panel identifier, unique for the lifetime of the process and
/// across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(Uuid);

impl PanelId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PanelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PanelId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// One placed panel on the dashboard.
///
/// The panel type is fixed at creation; switching content is a remove
/// followed by an add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    id: PanelId,
    #[serde(rename = "type")]
    panel_type: PanelType,
    /// Current grid footprint.
    pub size: PanelSize,
    /// Hidden panels stay in the layout but are not rendered.
    #[serde(rename = "isVisible")]
    pub is_visible: bool,
}

impl Panel {
    /// Creates a visible, medium-sized panel with a fresh id.
    pub fn new(panel_type: PanelType) -> Self {
        Self {
            id: PanelId::new(),
            panel_type,
            size: PanelSize::default(),
            is_visible: true,
        }
    }

    /// The panel's identifier.
    pub fn id(&self) -> PanelId {
        self.id
    }

    /// What the panel displays.
    pub fn panel_type(&self) -> PanelType {
        self.panel_type
    }
}
