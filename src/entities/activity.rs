//! Dashboard feed types - stats, activities, and performance metrics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;

/// What a dashboard activity records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    BoxRequest,
    BoxHandover,
    BoatAdded,
    PaymentReceived,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::BoxRequest => write!(f, "box_request"),
            ActivityKind::BoxHandover => write!(f, "box_handover"),
            ActivityKind::BoatAdded => write!(f, "boat_added"),
            ActivityKind::PaymentReceived => write!(f, "payment_received"),
        }
    }
}

/// Progress state of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Completed,
    Pending,
    InProgress,
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityStatus::Completed => write!(f, "completed"),
            ActivityStatus::Pending => write!(f, "pending"),
            ActivityStatus::InProgress => write!(f, "in_progress"),
        }
    }
}

/// A recent-activity feed entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub status: ActivityStatus,
}

/// Key metrics shown at the top of the producer dashboard
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub active_boxes: u32,
    pub pending_boxes: u32,
    pub total_revenue: u32,
    pub total_boats: u32,
    pub active_boats: u32,
    pub completed_requests: u32,
    pub pending_requests: u32,
}

/// Direction of a performance metric since last period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Arrow glyph for terminal display
    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

/// A single performance gauge (percentage plus period-over-period change)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub label: String,
    pub value: i32,
    pub change: i32,
    pub trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_kind_serde_is_snake_case() {
        let json = serde_json::to_string(&ActivityKind::PaymentReceived).unwrap();
        assert_eq!(json, "\"payment_received\"");
    }

    #[test]
    fn test_trend_glyphs() {
        assert_eq!(Trend::Up.glyph(), "↑");
        assert_eq!(Trend::Down.glyph(), "↓");
        assert_eq!(Trend::Stable.glyph(), "→");
    }
}
