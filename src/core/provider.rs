//! Data provider - the session's in-memory backing store
//!
//! The wizard core and commands never reach for fixture data directly;
//! they are handed a [`DataProvider`] at construction. The shipped
//! implementation is an in-memory store seeded with the product's demo
//! fixtures, so a real backend can be substituted without touching the
//! callers.

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::identity::{EntityId, EntityPrefix};
use crate::entities::account::{AccountType, PersonalInfo, Profile};
use crate::entities::activity::{
    Activity, ActivityKind, ActivityStatus, DashboardStats, PerformanceMetric, Trend,
};
use crate::entities::boat::{Boat, BoatStatus, BoxSize};
use crate::entities::box_request::BoxRequest;
use crate::entities::subscription::{BillingCycle, Subscription};

/// Read/write access to the front office's data
pub trait DataProvider {
    /// All boats in the fleet
    fn boats(&self) -> Vec<Boat>;

    /// Look up a boat by full id or case-insensitive name fragment
    fn find_boat(&self, query: &str) -> Option<Boat>;

    fn add_boat(&mut self, boat: Boat);

    /// Replace a boat by id; returns false when the id is unknown
    fn update_boat(&mut self, boat: Boat) -> bool;

    /// The signed-in account, if registration has completed
    fn profile(&self) -> Option<Profile>;

    fn set_profile(&mut self, profile: Profile);

    fn stats(&self) -> DashboardStats;

    /// Recent activities, newest first
    fn activities(&self) -> Vec<Activity>;

    fn performance(&self) -> Vec<PerformanceMetric>;

    fn record_activity(&mut self, activity: Activity);

    fn box_requests(&self) -> Vec<BoxRequest>;

    fn record_box_request(&mut self, request: BoxRequest);
}

/// In-memory provider scoped to one CLI invocation
///
/// Mutations land in this struct only and vanish with the process; every
/// write is also logged to the console so the session leaves a trace.
#[derive(Debug, Default)]
pub struct SessionProvider {
    boats: Vec<Boat>,
    profile: Option<Profile>,
    stats: DashboardStats,
    activities: Vec<Activity>,
    performance: Vec<PerformanceMetric>,
    box_requests: Vec<BoxRequest>,
}

impl SessionProvider {
    /// An empty provider, used by wizard sessions starting from scratch
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider seeded with the demo fixtures the product ships with
    pub fn seeded() -> Self {
        Self {
            boats: seed_boats(),
            profile: Some(seed_profile()),
            stats: DashboardStats {
                active_boxes: 245,
                pending_boxes: 32,
                total_revenue: 45_750,
                total_boats: 8,
                active_boats: 6,
                completed_requests: 127,
                pending_requests: 15,
            },
            activities: seed_activities(),
            performance: seed_performance(),
            box_requests: Vec::new(),
        }
    }
}

impl DataProvider for SessionProvider {
    fn boats(&self) -> Vec<Boat> {
        self.boats.clone()
    }

    fn find_boat(&self, query: &str) -> Option<Boat> {
        if let Ok(id) = query.parse::<EntityId>() {
            if let Some(boat) = self.boats.iter().find(|b| b.id == id) {
                return Some(boat.clone());
            }
        }
        let needle = query.to_lowercase();
        self.boats
            .iter()
            .find(|b| b.name.to_lowercase().contains(&needle))
            .cloned()
    }

    fn add_boat(&mut self, boat: Boat) {
        self.stats.total_boats += 1;
        if boat.status == BoatStatus::Active {
            self.stats.active_boats += 1;
        }
        self.boats.push(boat);
    }

    fn update_boat(&mut self, boat: Boat) -> bool {
        match self.boats.iter_mut().find(|b| b.id == boat.id) {
            Some(slot) => {
                if slot.status == BoatStatus::Active && boat.status != BoatStatus::Active {
                    self.stats.active_boats = self.stats.active_boats.saturating_sub(1);
                } else if slot.status != BoatStatus::Active && boat.status == BoatStatus::Active {
                    self.stats.active_boats += 1;
                }
                *slot = boat;
                true
            }
            None => false,
        }
    }

    fn profile(&self) -> Option<Profile> {
        self.profile.clone()
    }

    fn set_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    fn stats(&self) -> DashboardStats {
        self.stats
    }

    fn activities(&self) -> Vec<Activity> {
        self.activities.clone()
    }

    fn performance(&self) -> Vec<PerformanceMetric> {
        self.performance.clone()
    }

    fn record_activity(&mut self, activity: Activity) {
        self.activities.insert(0, activity);
    }

    fn box_requests(&self) -> Vec<BoxRequest> {
        self.box_requests.clone()
    }

    fn record_box_request(&mut self, request: BoxRequest) {
        self.stats.pending_requests += 1;
        self.box_requests.push(request);
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn timestamp(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid fixture timestamp")
}

#[allow(clippy::too_many_arguments)]
fn boat(
    name: &str,
    registration: &str,
    captain: &str,
    capacity: u32,
    box_size: BoxSize,
    status: BoatStatus,
    utilization: u8,
    boxes_used: u32,
) -> Boat {
    let available = capacity - capacity * u32::from(utilization) / 100;
    Boat {
        id: EntityId::new(EntityPrefix::Boat),
        name: name.to_string(),
        registration_number: registration.to_string(),
        captain_name: captain.to_string(),
        capacity,
        box_size,
        status,
        last_maintenance_date: Some(date(2024, 1, 10)),
        current_utilization: Some(utilization),
        total_boxes_used: Some(boxes_used),
        available_capacity: Some(available),
    }
}

fn seed_boats() -> Vec<Boat> {
    vec![
        boat(
            "Sea Explorer",
            "EG-2024-001",
            "Hassan Farouk",
            320,
            BoxSize::Kg20,
            BoatStatus::Active,
            72,
            1840,
        ),
        boat(
            "Nile Star",
            "EG-2024-002",
            "Karim Abdel Aziz",
            180,
            BoxSize::Kg25,
            BoatStatus::Active,
            55,
            960,
        ),
        boat(
            "Alexandria Pearl",
            "EG-2023-117",
            "Tarek El Sayed",
            450,
            BoxSize::Kg20,
            BoatStatus::Active,
            88,
            3120,
        ),
        boat(
            "Red Sea Runner",
            "EG-2023-094",
            "Omar Ghoneim",
            260,
            BoxSize::Kg25,
            BoatStatus::Active,
            40,
            720,
        ),
        boat(
            "Damietta Dawn",
            "EG-2022-311",
            "Sameh Lotfy",
            150,
            BoxSize::Kg20,
            BoatStatus::Active,
            63,
            1410,
        ),
        boat(
            "Golden Net",
            "EG-2022-278",
            "Mahmoud Saber",
            90,
            BoxSize::Kg20,
            BoatStatus::Active,
            25,
            310,
        ),
        boat(
            "Blue Horizon",
            "EG-2021-160",
            "Adel Ramzy",
            200,
            BoxSize::Kg25,
            BoatStatus::Maintenance,
            0,
            2050,
        ),
        boat(
            "Port Said Breeze",
            "EG-2019-042",
            "Fathy Nour",
            120,
            BoxSize::Kg20,
            BoatStatus::Retired,
            0,
            4480,
        ),
    ]
}

fn seed_profile() -> Profile {
    Profile {
        id: EntityId::new(EntityPrefix::Acct),
        account_type: AccountType::Producer,
        personal: PersonalInfo {
            full_name: "Ahmed Mansour".to_string(),
            phone: "01012345678".to_string(),
            national_id: "29805211234567".to_string(),
            company_name: "Mansour Fisheries".to_string(),
            agree_terms: true,
        },
        subscription: Some(Subscription {
            plan: BillingCycle::Monthly,
            active_since: date(2024, 1, 1),
        }),
        created: timestamp("2024-01-01T08:00:00Z"),
    }
}

fn seed_activities() -> Vec<Activity> {
    let entry = |kind, description: &str, ts, status| Activity {
        id: EntityId::new(EntityPrefix::Actv),
        kind,
        description: description.to_string(),
        timestamp: timestamp(ts),
        status,
    };
    vec![
        entry(
            ActivityKind::BoxRequest,
            "New box request from Ahmed Hassan - 5 Premium boxes",
            "2024-01-18T10:30:00Z",
            ActivityStatus::Pending,
        ),
        entry(
            ActivityKind::PaymentReceived,
            "Payment received - EGP 750 from Mohamed Ali",
            "2024-01-18T09:15:00Z",
            ActivityStatus::Completed,
        ),
        entry(
            ActivityKind::BoxHandover,
            "Box handover completed - BOX-001 returned by Fatma Omar",
            "2024-01-18T08:45:00Z",
            ActivityStatus::Completed,
        ),
        entry(
            ActivityKind::BoatAdded,
            "New boat added to fleet - Sea Explorer",
            "2024-01-17T16:20:00Z",
            ActivityStatus::Completed,
        ),
        entry(
            ActivityKind::BoxRequest,
            "Express delivery request - 3 Large boxes",
            "2024-01-17T14:10:00Z",
            ActivityStatus::InProgress,
        ),
    ]
}

fn seed_performance() -> Vec<PerformanceMetric> {
    let metric = |label: &str, value, change, trend| PerformanceMetric {
        label: label.to_string(),
        value,
        change,
        trend,
    };
    vec![
        metric("Box Utilization", 87, 5, Trend::Up),
        metric("Fleet Efficiency", 92, -2, Trend::Down),
        metric("Revenue Growth", 15, 8, Trend::Up),
        metric("Customer Satisfaction", 94, 3, Trend::Up),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_fleet_matches_dashboard_stats() {
        let provider = SessionProvider::seeded();
        let stats = provider.stats();
        let boats = provider.boats();
        assert_eq!(boats.len() as u32, stats.total_boats);
        assert_eq!(
            boats
                .iter()
                .filter(|b| b.status == BoatStatus::Active)
                .count() as u32,
            stats.active_boats
        );
    }

    #[test]
    fn test_find_boat_by_name_fragment() {
        let provider = SessionProvider::seeded();
        let boat = provider.find_boat("sea explorer").unwrap();
        assert_eq!(boat.registration_number, "EG-2024-001");
        assert!(provider.find_boat("no such boat").is_none());
    }

    #[test]
    fn test_find_boat_by_id() {
        let provider = SessionProvider::seeded();
        let id = provider.boats()[2].id.clone();
        let boat = provider.find_boat(&id.to_string()).unwrap();
        assert_eq!(boat.id, id);
    }

    #[test]
    fn test_add_boat_updates_stats() {
        let mut provider = SessionProvider::seeded();
        let before = provider.stats();
        provider.add_boat(seed_boats().remove(0));
        let after = provider.stats();
        assert_eq!(after.total_boats, before.total_boats + 1);
        assert_eq!(after.active_boats, before.active_boats + 1);
    }

    #[test]
    fn test_update_boat_tracks_active_count() {
        let mut provider = SessionProvider::seeded();
        let mut boat = provider.find_boat("Golden Net").unwrap();
        let before = provider.stats().active_boats;

        boat.status = BoatStatus::Retired;
        assert!(provider.update_boat(boat));
        assert_eq!(provider.stats().active_boats, before - 1);
    }

    #[test]
    fn test_record_activity_prepends() {
        let mut provider = SessionProvider::seeded();
        let activity = Activity {
            id: EntityId::new(EntityPrefix::Actv),
            kind: ActivityKind::BoatAdded,
            description: "New boat added to fleet - Test".to_string(),
            timestamp: timestamp("2024-01-19T12:00:00Z"),
            status: ActivityStatus::Completed,
        };
        provider.record_activity(activity.clone());
        assert_eq!(provider.activities()[0].id, activity.id);
    }
}
