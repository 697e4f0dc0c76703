//! Entity type definitions
//!
//! Selal's front office works with the following entity types:
//!
//! **Accounts:**
//! - [`AccountType`] - Role in the supply chain (producer, wholesaler, ...)
//! - [`PersonalInfo`] - Validated personal-information step output
//! - [`Profile`] - A registered account with optional subscription
//!
//! **Fleet:**
//! - [`Boat`] - A registered boat with status and utilization
//! - [`BoatConfig`] / [`FleetConfig`] - Wizard fleet configuration
//!
//! **Commerce:**
//! - [`BillingCycle`] / [`Subscription`] - Producer subscription tiers
//! - [`BoxType`] / [`BoxRequest`] - Box ordering
//! - [`PaymentMethod`] / [`PaymentInfo`] - Payment step output
//!
//! **Dashboard:**
//! - [`Activity`], [`DashboardStats`], [`PerformanceMetric`]

pub mod account;
pub mod activity;
pub mod boat;
pub mod box_request;
pub mod payment;
pub mod subscription;

pub use account::{AccountType, PersonalInfo, Profile};
pub use activity::{Activity, ActivityKind, ActivityStatus, DashboardStats, PerformanceMetric, Trend};
pub use boat::{Boat, BoatConfig, BoatStatus, BoxSize, FleetConfig};
pub use box_request::{BoxRequest, BoxType, TIME_SLOTS};
pub use payment::{PaymentInfo, PaymentMethod};
pub use subscription::{BillingCycle, Subscription};
