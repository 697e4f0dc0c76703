//! Core module - wizard state, pricing, and session services

pub mod config;
pub mod draft;
pub mod i18n;
pub mod identity;
pub mod otp;
pub mod pricing;
pub mod provider;
pub mod sequencer;

pub use config::{Config, ConfigError};
pub use draft::DraftAccumulator;
pub use i18n::{Catalog, Locale, TextDirection};
pub use identity::{EntityId, EntityPrefix, IdParseError};
pub use otp::{MockOtpService, OtpService};
pub use pricing::{PlanCosts, PricingQuote, BASE_RATE};
pub use provider::{DataProvider, SessionProvider};
pub use sequencer::{steps_for, StepId, StepSequencer};
