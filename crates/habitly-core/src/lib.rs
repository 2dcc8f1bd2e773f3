//! # Habitly Core Library
//!
//! This library provides the core business logic for the Habitly habit
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI front end being a
//! thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Streak Engine**: pure computations over a habit's completion history
//!   (current streak, longest streak, trailing-window completion rate)
//! - **Habit Model**: typed habit records with a calendar-date set for
//!   completions; duplicates are unrepresentable by construction
//! - **Store**: async REST client for the remote habit API
//! - **Session**: locally persisted user identity, bearer token in the
//!   OS keyring
//! - **Storage**: TOML-based configuration under `~/.config/habitly/`
//!
//! ## Key Components
//!
//! - [`streak::current_streak`]: the streak computation
//! - [`Habit`]: habit record with completion history
//! - [`HabitStore`]: remote CRUD and completion recording
//! - [`AuthSession`]: current user identity
//! - [`Config`]: application configuration management

pub mod browse;
pub mod error;
pub mod habit;
pub mod session;
pub mod stats;
pub mod storage;
pub mod store;
pub mod streak;

pub use browse::HabitFilter;
pub use error::{AuthError, ConfigError, CoreError, StoreError, ValidationError};
pub use habit::{CompletionHistory, Habit, HabitDraft, HabitPatch};
pub use session::{AuthSession, UserProfile};
pub use stats::{Dashboard, HabitProgress, WeekdayActivity};
pub use storage::Config;
pub use store::HabitStore;
