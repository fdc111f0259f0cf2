//! Contest aggregate: lifecycle status, format and player roster.
//!
//! A [`Contest`] owns its [`Player`]s. The roster can only change while the
//! contest is in [`ContestStatus::PreRegistration`], and the status only moves
//! forward through the table in [`VALID_TRANSITIONS`].
//!
//! ## Example
//!
//! ```
//! use contest_core::contest::{Contest, ContestFormat, ContestStatus};
//! use contest_core::ids::GameTitleId;
//!
//! let mut contest =
//!     Contest::new("Weekly #12", GameTitleId::new(), ContestFormat::SingleElimination, 3)?;
//! contest.add_player("Alice", Some(1))?;
//! contest.add_player("Bob", None)?;
//! contest.transition_status(ContestStatus::InProgress)?;
//!
//! assert!(contest.add_player("Late", None).is_err());
//! # Ok::<(), contest_core::errors::DomainError>(())
//! ```

pub mod models;
pub mod state_machine;

pub use models::{ContestFormat, ContestStatus, Player, VALID_TRANSITIONS};
pub use state_machine::Contest;
