//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules that need no I/O live on the entities themselves:
//! [`entities::BidDraft::admit`] builds the admission record and
//! [`entities::Bid::can_be_removed_by`] decides removal rights.
//!
//! # Modules
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`clock`] - Time source for admission timestamps

pub mod clock;
pub mod entities;
pub mod repositories;
