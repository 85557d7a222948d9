//! Core domain types for the Fernweh recommendation engine.
//!
//! The engine scores a read-only destination catalog against an ephemeral
//! [`UserProfile`]. This crate holds the vocabulary shared by every stage of
//! that pipeline: the 16-valued [`PersonalityCode`], the six-axis
//! [`TraitVector`], the five-element [`ElementVector`], and the catalog's
//! [`Destination`] entry. Constructors and setters keep downstream components
//! honest by clamping weights into range and by making invalid personality
//! codes unrepresentable past the parse boundary.

#![forbid(unsafe_code)]

mod destination;
mod elements;
mod personality;
mod profile;
mod traits;

pub use destination::{Destination, Region, Theme};
pub use elements::{Element, ElementVector};
pub use personality::{InvalidCodeError, PersonalityCode};
pub use profile::{CompanionType, RegionFilter, UserProfile};
pub use traits::{Trait, TraitVector};
