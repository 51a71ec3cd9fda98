//! Ranks the merchants a spend summary shows the most money going to since the most
//! recent Monday.
//!
//! The stages run strictly in order: [`loader`] parses the upload, [`filters`] keeps this
//! week's debit purchases, [`aggregation`] ranks them and a [`presenter`] renders the
//! result. [`engine::SpendPipeline`] wires the stages together.

pub mod aggregation;
pub mod calendar;
pub mod engine;
pub mod filters;
pub mod loader;
pub mod models;
pub mod presenter;
pub mod types;
