//! Pure career and balance logic for BitNode runs.
//!
//! This crate contains the game rules that do not depend on any UI,
//! save-game format, or engine loop. Functions take plain data and return
//! results, so they are unit-testable and usable from the headless harness
//! as well as any front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`application`] | Apply-to-job hints: next rung, availability, requirement text |
//! | [`bitnode`] | BitNode identifiers, key resolution, Source-File levels |
//! | [`catalog`] | Job tracks, positions, companies; JSON loading and validation |
//! | [`constants`] | Fixed costs and base values shared across modules |
//! | [`ladder`] | Position ladder resolution (highest qualifying rung) |
//! | [`multipliers`] | Per-BitNode balance multiplier table |
//! | [`player`] | Player stats snapshot and the qualification predicate |
//! | [`stock_market`] | Stock market access costs scaled by BitNode |

pub mod application;
pub mod bitnode;
pub mod catalog;
pub mod constants;
pub mod ladder;
pub mod multipliers;
pub mod player;
pub mod stock_market;
