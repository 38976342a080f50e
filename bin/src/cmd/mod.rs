//! CLI subcommand modules.
//!
//! This module contains the implementations for all investezy CLI subcommands.

pub(crate) mod beginner;
pub(crate) mod compare;
pub(crate) mod health;
pub(crate) mod metrics;
pub(crate) mod portfolio;
pub(crate) mod predict;
pub(crate) mod rank;
pub(crate) mod stock;
