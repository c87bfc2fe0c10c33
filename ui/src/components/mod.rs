//! Shared building blocks for the dashboard screen.

pub mod flag_row;
pub mod history_row;
pub mod risk_badge;
pub mod stat_tile;
pub mod widgets;
