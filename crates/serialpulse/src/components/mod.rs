//! UI components

pub mod chart;
pub mod entity_list;
pub mod status_bar;
