pub mod action_checklist;
pub mod comparison_table;
pub mod future_potential;
pub mod kpi_card;
pub mod loading_analysis;
pub mod toast;
pub mod winner_card;
