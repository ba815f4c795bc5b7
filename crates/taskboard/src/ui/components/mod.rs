/*
[INPUT]:  Module declarations for UI components.
[OUTPUT]: Public module exports for TUI component modules.
[POS]:    UI components module registry.
[UPDATE]: When adding or removing a component.
*/
pub mod detail_view;
pub mod filter_bar;
pub mod format;
pub mod help;
pub mod insights;
pub mod menu_bar;
pub mod modal;
pub mod single_select;
pub mod status_bar;
pub mod task_form;
pub mod task_table;
