pub mod confirm_delete;
pub mod data_table;
pub mod empty_state;
pub mod filter_select;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod ui;
