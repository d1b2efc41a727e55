pub mod components;
pub mod config;
pub mod crud;
pub mod debounce;
pub mod form;
pub mod export;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod list_view;
pub mod modal;
pub mod modals;
pub mod notifications;
pub mod page_frame;
pub mod storage;
pub mod theme;
