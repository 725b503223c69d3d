pub mod api;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod master;
pub mod modal;
pub mod number_format;
pub mod search;
