#![forbid(unsafe_code)]
pub mod api;
pub mod booking;
pub mod config;
pub mod dispatch;
pub mod form;
pub mod page;
pub mod site;
