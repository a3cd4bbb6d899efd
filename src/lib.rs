// src/lib.rs
pub mod attachment_handler;
pub mod bridge;
pub mod config;
pub mod data_types;
pub mod decoder;
pub mod error;
pub mod files;
pub mod html;
pub mod picker;
pub mod session;
pub mod spreadsheet_handler;
pub mod ui;
pub mod workbook;
