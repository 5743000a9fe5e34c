//! Rick & Morty Table Library
//!
//! Loads every character from the public API once, then lets the user
//! filter, sort and page through them in a native GPUI window.

rust_i18n::i18n!("locales", fallback = "en");

pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod states;
pub mod views;
