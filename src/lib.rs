// SPDX-License-Identifier: MPL-2.0
//! `iced_campus` is a self-service information kiosk for a corporate-training
//! centre, built with the Iced GUI framework.
//!
//! Two shared components carry the application's state-transition logic: the
//! toast [`ui::notifications`] center and the cyclic [`ui::rotator`]. The
//! screens wire catalog content, forms and the simulated submission backend
//! through them. The crate also demonstrates internationalization with
//! Fluent and user preference management.

#![doc(html_root_url = "https://docs.rs/iced_campus/0.2.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod submission;
pub mod ui;
pub mod validation;
