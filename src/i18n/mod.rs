// SPDX-License-Identifier: MPL-2.0
//! Internationalization support built on Fluent.
//!
//! Locale resolution order: CLI argument, configuration file, OS locale,
//! falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
