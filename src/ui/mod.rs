// SPDX-License-Identifier: MPL-2.0
//! User interface components.

pub mod design_tokens;
pub mod modal;
pub mod player;
pub mod question_dialog;
pub mod results_dialog;
pub mod styles;
