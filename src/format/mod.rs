//! Message formatting utilities: template interpolation and ANSI stripping

pub mod ansi;
pub mod template;

pub use ansi::{has_ansi_color_codes, strip_ansi_color_codes, strip_colors};
pub use template::{format_message, format_message_with, render_value};
