//! Rendering backends.
//!
//! The cache core only knows the [`Renderer`] trait; the built-in backend
//! here covers the closed style set for the built-in locales. Hosts with a
//! platform formatting service can swap in their own implementation.

mod number;
mod spellout;

use crate::error::RenderError;
use crate::handle::{FormatterHandle, StyleMode};
use crate::value::Number;

/// The render capability: turns a configured formatter handle and a numeric
/// value into text.
///
/// Rendering is synchronous, deterministic for given inputs, and must not
/// panic for well-formed handles; unrenderable inputs are reported as errors.
pub trait Renderer {
    fn render(&self, value: Number, handle: &FormatterHandle) -> Result<String, RenderError>;
}

/// The built-in locale-aware backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRenderer;

impl Renderer for BuiltinRenderer {
    fn render(&self, value: Number, handle: &FormatterHandle) -> Result<String, RenderError> {
        // Non-finite values have no displayable representation in any mode.
        if !value.value.is_finite() {
            return Err(RenderError::NonFinite { value: value.value });
        }

        match handle.mode {
            StyleMode::Decimal => Ok(number::decimal(value.value, handle)),
            StyleMode::Currency => Ok(number::currency(value.value, handle)),
            StyleMode::Percent => Ok(number::percent(value.value, handle)),
            StyleMode::Scientific => Ok(number::scientific(value.value, &handle.locale)),
            StyleMode::SpellOut => spellout::spell_out(value, &handle.locale),
            StyleMode::Ordinal => spellout::ordinal(value, &handle.locale),
        }
    }
}
