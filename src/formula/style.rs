//! Formula style settings
//!
//! Names and constants that shape the emitted expression. They can be
//! overridden from settings.json or the command line.

use serde::{Deserialize, Serialize};

/// Default divisor applied to font units before scaling
pub const DEFAULT_NORMALIZATION: f64 = 1500.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaStyle {
    /// Font units are divided by this before the scale factor is applied
    pub normalization: f64,
    /// Name of the quadratic Bezier helper function in the target graph
    pub quadratic_fn: String,
    /// Name of the cubic Bezier helper function in the target graph
    pub cubic_fn: String,
}

impl Default for FormulaStyle {
    fn default() -> Self {
        Self {
            normalization: DEFAULT_NORMALIZATION,
            quadratic_fn: r"b_{ezier2}".to_string(),
            cubic_fn: r"b_{ezier3}".to_string(),
        }
    }
}

impl FormulaStyle {
    /// Check values that would make the formula meaningless
    pub fn validate(&self) -> Result<(), String> {
        if !self.normalization.is_finite() || self.normalization <= 0.0 {
            return Err(format!(
                "Invalid normalization: {}\nIt must be a positive number.",
                self.normalization
            ));
        }
        if self.quadratic_fn.trim().is_empty() || self.cubic_fn.trim().is_empty() {
            return Err("Bezier helper function names must not be empty".to_string());
        }
        Ok(())
    }

    /// Definitions of the two Bezier helpers the glyph formulas call
    pub fn helper_definitions(&self) -> [String; 2] {
        [
            format!(
                r"{}\left(a,\ b,\ c,\ t\right)=\left(1-t\right)^{{2}}a+2\left(1-t\right)tb+t^{{2}}c",
                self.quadratic_fn
            ),
            format!(
                r"{}\left(a,\ b,\ c,\ d,\ t\right)=\left(1-t\right)^{{3}}a+3\left(1-t\right)^{{2}}tb+3\left(1-t\right)t^{{2}}c+t^{{3}}d",
                self.cubic_fn
            ),
        ]
    }
}
