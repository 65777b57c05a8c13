//! WebAssembly bindings for the calculator.
//!
//! This module provides JavaScript-friendly wrappers around both calculators.

use wasm_bindgen::prelude::*;
use crate::calc::{read_equations, run_batch, solve};
use crate::expr::{infix_to_postfix, postfix_strings, Mode};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WebAssembly-friendly calculator with a fixed mode.
#[wasm_bindgen]
pub struct WasmCalculator {
    mode: Mode,
}

#[wasm_bindgen]
impl WasmCalculator {
    /// Create a calculator; `mode` is `"std"` or `"dbz"`.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str) -> Result<WasmCalculator, JsError> {
        let mode = mode.parse::<Mode>().map_err(|e| JsError::new(&e))?;
        Ok(Self { mode })
    }

    /// The calculator's mode as `"STD"` or `"DBZ"`.
    #[wasm_bindgen]
    pub fn mode(&self) -> String {
        self.mode.to_string()
    }

    /// Evaluate one equation and return its formatted outcome.
    #[wasm_bindgen]
    pub fn evaluate(&self, equation: &str) -> String {
        solve(self.mode, equation).to_string()
    }

    /// Evaluate one equation and return the outcome as JSON.
    #[wasm_bindgen]
    pub fn evaluate_json(&self, equation: &str) -> Result<String, JsError> {
        serde_json::to_string(&solve(self.mode, equation))
            .map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// Evaluate newline-separated equations; results are newline-separated.
    #[wasm_bindgen]
    pub fn run_batch(&self, text: &str) -> Result<String, JsError> {
        let equations = read_equations(text.as_bytes())
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(run_batch(self.mode, &equations, false).results().join("\n"))
    }
}

/// Convert an infix equation to an array of postfix token strings.
#[wasm_bindgen]
pub fn wasm_postfix(equation: &str) -> Result<js_sys::Array, JsError> {
    let postfix = infix_to_postfix(equation)
        .map_err(|e| JsError::new(&format!("{}", e)))?;
    Ok(postfix_strings(&postfix)
        .into_iter()
        .map(JsValue::from)
        .collect())
}
