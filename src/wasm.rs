//! WASM bindings for hwpmath
//!
//! This module provides JavaScript-accessible functions for LaTeX → Unicode
//! and LaTeX → HwpEqn conversion.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Safely serialize a value to JsValue, returning an error object on failure.
#[cfg(feature = "wasm")]
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj = ConvertResult {
            output: String::new(),
            success: false,
            error: Some(format!("Serialization error: {}", e)),
            warnings: vec![],
        };
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output (the original input when conversion failed)
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Constructs left unconverted
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert LaTeX math to Unicode text. Never fails.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "latexToUnicode")]
pub fn latex_to_unicode_wasm(input: &str) -> String {
    crate::latex_to_unicode(input)
}

/// Convert LaTeX math to Unicode text and list what stayed unconverted.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "latexToUnicodeWithReport")]
pub fn latex_to_unicode_with_report_wasm(input: &str) -> JsValue {
    let converted = crate::latex_to_unicode_with_report(input);
    let warnings = converted
        .report
        .losses
        .iter()
        .map(|loss| match &loss.snippet {
            Some(snippet) => format!("{}: {}", loss.message, snippet),
            None => loss.message.clone(),
        })
        .collect();
    to_js_value(&ConvertResult {
        output: converted.content,
        success: true,
        error: None,
        warnings,
    })
}

/// Convert LaTeX math to HwpEqn.
///
/// On a parse error `success` is false and `output` holds the input unchanged.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "latexToHwpeqn")]
pub fn latex_to_hwpeqn_wasm(input: &str) -> JsValue {
    let result = match crate::latex_to_hwpeqn(input) {
        Ok(output) => ConvertResult {
            output,
            success: true,
            error: None,
            warnings: vec![],
        },
        Err(e) => ConvertResult {
            output: input.to_string(),
            success: false,
            error: Some(format!("Failed to convert LaTeX: {}", e)),
            warnings: vec![],
        },
    };
    to_js_value(&result)
}
