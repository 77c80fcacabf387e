//! WebAssembly bindings for the `libdms` crate.
//!
//! Parsers return `[longitude, latitude]` arrays and throw a string describing the error on
//! failure. The function names follow JavaScript conventions (`fromDMS`, `toDMS`, ...).

use crate::{error::Error, version, Coordinate, FormatOptions};
use wasm_bindgen::prelude::*;

fn to_js_error(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Convert a parsed coordinate into a JS `[longitude, latitude]` array.
fn coordinate_to_js(c: Coordinate) -> Result<JsValue, JsValue> {
    JsValue::from_serde(&c).map_err(|_| JsValue::from_str("Unable to convert result to JSON!"))
}

/// Parse a coordinate pair in degrees/minutes/seconds notation.
#[wasm_bindgen(js_name = fromDMS)]
pub fn from_dms(text: &str) -> Result<JsValue, JsValue> {
    crate::from_dms(text)
        .map_err(to_js_error)
        .and_then(coordinate_to_js)
}

/// Parse a coordinate pair in degrees/decimal-minutes or decimal degree notation.
#[wasm_bindgen(js_name = fromDMM)]
pub fn from_dmm(text: &str) -> Result<JsValue, JsValue> {
    crate::from_dmm(text)
        .map_err(to_js_error)
        .and_then(coordinate_to_js)
}

/// Alias of `fromDMM`.
#[wasm_bindgen(js_name = fromGMM)]
pub fn from_gmm(text: &str) -> Result<JsValue, JsValue> {
    from_dmm(text)
}

#[wasm_bindgen(js_name = isDMS)]
pub fn is_dms(text: &str) -> bool {
    crate::is_dms(text)
}

#[wasm_bindgen(js_name = isDMM)]
pub fn is_dmm(text: &str) -> bool {
    crate::is_dmm(text)
}

/// Parse a coordinate pair in whichever notation it's written in.
#[wasm_bindgen]
pub fn parse(text: &str) -> Result<JsValue, JsValue> {
    crate::parse(text)
        .map_err(to_js_error)
        .and_then(coordinate_to_js)
}

/// Format a `[longitude, latitude]` array. `options` may be `undefined`, or an object with any of
/// the fields `decimalPlaces` and `latLonSeparator`.
#[wasm_bindgen(js_name = toDMS)]
pub fn to_dms(
    coordinate: JsValue,
    format: Option<String>,
    options: JsValue,
) -> Result<String, JsValue> {
    let coordinate: Vec<f64> = coordinate.into_serde().map_err(|_| {
        to_js_error(Error::InvalidCoordinate(
            "expected an array of two numbers".to_string(),
        ))
    })?;

    let options = if options.is_undefined() || options.is_null() {
        FormatOptions::default()
    } else {
        options
            .into_serde()
            .map_err(|e| to_js_error(Error::InvalidOptions(e.to_string())))?
    };

    crate::to_dms(&coordinate, format.as_deref(), &options).map_err(to_js_error)
}

/// Send log events to the browser console. Calling this more than once has no effect.
#[wasm_bindgen(js_name = enableLogging)]
pub fn enable_logging() {
    if tracing_wasm::try_set_as_global_default().is_err() {
        return;
    }
    tracing::info!("{} logging enabled", version::long_version());
}

#[wasm_bindgen]
pub fn version() -> String {
    version::long_version()
}
