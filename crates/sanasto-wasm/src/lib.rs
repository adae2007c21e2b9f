// WASM bindings for sanasto.
//
// Provides a `WasmSanasto` class exported via wasm-bindgen that wraps the
// `SpellChecker` from sanasto-check. Structured results (classification,
// word spans) are serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const sanasto = new WasmSanasto("this\nis\na\ntest\n");
//   sanasto.spell("Test");                  // => true
//   sanasto.check("Thiss is a tst.");       // => ["thiss", "tst"]
//   sanasto.classify("a tst 42");           // => { known: ["a"], unknown: ["tst"], numbersSkipped: 1 }
//   sanasto.tokens("Thiss is");             // => [{ text: "Thiss", start: 0, end: 5, kind: "Word" }, ...]
//   sanasto.vocabularySize();               // => 4

use serde::Serialize;
use wasm_bindgen::prelude::*;

use sanasto_check::{
    CheckError, CheckOptions, FormatCheck, NumberPolicy, SpellChecker, TokenKind, word_spans,
};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a word run.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsWordSpan<'a> {
    text: &'a str,
    start: usize,
    end: usize,
    kind: &'static str,
}

fn kind_to_str(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Word => "Word",
        TokenKind::Number => "Number",
    }
}

fn check_error_to_js(e: CheckError) -> JsError {
    JsError::new(&e.to_string())
}

fn serde_error_to_js(e: serde_wasm_bindgen::Error) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmSanasto
// ============================================================================

/// Unknown-word checker for WebAssembly.
#[wasm_bindgen]
pub struct WasmSanasto {
    checker: SpellChecker,
}

#[wasm_bindgen]
impl WasmSanasto {
    /// Create a checker from the text of a dictionary (one word per line).
    ///
    /// With `strict` set, a dictionary that is not one word per line is
    /// rejected; otherwise it is accepted as is.
    #[wasm_bindgen(constructor)]
    pub fn new(dictionary: &str, strict: Option<bool>) -> Result<WasmSanasto, JsError> {
        let options = CheckOptions {
            format_check: if strict.unwrap_or(false) {
                FormatCheck::Strict
            } else {
                FormatCheck::Off
            },
            ..CheckOptions::default()
        };
        let checker =
            SpellChecker::from_dictionary_text(dictionary, options).map_err(check_error_to_js)?;
        Ok(WasmSanasto { checker })
    }

    /// Check whether a single word is known (numbers always are).
    pub fn spell(&self, word: &str) -> bool {
        self.checker.spell(word)
    }

    /// Return the sorted distinct words of `text` the dictionary lacks.
    pub fn check(&self, text: &str) -> Result<Vec<String>, JsError> {
        let unknown = self.checker.check_text(text).map_err(check_error_to_js)?;
        Ok(unknown.into_iter().map(|t| t.into_string()).collect())
    }

    /// Classify the distinct words of `text`.
    ///
    /// Returns `{ known: string[], unknown: string[], numbersSkipped: number }`.
    pub fn classify(&self, text: &str) -> Result<JsValue, JsError> {
        let result = self.checker.classify_text(text).map_err(check_error_to_js)?;
        serde_wasm_bindgen::to_value(&result).map_err(serde_error_to_js)
    }

    /// Split `text` into word runs.
    ///
    /// Returns an array of `{ text, start, end, kind }` objects; offsets are
    /// UTF-8 byte offsets.
    pub fn tokens(&self, text: &str) -> Result<JsValue, JsError> {
        let spans: Vec<JsWordSpan<'_>> = word_spans(text)
            .map(|span| JsWordSpan {
                text: span.text,
                start: span.start,
                end: span.end(),
                kind: kind_to_str(span.kind()),
            })
            .collect();
        serde_wasm_bindgen::to_value(&spans).map_err(serde_error_to_js)
    }

    /// Number of distinct words in the dictionary.
    #[wasm_bindgen(js_name = "vocabularySize")]
    pub fn vocabulary_size(&self) -> usize {
        self.checker.vocabulary().len()
    }

    /// Also skip tokens that merely start with a digit (`1st`, `2nd`).
    #[wasm_bindgen(js_name = "setNumberPolicy")]
    pub fn set_number_policy(&mut self, leading_digit: bool) {
        self.checker.set_number_policy(if leading_digit {
            NumberPolicy::LeadingDigit
        } else {
            NumberPolicy::DigitsOnly
        });
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}
