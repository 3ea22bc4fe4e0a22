//! whereto-wasm — WebAssembly bindings for whereto-core
//!
//! This crate exposes a small, ergonomic JS/WASM API built on top of
//! `whereto-core`. It embeds the curated destination list in the WASM
//! binary and provides the search and highlight helpers a "where to" box
//! calls on every keystroke.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Basic queries: `get_city_count()`, `get_city_name(code)`
//! - Search helpers returning JSON-serializable objects:
//!   - `search("goa", 8)` for ranked city/zone hits
//!   - `highlight("North Goa", "goa")` for match segments to render
//!   - `get_stats()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { search, highlight } from 'whereto-wasm';
//!
//! async function main() {
//!   await init(); // initializes the embedded dataset
//!
//!   const hits = search('goa', 8);
//!   // hits is a JSON array of { kind, name, code, score, parent_city? }
//!   for (const hit of hits) {
//!     console.log(hit.score, hit.name, highlight(hit.name, 'goa'));
//!   }
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The destination list is compiled in; customizing it means rebuilding
//!   the crate with a different `destinations.json`.
//! - All exported functions are `wasm_bindgen` bindings and return plain
//!   types or `JsValue` containing JSON-serializable arrays/objects.

use wasm_bindgen::prelude::*;

// Core Imports
use serde_json::json;
use serde_wasm_bindgen::to_value;
use whereto_core::prelude::*;

// The dataset lives in whereto-core behind a OnceCell; first access builds
// it from the embedded table.
fn db() -> &'static Dataset {
    Dataset::shared().expect("embedded destination data is valid")
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing WhereTo WASM module...".into());

    let stats = db().stats();
    web_sys::console::log_1(
        &format!("✓ Loaded {} cities, {} zones", stats.cities, stats.zones).into(),
    );
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_city_count() -> usize {
    db().cities().len()
}

#[wasm_bindgen]
pub fn get_city_name(code: &str) -> Option<String> {
    db().find_city_by_code(code).map(|c| c.name.clone())
}

/* --------------------------------------------------------------------------
   Search
-------------------------------------------------------------------------- */

/// Ranked search over cities and zones.
///
/// `limit` follows JS conventions: any value `<= 0` means "default page
/// size". Returns a JSON array of hit objects, best first.
#[wasm_bindgen]
pub fn search(query: &str, limit: i32) -> JsValue {
    let limit = if limit <= 0 { 0 } else { limit as usize };
    let hits = db().search(query, limit);

    // Map to JS serializable views while preserving order
    let array = js_sys::Array::new();
    for hit in &hits {
        let v = to_value(&HitView::from(hit)).unwrap();
        array.push(&v);
    }
    array.into()
}

/* --------------------------------------------------------------------------
   Highlighting
-------------------------------------------------------------------------- */

/// Split `text` into `{ text, matched }` segments for rendering.
#[wasm_bindgen(js_name = highlight)]
pub fn highlight_js(text: &str, query: &str) -> JsValue {
    to_value(&highlight(text, query)).unwrap()
}

/* --------------------------------------------------------------------------
   Stats
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_stats() -> JsValue {
    let stats = db().stats();
    let stats = json!({
        "cities": stats.cities,
        "zones": stats.zones
    });

    to_value(&stats).unwrap()
}
