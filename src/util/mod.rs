//! Browser glue kept out of the pages. Everything here degrades to a
//! no-op outside the `hydrate` (WASM) build.

pub mod language_pref;
