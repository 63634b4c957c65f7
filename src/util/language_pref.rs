//! Language preference persistence.
//!
//! Reads the last selected report-form language from `localStorage` and
//! writes it back when the user switches tabs. Requires a browser
//! environment; on the server both functions fall through.

use crate::state::language::Language;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "safeminor_lang";

/// Read the stored language preference, if the browser has one.
pub fn read_preference() -> Option<Language> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(code)) = storage.get_item(STORAGE_KEY) {
                return Language::from_code(&code);
            }
        }
        None
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the selected language to `localStorage`.
pub fn store(language: Language) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, language.code());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = language;
    }
}
