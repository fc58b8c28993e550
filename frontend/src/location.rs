use serde::Serialize;
use shared::query::{search_for, token_from_search};
use shared::{RouletteError, TokenStore};
use wasm_bindgen::JsValue;
use web_sys::window;
use yew_router::prelude::Navigator;

use crate::Route;

#[derive(Serialize)]
struct RouletteQuery<'a> {
    data: &'a str,
}

/// The `data` query parameter of the page URL.
///
/// Writes replace the current history entry, so editing the list neither
/// reloads the page nor floods the back button.
pub struct LocationStore {
    navigator: Option<Navigator>,
}

impl LocationStore {
    pub fn new(navigator: Option<Navigator>) -> Self {
        Self { navigator }
    }
}

impl TokenStore for LocationStore {
    fn read(&self) -> Option<String> {
        let search = window()?.location().search().ok()?;
        token_from_search(&search)
    }

    fn write(&mut self, token: &str) -> shared::Result<()> {
        if let Some(navigator) = &self.navigator {
            return navigator
                .replace_with_query(&Route::Roulette, &RouletteQuery { data: token })
                .map_err(|e| RouletteError::History(format!("{:?}", e)));
        }

        // Rendered outside the router: talk to the History API directly
        let history = window()
            .ok_or_else(|| RouletteError::History("no window".to_string()))?
            .history()
            .map_err(|e| RouletteError::History(format!("{:?}", e)))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&search_for(token)))
            .map_err(|e| RouletteError::History(format!("{:?}", e)))
    }
}
