//! WASM bindings for the picker.
//!
//! Mirrors the inputs and outputs of the web component: `searchbarInput`,
//! `checkboxChange`, `confirmChanges`, `cancelChanges`, plus callbacks for
//! `selectionChange` and `selectionCancel`.

use crate::TypeaheadSelector;
use wasm_bindgen::prelude::*;

/// A picker instance owned by JavaScript.
#[wasm_bindgen]
pub struct Typeahead {
    inner: TypeaheadSelector,
}

#[wasm_bindgen]
impl Typeahead {
    /// Open a picker.
    ///
    /// # Arguments
    /// * `items_json` - JSON array of items with `text` and `value` fields
    /// * `selected_item` - Current selection, if any
    /// * `title` - Heading; defaults to "Select Item"
    #[wasm_bindgen(constructor)]
    pub fn new(
        items_json: &str,
        selected_item: Option<String>,
        title: Option<String>,
    ) -> Result<Typeahead, JsValue> {
        let items = lazer_search::parse_items(items_json)
            .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

        let mut inner = TypeaheadSelector::initialize(items, selected_item);
        if let Some(title) = title {
            inner = inner.with_title(title);
        }
        Ok(Typeahead { inner })
    }

    /// Heading shown above the list.
    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.inner.title().to_string()
    }

    /// Search box text changed.
    #[wasm_bindgen(js_name = searchbarInput)]
    pub fn searchbar_input(&mut self, query: &str) {
        self.inner.search_input(query);
    }

    /// Row checkbox changed.
    #[wasm_bindgen(js_name = checkboxChange)]
    pub fn checkbox_change(&mut self, value: &str, checked: bool) {
        self.inner.checkbox_change(value, checked);
    }

    /// Whether the row for `value` renders as checked.
    #[wasm_bindgen(js_name = isChecked)]
    pub fn is_checked(&self, value: Option<String>) -> bool {
        self.inner.is_checked(value.as_deref())
    }

    /// Visible items as a JSON array.
    #[wasm_bindgen(js_name = filteredItems)]
    pub fn filtered_items(&self) -> Result<String, JsValue> {
        let items: Vec<_> = self.inner.filtered_items().collect();
        serde_json::to_string(&items)
            .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
    }

    /// Confirm pressed.
    #[wasm_bindgen(js_name = confirmChanges)]
    pub fn confirm_changes(&mut self) {
        self.inner.confirm();
    }

    /// Cancel pressed.
    #[wasm_bindgen(js_name = cancelChanges)]
    pub fn cancel_changes(&mut self) {
        self.inner.cancel();
    }

    /// Register a `selectionChange` handler; receives the value or `undefined`.
    #[wasm_bindgen(js_name = onSelectionChange)]
    pub fn on_selection_change(&mut self, callback: js_sys::Function) {
        self.inner.on_change(move |value| {
            let arg = value.map_or(JsValue::UNDEFINED, JsValue::from_str);
            if let Err(err) = callback.call1(&JsValue::NULL, &arg) {
                tracing::warn!(?err, "selectionChange handler threw");
            }
        });
    }

    /// Register a `selectionCancel` handler.
    #[wasm_bindgen(js_name = onSelectionCancel)]
    pub fn on_selection_cancel(&mut self, callback: js_sys::Function) {
        self.inner.on_cancel(move || {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                tracing::warn!(?err, "selectionCancel handler threw");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Item;

    const STREETS: &str = r#"[
        {"text": "Main St", "value": "1"},
        {"text": "Maple Ave", "value": "2"},
        {"text": "Oak Blvd", "value": "3"}
    ]"#;

    fn open(selected: Option<&str>) -> Typeahead {
        let Ok(picker) = Typeahead::new(STREETS, selected.map(String::from), None) else {
            panic!("items should parse");
        };
        picker
    }

    fn visible(picker: &Typeahead) -> Vec<String> {
        let Ok(json) = picker.filtered_items() else {
            panic!("items should serialize");
        };
        let items: Vec<Item> = serde_json::from_str(&json).unwrap();
        items.iter().filter_map(Item::value).map(String::from).collect()
    }

    #[test]
    fn test_default_title() {
        assert_eq!(open(None).title(), "Select Item");
    }

    #[test]
    fn test_search_and_check() {
        let mut picker = open(Some("2"));
        picker.searchbar_input("oak");
        assert_eq!(visible(&picker), vec!["3"]);
        assert!(picker.is_checked(Some("2".into())));

        picker.checkbox_change("3", true);
        assert!(picker.is_checked(Some("3".into())));
        assert!(!picker.is_checked(Some("2".into())));

        picker.searchbar_input("");
        assert_eq!(visible(&picker), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_confirm_closes_picker() {
        let mut picker = open(Some("2"));
        picker.confirm_changes();
        picker.checkbox_change("1", true);
        assert!(!picker.is_checked(Some("1".into())));
        assert!(!picker.is_checked(Some("2".into())));
    }
}
