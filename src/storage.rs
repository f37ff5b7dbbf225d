//! Browser localStorage access

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};

fn local_storage() -> AppResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| AppError::Storage("no window".into()))?
        .local_storage()
        .map_err(|e| AppError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| AppError::Storage("localStorage disabled".into()))
}

pub fn get_raw(key: &str) -> AppResult<Option<String>> {
    local_storage()?
        .get_item(key)
        .map_err(|e| AppError::Storage(format!("{:?}", e)))
}

pub fn set_raw(key: &str, value: &str) -> AppResult<()> {
    local_storage()?
        .set_item(key, value)
        .map_err(|e| AppError::Storage(format!("{:?}", e)))
}

pub fn get_json<T: DeserializeOwned>(key: &str) -> AppResult<Option<T>> {
    match get_raw(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn set_json<T: Serialize>(key: &str, value: &T) -> AppResult<()> {
    set_raw(key, &serde_json::to_string(value)?)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_json_round_trip_in_local_storage() {
        set_json("tasks-ui.test", &vec![1u32, 2, 3]).unwrap();
        let loaded: Option<Vec<u32>> = get_json("tasks-ui.test").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[wasm_bindgen_test]
    fn test_missing_key_is_none() {
        let loaded: Option<String> = get_json("tasks-ui.absent").unwrap();
        assert!(loaded.is_none());
    }
}
