use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    let json = serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Could not write to localStorage".to_string())?;
    Ok(())
}

/// A missing or unreadable record is None; corrupt JSON is dropped so the
/// next save starts clean.
pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(_) => {
            let _ = storage.remove_item(key);
            None
        }
    }
}

pub fn load_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn save_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Could not write to localStorage".to_string())
}

pub fn remove_from_storage(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}
