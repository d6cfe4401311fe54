// ============================================================================
// STORAGE - Acceso a localStorage detrás de un trait inyectable
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::{window, Storage};

/// Almacenamiento clave/valor del cliente
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// localStorage del navegador. Si no está disponible, las lecturas devuelven None
/// y las escrituras devuelven error.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage
            .set_item(key, value)
            .map_err(|_| format!("Error guardando '{}' en localStorage", key))
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage
            .remove_item(key)
            .map_err(|_| format!("Error eliminando '{}' de localStorage", key))
    }
}

/// Almacenamiento en memoria (tests y entornos sin localStorage)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage que rechaza todas las escrituras (cuota llena, modo privado...)
    pub fn read_only() -> Self {
        Self {
            items: RefCell::new(HashMap::new()),
            read_only: true,
        }
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        if self.read_only {
            return Err(format!("Storage de solo lectura: '{}'", key));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        if self.read_only {
            return Err(format!("Storage de solo lectura: '{}'", key));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Leer un booleano guardado como "true"/"false". Cualquier otro valor cuenta como ausente.
pub fn load_bool(storage: &dyn KeyValueStorage, key: &str) -> bool {
    storage.get_item(key).as_deref() == Some("true")
}

/// Guardar un booleano como "true"/"false"
pub fn save_bool(storage: &dyn KeyValueStorage, key: &str, value: bool) -> Result<(), String> {
    storage.set_item(key, if value { "true" } else { "false" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_bool_defaults_to_false() {
        let storage = MemoryStorage::new();
        assert!(!load_bool(&storage, "isDarkMode"));
    }

    #[test]
    fn corrupt_bool_is_treated_as_absent() {
        let storage = MemoryStorage::new().with_item("isDarkMode", "yes please");
        assert!(!load_bool(&storage, "isDarkMode"));
    }

    #[test]
    fn bool_is_written_as_plain_string() {
        let storage = MemoryStorage::new();
        save_bool(&storage, "isFrench", true).unwrap();
        assert_eq!(storage.get_item("isFrench").as_deref(), Some("true"));
        save_bool(&storage, "isFrench", false).unwrap();
        assert_eq!(storage.get_item("isFrench").as_deref(), Some("false"));
    }

    #[test]
    fn read_only_storage_rejects_writes() {
        let storage = MemoryStorage::read_only();
        assert!(save_bool(&storage, "isFrench", true).is_err());
        assert!(storage.remove_item("isFrench").is_err());
        assert_eq!(storage.get_item("isFrench"), None);
    }
}
