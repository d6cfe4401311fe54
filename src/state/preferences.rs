// ============================================================================
// PREFERENCES - Tema oscuro + idioma, persistidos en localStorage
// ============================================================================

use std::rc::Rc;
use crate::state::reactivity::ReactiveState;
use crate::utils::constants::{DARK_MODE_KEY, FRENCH_KEY};
use crate::utils::i18n::Language;
use crate::utils::storage::{load_bool, save_bool, KeyValueStorage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub french: bool,
}

impl Preferences {
    pub fn language(&self) -> Language {
        Language::from_french_flag(self.french)
    }
}

/// Store inyectable de preferencias. Se construye una vez por proceso y se
/// comparte por referencia; los dos flags son independientes.
pub struct PreferenceStore {
    storage: Rc<dyn KeyValueStorage>,
    state: ReactiveState<Preferences>,
}

impl PreferenceStore {
    /// Cargar preferencias desde storage (false si faltan o son inválidas)
    pub fn load(storage: Rc<dyn KeyValueStorage>) -> Self {
        let prefs = Preferences {
            dark_mode: load_bool(storage.as_ref(), DARK_MODE_KEY),
            french: load_bool(storage.as_ref(), FRENCH_KEY),
        };
        log::info!(
            "🎨 [PREFS] Cargadas: dark_mode={} french={}",
            prefs.dark_mode,
            prefs.french
        );
        Self {
            storage,
            state: ReactiveState::new(prefs),
        }
    }

    pub fn get(&self) -> Preferences {
        self.state.get()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.state.with(|p| p.dark_mode)
    }

    pub fn is_french(&self) -> bool {
        self.state.with(|p| p.french)
    }

    pub fn language(&self) -> Language {
        self.state.with(Preferences::language)
    }

    pub fn toggle_dark_mode(&self) {
        let value = !self.is_dark_mode();
        self.persist(DARK_MODE_KEY, value);
        self.state.update(|p| p.dark_mode = value);
    }

    pub fn toggle_language(&self) {
        let value = !self.is_french();
        self.persist(FRENCH_KEY, value);
        self.state.update(|p| p.french = value);
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback);
    }

    /// El fallo de escritura no es fatal: el flag cambia igual en la sesión
    fn persist(&self, key: &str, value: bool) {
        if let Err(e) = save_bool(self.storage.as_ref(), key, value) {
            log::warn!("⚠️ [PREFS] No se pudo guardar {}={}: {}", key, value, e);
        }
    }
}
