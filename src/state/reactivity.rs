// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Callback>>,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Leer el valor sin clonarlo
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers.
    /// Se clona la lista para que un callback pueda suscribirse o leer el valor.
    fn notify(&self) {
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifies_every_subscriber() {
        let state = ReactiveState::new(0);
        let hits = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1));
        }
        state.set(7);
        assert_eq!(state.get(), 7);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn subscriber_can_read_the_new_value() {
        let state = Rc::new(ReactiveState::new(String::from("a")));
        let seen = Rc::new(RefCell::new(String::new()));
        {
            let state_clone = Rc::downgrade(&state);
            let seen = seen.clone();
            state.subscribe(move || {
                if let Some(s) = state_clone.upgrade() {
                    *seen.borrow_mut() = s.get();
                }
            });
        }
        state.update(|v| v.push('b'));
        assert_eq!(*seen.borrow(), "ab");
    }
}
