// ============================================================================
// TIMERS - Timers con handle propio, cancelados al desmontar la vista
// ============================================================================
// gloo_timers cancela el timer en Drop. El dueño del TimerSlot (estado de una
// vista) lo vacía al desmontarse y ningún callback llega con estado obsoleto.
// Los timers se crean a través de un Scheduler: gloo en el navegador, manual
// en los tests del host.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::{Interval, Timeout};

/// Timer programado. Soltarlo lo cancela.
pub trait TimerHandle {
    /// Dejar el timer vivo sin handle (no se cancela nunca)
    fn forget(self: Box<Self>);
}

impl TimerHandle for Interval {
    fn forget(self: Box<Self>) {
        let _ = (*self).forget();
    }
}

impl TimerHandle for Timeout {
    fn forget(self: Box<Self>) {
        let _ = (*self).forget();
    }
}

/// Origen de los timers
pub trait Scheduler {
    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> Box<dyn TimerHandle>;
    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Box<dyn TimerHandle>;
}

/// Timers del navegador (`setInterval` / `setTimeout` vía gloo)
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> Box<dyn TimerHandle> {
        Box::new(Interval::new(millis, callback))
    }

    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Box<dyn TimerHandle> {
        Box::new(Timeout::new(millis, callback))
    }
}

pub struct TimerSlot {
    scheduler: Rc<dyn Scheduler>,
    interval: RefCell<Option<Box<dyn TimerHandle>>>,
    timeout: RefCell<Option<Box<dyn TimerHandle>>>,
}

impl TimerSlot {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Rc<Self> {
        Rc::new(Self {
            scheduler,
            interval: RefCell::new(None),
            timeout: RefCell::new(None),
        })
    }

    /// Programar un callback periódico (reemplaza al anterior)
    pub fn set_interval<F>(&self, millis: u32, callback: F)
    where
        F: FnMut() + 'static,
    {
        let handle = self.scheduler.interval(millis, Box::new(callback));
        *self.interval.borrow_mut() = Some(handle);
    }

    /// Programar un callback único (reemplaza al anterior)
    pub fn set_timeout<F>(&self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let handle = self.scheduler.timeout(millis, Box::new(callback));
        *self.timeout.borrow_mut() = Some(handle);
    }

    pub fn is_active(&self) -> bool {
        self.interval.borrow().is_some() || self.timeout.borrow().is_some()
    }

    /// Cancelar todos los timers del slot
    pub fn cancel(&self) {
        let interval = self.interval.borrow_mut().take();
        let timeout = self.timeout.borrow_mut().take();
        if interval.is_some() || timeout.is_some() {
            log::debug!("⏹️ [TIMER] Timers cancelados");
        }
        drop(interval);
        drop(timeout);
    }

    /// Cancelar desde dentro de un callback del propio slot: el closure en
    /// ejecución no puede liberarse a sí mismo, así que se difiere un tick.
    pub fn cancel_deferred(self: &Rc<Self>) {
        let slot = Rc::downgrade(self);
        self.scheduler
            .timeout(
                0,
                Box::new(move || {
                    if let Some(slot) = slot.upgrade() {
                        slot.cancel();
                    }
                }),
            )
            .forget();
    }
}

/// Scheduler manual: los timers solo corren cuando el test llama a `tick`
#[cfg(test)]
pub mod manual {
    use super::{Scheduler, TimerHandle};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    enum Job {
        Repeat(Box<dyn FnMut()>),
        Once(Box<dyn FnOnce()>),
    }

    struct Pending {
        live: Cell<bool>,
        job: RefCell<Option<Job>>,
    }

    struct Handle(Rc<Pending>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.live.set(false);
        }
    }

    impl TimerHandle for Handle {
        fn forget(self: Box<Self>) {
            std::mem::forget(*self);
        }
    }

    #[derive(Default)]
    pub struct ManualScheduler {
        pending: RefCell<Vec<Rc<Pending>>>,
    }

    impl ManualScheduler {
        pub fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        fn push(&self, job: Job) -> Box<dyn TimerHandle> {
            let pending = Rc::new(Pending {
                live: Cell::new(true),
                job: RefCell::new(Some(job)),
            });
            self.pending.borrow_mut().push(pending.clone());
            Box::new(Handle(pending))
        }

        /// Timers programados y no cancelados
        pub fn live_count(&self) -> usize {
            self.pending.borrow().iter().filter(|p| p.live.get()).count()
        }

        /// Disparar una vez cada timer vivo. Los timeouts se consumen.
        pub fn tick(&self) {
            let snapshot: Vec<Rc<Pending>> = self.pending.borrow().clone();
            for pending in snapshot {
                if !pending.live.get() {
                    continue;
                }
                let job = pending.job.borrow_mut().take();
                match job {
                    Some(Job::Repeat(mut callback)) => {
                        callback();
                        if pending.live.get() {
                            *pending.job.borrow_mut() = Some(Job::Repeat(callback));
                        }
                    }
                    Some(Job::Once(callback)) => {
                        pending.live.set(false);
                        callback();
                    }
                    None => {}
                }
            }
            self.pending.borrow_mut().retain(|p| p.live.get());
        }
    }

    impl Scheduler for ManualScheduler {
        fn interval(&self, _millis: u32, callback: Box<dyn FnMut()>) -> Box<dyn TimerHandle> {
            self.push(Job::Repeat(callback))
        }

        fn timeout(&self, _millis: u32, callback: Box<dyn FnOnce()>) -> Box<dyn TimerHandle> {
            self.push(Job::Once(callback))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::Cell;

    #[test]
    fn empty_slot_is_inactive_and_cancel_is_a_no_op() {
        let slot = TimerSlot::new(ManualScheduler::new());
        assert!(!slot.is_active());
        slot.cancel();
        assert!(!slot.is_active());
    }

    #[test]
    fn cancel_stops_an_active_interval() {
        let scheduler = ManualScheduler::new();
        let slot = TimerSlot::new(scheduler.clone());
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        slot.set_interval(1_000, move || h.set(h.get() + 1));

        scheduler.tick();
        assert_eq!(hits.get(), 1);
        assert!(slot.is_active());

        slot.cancel();
        assert!(!slot.is_active());
        assert_eq!(scheduler.live_count(), 0);
        scheduler.tick();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn deferred_cancel_from_inside_the_callback_lands_next_tick() {
        let scheduler = ManualScheduler::new();
        let slot = TimerSlot::new(scheduler.clone());
        let weak = Rc::downgrade(&slot);
        slot.set_interval(1_000, move || {
            if let Some(slot) = weak.upgrade() {
                slot.cancel_deferred();
            }
        });

        scheduler.tick();
        assert!(slot.is_active());
        scheduler.tick();
        assert!(!slot.is_active());
    }
}
