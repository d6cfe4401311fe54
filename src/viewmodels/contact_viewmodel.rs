// ============================================================================
// CONTACT VIEWMODEL - Cooldown, envío y cuenta atrás del formulario
// ============================================================================
// El relay solo envía; aquí viven el cooldown local, el estado del envío y
// el timer de la cuenta atrás (propiedad de este viewmodel).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use crate::models::{ContactMessage, SubmissionStatus};
use crate::services::cooldown::parse_timestamp;
use crate::services::{format_remaining, Clock, Cooldown, CooldownActive, MailError, MailRelay};
use crate::state::reactivity::ReactiveState;
use crate::state::timers::{Scheduler, TimerSlot};
use crate::utils::constants::LAST_EMAIL_TIME_KEY;
use crate::utils::i18n::{t, t_with, Language};
use crate::utils::storage::KeyValueStorage;

const COUNTDOWN_TICK_MS: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error(transparent)]
    Cooldown(#[from] CooldownActive),
    #[error("every field is required")]
    MissingFields,
    #[error("a message is already being sent")]
    AlreadySending,
    #[error(transparent)]
    Mail(#[from] MailError),
}

impl ContactError {
    /// Texto para mostrar al usuario
    pub fn localized(&self, lang: Language) -> String {
        match self {
            ContactError::Cooldown(active) => cooldown_text(active.remaining_secs, lang),
            ContactError::MissingFields => t("missingFields", lang),
            ContactError::AlreadySending => t("sending", lang),
            ContactError::Mail(_) => t("emailError", lang),
        }
    }
}

fn cooldown_text(remaining_secs: u64, lang: Language) -> String {
    t_with("cooldownMessage", lang, "time", &format_remaining(remaining_secs))
}

pub struct ContactViewModel {
    relay: Rc<dyn MailRelay>,
    storage: Rc<dyn KeyValueStorage>,
    cooldown: Cooldown,
    clock: Clock,
    status: ReactiveState<SubmissionStatus>,
    draft: RefCell<ContactMessage>,
    countdown: Rc<TimerSlot>,
}

impl ContactViewModel {
    pub fn new(
        relay: Rc<dyn MailRelay>,
        storage: Rc<dyn KeyValueStorage>,
        cooldown: Cooldown,
        clock: Clock,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            relay,
            storage,
            cooldown,
            clock,
            status: ReactiveState::new(SubmissionStatus::Idle),
            draft: RefCell::new(ContactMessage::new("", "", "")),
            countdown: TimerSlot::new(scheduler),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status.get()
    }

    /// Observar cambios de estado del envío
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.status.subscribe(callback);
    }

    /// Borrador del formulario (sobrevive a los re-renders)
    pub fn draft(&self) -> ContactMessage {
        self.draft.borrow().clone()
    }

    pub fn update_draft<F>(&self, updater: F)
    where
        F: FnOnce(&mut ContactMessage),
    {
        updater(&mut self.draft.borrow_mut());
    }

    fn last_sent(&self) -> Option<f64> {
        self.storage
            .get_item(LAST_EMAIL_TIME_KEY)
            .as_deref()
            .and_then(parse_timestamp)
    }

    pub fn remaining_secs(&self) -> u64 {
        self.cooldown.remaining_secs(self.last_sent(), (self.clock)())
    }

    /// Aviso de cooldown, `None` si ya se puede enviar
    pub fn cooldown_message(&self, lang: Language) -> Option<String> {
        match self.remaining_secs() {
            0 => None,
            secs => Some(cooldown_text(secs, lang)),
        }
    }

    /// Enviar el mensaje. El cooldown se comprueba en local, sin red.
    /// No hay reintento automático.
    pub async fn submit(&self, message: ContactMessage, lang: Language) -> Result<(), ContactError> {
        if self.status.with(SubmissionStatus::is_sending) {
            return Err(ContactError::AlreadySending);
        }

        if let Err(active) = self.cooldown.check(self.last_sent(), (self.clock)()) {
            log::info!("⏳ [CONTACT] Cooldown activo: {}s", active.remaining_secs);
            return Err(self.fail(active.into(), lang));
        }

        let message = ContactMessage::new(&message.name, &message.email, &message.message);
        if !message.is_complete() {
            return Err(self.fail(ContactError::MissingFields, lang));
        }

        self.status.set(SubmissionStatus::Sending);

        match self.relay.send(&message).await {
            Ok(()) => {
                let sent_at = (self.clock)();
                if let Err(e) = self
                    .storage
                    .set_item(LAST_EMAIL_TIME_KEY, &format!("{}", sent_at as u64))
                {
                    log::warn!("⚠️ [CONTACT] No se pudo guardar {}: {}", LAST_EMAIL_TIME_KEY, e);
                }
                *self.draft.borrow_mut() = ContactMessage::new("", "", "");
                self.status.set(SubmissionStatus::Sent);
                log::info!("✅ [CONTACT] Mensaje enviado");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [CONTACT] Error enviando: {}", e);
                Err(self.fail(e.into(), lang))
            }
        }
    }

    fn fail(&self, error: ContactError, lang: Language) -> ContactError {
        self.status.set(SubmissionStatus::Failed(error.localized(lang)));
        error
    }

    /// Arrancar la cuenta atrás si hay cooldown. `on_tick` se llama cada
    /// segundo; al llegar a cero el timer se cancela solo.
    pub fn start_countdown<F>(self: &Rc<Self>, on_tick: F)
    where
        F: Fn() + 'static,
    {
        if self.remaining_secs() == 0 || self.countdown.is_active() {
            return;
        }
        log::debug!("⏱️ [CONTACT] Cuenta atrás iniciada");
        let vm = Rc::downgrade(self);
        self.countdown.set_interval(COUNTDOWN_TICK_MS, move || {
            let Some(vm) = vm.upgrade() else {
                return;
            };
            on_tick();
            if vm.remaining_secs() == 0 {
                vm.countdown.cancel_deferred();
            }
        });
    }

    pub fn is_counting_down(&self) -> bool {
        self.countdown.is_active()
    }

    /// Al salir de la sección: cancelar timers y olvidar el último resultado
    /// El timer se cancela al final: los observadores del estado pueden
    /// volver a pintar el formulario y pedir una cuenta atrás nueva.
    pub fn teardown(&self) {
        let reset = self
            .status
            .with(|status| !status.is_sending() && *status != SubmissionStatus::Idle);
        if reset {
            self.status.set(SubmissionStatus::Idle);
        }
        self.countdown.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::timers::manual::ManualScheduler;
    use crate::utils::storage::MemoryStorage;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::Cell;

    const TEN_MINUTES_MS: f64 = 600_000.0;
    const START: f64 = 1_700_000_000_000.0;

    #[derive(Default)]
    struct MockRelay {
        sent: RefCell<Vec<ContactMessage>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl MailRelay for MockRelay {
        async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
            self.sent.borrow_mut().push(message.clone());
            if self.fail {
                Err(MailError::Network("offline".to_string()))
            } else {
                Ok(())
            }
        }
    }

    struct Fixture {
        vm: Rc<ContactViewModel>,
        relay: Rc<MockRelay>,
        storage: Rc<MemoryStorage>,
        now: Rc<Cell<f64>>,
        scheduler: Rc<ManualScheduler>,
    }

    fn fixture(relay: MockRelay, storage: MemoryStorage) -> Fixture {
        let relay = Rc::new(relay);
        let storage = Rc::new(storage);
        let now = Rc::new(Cell::new(START));
        let clock_now = now.clone();
        let scheduler = ManualScheduler::new();
        let vm = Rc::new(ContactViewModel::new(
            relay.clone(),
            storage.clone(),
            Cooldown::new(TEN_MINUTES_MS),
            Rc::new(move || clock_now.get()),
            scheduler.clone(),
        ));
        Fixture { vm, relay, storage, now, scheduler }
    }

    fn message() -> ContactMessage {
        ContactMessage::new("Ada", "ada@example.com", "Hello")
    }

    #[test]
    fn successful_submit_stores_timestamp_and_marks_sent() {
        let f = fixture(MockRelay::default(), MemoryStorage::new());
        assert_eq!(block_on(f.vm.submit(message(), Language::En)), Ok(()));
        assert_eq!(f.vm.status(), SubmissionStatus::Sent);
        assert_eq!(f.relay.sent.borrow().len(), 1);
        assert_eq!(
            f.storage.get_item(LAST_EMAIL_TIME_KEY).as_deref(),
            Some("1700000000000")
        );
    }

    #[test]
    fn second_submit_inside_window_never_reaches_the_relay() {
        let f = fixture(MockRelay::default(), MemoryStorage::new());
        block_on(f.vm.submit(message(), Language::En)).unwrap();
        f.now.set(START + 60_000.0);

        let result = block_on(f.vm.submit(message(), Language::En));
        assert_eq!(
            result,
            Err(ContactError::Cooldown(CooldownActive { remaining_secs: 540 }))
        );
        assert_eq!(f.relay.sent.borrow().len(), 1);
        assert_eq!(
            f.vm.status(),
            SubmissionStatus::Failed("Please wait 9:00 before sending another message.".to_string())
        );
    }

    #[test]
    fn submit_is_allowed_again_after_the_window() {
        let f = fixture(MockRelay::default(), MemoryStorage::new());
        block_on(f.vm.submit(message(), Language::En)).unwrap();
        f.now.set(START + TEN_MINUTES_MS);
        assert_eq!(block_on(f.vm.submit(message(), Language::En)), Ok(()));
        assert_eq!(f.relay.sent.borrow().len(), 2);
    }

    #[test]
    fn relay_failure_is_localized_and_keeps_window_open() {
        let f = fixture(MockRelay { fail: true, ..Default::default() }, MemoryStorage::new());
        let result = block_on(f.vm.submit(message(), Language::Fr));
        assert!(matches!(result, Err(ContactError::Mail(MailError::Network(_)))));
        assert_eq!(
            f.vm.status(),
            SubmissionStatus::Failed("Échec de l'envoi du message. Veuillez réessayer.".to_string())
        );
        assert_eq!(f.storage.get_item(LAST_EMAIL_TIME_KEY), None);
        assert_eq!(f.vm.remaining_secs(), 0);
    }

    #[test]
    fn blank_fields_are_rejected_locally() {
        let f = fixture(MockRelay::default(), MemoryStorage::new());
        let result = block_on(f.vm.submit(ContactMessage::new("Ada", "  ", "Hi"), Language::En));
        assert_eq!(result, Err(ContactError::MissingFields));
        assert!(f.relay.sent.borrow().is_empty());
    }

    #[test]
    fn corrupt_stored_timestamp_does_not_block() {
        let f = fixture(
            MockRelay::default(),
            MemoryStorage::new().with_item(LAST_EMAIL_TIME_KEY, "not-a-number"),
        );
        assert_eq!(f.vm.cooldown_message(Language::En), None);
        assert_eq!(block_on(f.vm.submit(message(), Language::En)), Ok(()));
    }

    #[test]
    fn cooldown_message_counts_down() {
        let f = fixture(
            MockRelay::default(),
            MemoryStorage::new().with_item(LAST_EMAIL_TIME_KEY, "1699999999000"),
        );
        assert_eq!(
            f.vm.cooldown_message(Language::En).as_deref(),
            Some("Please wait 9:59 before sending another message.")
        );
        f.now.set(START + TEN_MINUTES_MS);
        assert_eq!(f.vm.cooldown_message(Language::En), None);
    }

    #[test]
    fn storage_failure_after_send_still_reports_sent() {
        let f = fixture(MockRelay::default(), MemoryStorage::read_only());
        assert_eq!(block_on(f.vm.submit(message(), Language::En)), Ok(()));
        assert_eq!(f.vm.status(), SubmissionStatus::Sent);
    }

    #[test]
    fn draft_is_cleared_after_success_and_teardown_resets_status() {
        let f = fixture(MockRelay::default(), MemoryStorage::new());
        f.vm.update_draft(|d| d.name = "Ada".to_string());
        assert_eq!(f.vm.draft().name, "Ada");
        block_on(f.vm.submit(message(), Language::En)).unwrap();
        assert_eq!(f.vm.draft(), ContactMessage::new("", "", ""));
        f.vm.teardown();
        assert_eq!(f.vm.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn countdown_runs_during_cooldown_and_teardown_cancels_it() {
        let f = fixture(MockRelay::default(), MemoryStorage::new());
        block_on(f.vm.submit(message(), Language::En)).unwrap();

        let ticks = Rc::new(Cell::new(0));
        let t = ticks.clone();
        f.vm.start_countdown(move || t.set(t.get() + 1));
        assert!(f.vm.is_counting_down());

        f.scheduler.tick();
        assert_eq!(ticks.get(), 1);

        f.vm.teardown();
        assert!(!f.vm.is_counting_down());
        assert_eq!(f.scheduler.live_count(), 0);
        f.scheduler.tick();
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn countdown_is_not_started_without_cooldown() {
        let f = fixture(MockRelay::default(), MemoryStorage::new());
        f.vm.start_countdown(|| {});
        assert!(!f.vm.is_counting_down());
        assert_eq!(f.scheduler.live_count(), 0);
    }

    #[test]
    fn countdown_stops_itself_when_the_window_closes() {
        let f = fixture(MockRelay::default(), MemoryStorage::new());
        block_on(f.vm.submit(message(), Language::En)).unwrap();
        f.vm.start_countdown(|| {});

        f.now.set(START + TEN_MINUTES_MS);
        f.scheduler.tick();
        f.scheduler.tick();
        assert!(!f.vm.is_counting_down());
    }

    #[test]
    fn observers_are_notified_of_sending_and_sent() {
        let f = fixture(MockRelay::default(), MemoryStorage::new());
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        f.vm.subscribe(move || h.set(h.get() + 1));
        block_on(f.vm.submit(message(), Language::En)).unwrap();
        assert_eq!(hits.get(), 2);
    }
}
