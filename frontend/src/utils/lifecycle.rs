use leptos::*;
use std::{cell::Cell, rc::Rc};

/// Flag that flips to unmounted when the owning component is cleaned up.
/// Deferred work checks it before touching page state.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        let guard = Self::detached();
        let flag = guard.0.clone();
        on_cleanup(move || flag.set(false));
        guard
    }

    pub fn detached() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// A transient page message. Every `show` or `clear` starts a new
/// generation, so a pending auto-clear only removes the message it was
/// scheduled for, even when the same text is shown twice in a row.
#[derive(Clone, Copy)]
pub struct Flash {
    message: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
}

impl Flash {
    pub fn new() -> Self {
        Self {
            message: create_rw_signal(None),
            generation: store_value(0),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.message.get()
    }

    pub fn get_untracked(&self) -> Option<String> {
        self.message.get_untracked()
    }

    /// Shows `text` and returns the generation it was shown under.
    pub fn show(&self, text: impl Into<String>) -> u64 {
        let generation = self.bump();
        self.message.set(Some(text.into()));
        generation
    }

    pub fn clear(&self) {
        self.bump();
        self.message.set(None);
    }

    /// Clears the message only if nothing was shown or cleared since
    /// `generation`.
    pub fn clear_if_current(&self, generation: u64) -> bool {
        if self.generation.get_value() != generation {
            return false;
        }
        self.message.set(None);
        true
    }

    /// Shows `text` and clears it after `delay_ms` unless the page went away
    /// or a newer message replaced it.
    pub fn show_for(&self, text: impl Into<String>, guard: MountGuard, delay_ms: u32) {
        let generation = self.show(text);
        self.schedule_clear(generation, guard, delay_ms);
    }

    pub fn schedule_clear(&self, generation: u64, guard: MountGuard, delay_ms: u32) {
        let flash = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            if guard.is_mounted() {
                flash.clear_if_current(generation);
            }
        });
    }

    fn bump(&self) -> u64 {
        self.generation.update_value(|value| *value = value.wrapping_add(1));
        self.generation.get_value()
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}
