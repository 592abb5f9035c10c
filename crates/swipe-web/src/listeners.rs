//! DOM event listener handles
//!
//! A [`Listener`] removes itself from its target when dropped, so detaching
//! a group of listeners is clearing the [`ListenerSet`] that owns them.

use swipe_core::{CarouselError, CarouselResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::console::describe;

/// A closure registered on one event target
pub(crate) struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `kind` events on `target`.
    ///
    /// Non-passive listeners may call `preventDefault` on touch events.
    pub(crate) fn attach(
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> CarouselResult<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| CarouselError::dom(format!("addEventListener({}): {}", kind, describe(&e))))?;

        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Listeners attached and detached together
#[derive(Default)]
pub(crate) struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    pub(crate) fn add(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> CarouselResult<()> {
        self.listeners.push(Listener::attach(target, kind, true, handler)?);
        Ok(())
    }

    /// Same as [`ListenerSet::add`] but allows `preventDefault`.
    pub(crate) fn add_active(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> CarouselResult<()> {
        self.listeners.push(Listener::attach(target, kind, false, handler)?);
        Ok(())
    }

    /// Detach every listener
    pub(crate) fn clear(&mut self) {
        self.listeners.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}
