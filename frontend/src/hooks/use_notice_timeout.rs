use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long a notification stays on screen
pub const NOTICE_LIFETIME_MS: u32 = 3000;

/// Emit `on_expire` with the notice id once it has been visible long enough.
///
/// A new notice cancels the pending timer and starts its own. Unmounting
/// cancels delivery.
#[hook]
pub fn use_notice_timeout(notice_id: Option<u32>, on_expire: Callback<u32>) {
    use_effect_with(notice_id, move |notice_id| {
        let alive = Rc::new(Cell::new(true));
        if let Some(id) = *notice_id {
            let alive = alive.clone();
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_LIFETIME_MS).await;
                if alive.get() {
                    on_expire.emit(id);
                }
            });
        }
        move || alive.set(false)
    });
}
