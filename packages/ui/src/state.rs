use dioxus::prelude::*;

/// Mutable access to a controller's view state.
///
/// Controllers never hold a borrow across an `.await`; every change goes
/// through one short `update` call. Pages pass a [`Signal`], tests pass a
/// plain `&mut` value.
pub trait StateHandle<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T: 'static> StateHandle<T> for Signal<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        self.with_mut(f)
    }
}

impl<T> StateHandle<T> for &mut T {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(self)
    }
}

/// Holds a busy flag up for as long as it lives.
///
/// The flag is reset on drop, so every exit path of a submit handler clears
/// it. A flag whose component is already gone is left alone.
pub struct BusyGuard {
    flag: Signal<bool>,
}

impl BusyGuard {
    pub fn engage(mut flag: Signal<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if let Ok(mut busy) = self.flag.try_write() {
            *busy = false;
        }
    }
}

/// Wait without blocking the event loop.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms.into())).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms.into())).await;
}
