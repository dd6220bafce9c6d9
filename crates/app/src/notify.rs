//! Transient per-page message banners.
//!
//! Errors stay up for 5 seconds, successes for 3, matching the rest of the
//! dashboard's feedback timing. A superseding message bumps the epoch so the
//! stale timer silently expires; unmounting the page drops the timer task
//! with the component scope.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_ui::BannerKind;

const ERROR_DISMISS_MS: u32 = 5_000;
const SUCCESS_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct FlashMessage {
    pub kind: BannerKind,
    pub text: String,
}

/// Signal-backed flash message slot with auto-dismissal.
#[derive(Clone, Copy)]
pub struct FlashHandle {
    current: Signal<Option<FlashMessage>>,
    epoch: Signal<u64>,
}

impl FlashHandle {
    pub fn error(&mut self, text: impl Into<String>) {
        self.show(BannerKind::Error, text.into(), ERROR_DISMISS_MS);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.show(BannerKind::Success, text.into(), SUCCESS_DISMISS_MS);
    }

    pub fn clear(&mut self) {
        self.current.set(None);
    }

    pub fn message(&self) -> Option<FlashMessage> {
        self.current.read().clone()
    }

    fn show(&mut self, kind: BannerKind, text: String, dismiss_after_ms: u32) {
        let issue = (self.epoch)() + 1;
        self.epoch.set(issue);
        self.current.set(Some(FlashMessage { kind, text }));

        let mut current = self.current;
        let epoch = self.epoch;
        spawn(async move {
            TimeoutFuture::new(dismiss_after_ms).await;
            // Only the newest message may dismiss the banner.
            if epoch() == issue {
                current.set(None);
            }
        });
    }
}

/// Hook creating a page-scoped flash slot.
pub fn use_flash() -> FlashHandle {
    FlashHandle {
        current: use_signal(|| None),
        epoch: use_signal(|| 0),
    }
}
