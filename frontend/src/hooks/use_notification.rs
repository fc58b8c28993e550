use gloo_timers::callback::Timeout;
use shared::constants::NOTIFICATION_MS;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

#[derive(Clone)]
pub struct NotificationState {
    pub current: Option<Notice>,
    pub notify: Callback<Notice>,
    pub close: Callback<()>,
}

/// Transient toast that hides itself after a few seconds.
#[hook]
pub fn use_notification() -> NotificationState {
    let current = use_state(|| None::<Notice>);
    let timer = use_mut_ref(|| None::<Timeout>);

    let notify = {
        let current = current.clone();
        let timer = timer.clone();
        Callback::from(move |notice: Notice| {
            current.set(Some(notice));

            // Replacing the handle cancels the previous countdown
            let current = current.clone();
            *timer.borrow_mut() = Some(Timeout::new(NOTIFICATION_MS, move || {
                current.set(None);
            }));
        })
    };

    let close = {
        let current = current.clone();
        let timer = timer.clone();
        Callback::from(move |_| {
            timer.borrow_mut().take();
            current.set(None);
        })
    };

    NotificationState {
        current: (*current).clone(),
        notify,
        close,
    }
}
