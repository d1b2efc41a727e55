//! Transient confirmation messages shown in the corner of the page.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Notices kept on screen at most; older ones are dropped first
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Info => "notice notice--info",
            NoticeKind::Warning => "notice notice--warning",
            NoticeKind::Error => "notice notice--error",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            NoticeKind::Success => "check",
            NoticeKind::Info => "info",
            NoticeKind::Warning | NoticeKind::Error => "alert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Notice {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    /// Oldest first
    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct Notifications {
    queue: RwSignal<NoticeQueue>,
    display_ms: u32,
}

impl Notifications {
    pub fn new(display_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
            display_ms,
        }
    }

    pub fn push(&self, kind: NoticeKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            NoticeKind::Error | NoticeKind::Warning => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }
        let id = self
            .queue
            .try_update(|q| q.push(kind, message))
            .unwrap_or_default();

        let queue = self.queue;
        let delay = self.display_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn provide_notifications(display_ms: u32) -> Notifications {
    let service = Notifications::new(display_ms);
    provide_context(service);
    service
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not found. Call provide_notifications in App.")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notice-host">
            <For
                each=move || service.queue.get().items().to_vec()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() role="status">
                            {icon(n.kind.icon_name())}
                            <span class="notice__message">{n.message.clone()}</span>
                            <button class="button button--icon notice__close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_order_and_dismisses() {
        let mut q = NoticeQueue::default();
        let a = q.push(NoticeKind::Success, "Created");
        let b = q.push(NoticeKind::Info, "Saved");
        let c = q.push(NoticeKind::Error, "Failed");
        q.dismiss(b);
        let ids: Vec<_> = q.items().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a, c]);
        q.dismiss(b);
        assert_eq!(q.items().len(), 2);
    }

    #[test]
    fn test_queue_drops_oldest_over_limit() {
        let mut q = NoticeQueue::default();
        for i in 0..(MAX_VISIBLE + 2) {
            q.push(NoticeKind::Info, format!("n{}", i));
        }
        assert_eq!(q.items().len(), MAX_VISIBLE);
        assert_eq!(q.items()[0].message, "n2");
    }
}
