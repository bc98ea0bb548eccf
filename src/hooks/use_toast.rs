// ============================================================================
// USE TOAST HOOK - Notification plumbing shared through context
// ============================================================================
// Screens push messages; the provider owns the queue and renders a bare
// container (styling lives in the host stylesheet). Toasts dismiss
// themselves after a few seconds or on click.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Warning => "toast toast-warning",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone)]
pub struct UseToastHandle {
    queue: UseReducerHandle<ToastQueue>,
    next_id: Rc<Cell<u32>>,
}

impl PartialEq for UseToastHandle {
    fn eq(&self, other: &Self) -> bool {
        self.queue == other.queue
    }
}

impl UseToastHandle {
    pub fn toasts(&self) -> &[Toast] {
        &self.queue.toasts
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastLevel::Warning, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.dispatch(ToastAction::Dismiss(id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.get().wrapping_add(1);
        self.next_id.set(id);

        self.queue.dispatch(ToastAction::Push(Toast { id, level, message }));

        let queue = self.queue.clone();
        Timeout::new(CONFIG.ui_config.toast_dismiss_ms, move || {
            queue.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_memo((), |_| Cell::new(0u32));

    let handle = UseToastHandle { queue, next_id };

    let rendered: Html = handle
        .toasts()
        .iter()
        .map(|toast| {
            let handle = handle.clone();
            let id = toast.id;
            let onclick = Callback::from(move |_| handle.dismiss(id));
            html! {
                <div key={toast.id} class={toast.level.css_class()} {onclick}>
                    { &toast.message }
                </div>
            }
        })
        .collect();

    html! {
        <ContextProvider<UseToastHandle> context={handle}>
            {props.children.clone()}
            <div class="toast-container">{ rendered }</div>
        </ContextProvider<UseToastHandle>>
    }
}

#[hook]
pub fn use_toast() -> UseToastHandle {
    use_context::<UseToastHandle>().expect("use_toast must be used within a ToastProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32, message: &str) -> Toast {
        Toast {
            id,
            level: ToastLevel::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn push_appends_in_order() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(toast(1, "saved")))
            .reduce(ToastAction::Push(toast(2, "deleted")));
        let messages: Vec<_> = queue.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["saved", "deleted"]);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(toast(1, "one")))
            .reduce(ToastAction::Push(toast(2, "two")))
            .reduce(ToastAction::Dismiss(1));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].id, 2);
    }

    #[test]
    fn dismissing_an_unknown_id_is_a_no_op() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(toast(1, "one")))
            .reduce(ToastAction::Dismiss(9));
        assert_eq!(queue.toasts.len(), 1);
    }
}
