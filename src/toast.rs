use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const TOAST_VISIBLE_MS: u32 = 3_000;
pub const TOAST_SLIDE_MS: u32 = 300;

pub type Notify = Callback<(AttrValue, ToastKind)>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: AttrValue,
    pub kind: ToastKind,
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_expired: Callback<u64>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="notification-stack" aria-live="polite">
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id}
                    toast={toast.clone()}
                    on_expired={props.on_expired.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_expired: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let entered = use_state(|| false);
    let leaving = use_state(|| false);
    let timers = use_mut_ref(Vec::<Timeout>::new);

    {
        let entered = entered.clone();
        let leaving = leaving.clone();
        let on_expired = props.on_expired.clone();
        let id = props.toast.id;
        let timers = timers.clone();
        use_effect_with((), move |_| {
            entered.set(true);

            let dismiss = {
                let timers = timers.clone();
                Timeout::new(TOAST_VISIBLE_MS, move || {
                    leaving.set(true);
                    let removed = Timeout::new(TOAST_SLIDE_MS, move || on_expired.emit(id));
                    timers.borrow_mut().push(removed);
                })
            };
            timers.borrow_mut().push(dismiss);

            || ()
        });
    }

    let class = classes!(
        "notification",
        format!("notification-{}", props.toast.kind.as_str()),
        (*entered).then_some("is-shown"),
        (*leaving).then_some("is-leaving"),
    );

    html! {
        <div class={class}>
            <div class="notification-content">
                <span>{ props.toast.message.clone() }</span>
            </div>
        </div>
    }
}
