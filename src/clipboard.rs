use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::toast::{Notify, ToastKind};

pub const COPY_FEEDBACK_MS: u32 = 2_000;
pub const COPY_FAILED_MESSAGE: &str = "Copy failed, please copy manually.";

pub const CONTACT_EMAIL: &str = "1758972636@qq.com";
pub const DEMO_SHARE_TEXT: &str =
    "Fate Awaits playable demo: https://pan.baidu.com/s/1V5rqULloIiLVQ8TBfju5Pg?pwd=u8mv (access code: u8mv)";

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    pub idle_label: AttrValue,
    pub success_message: AttrValue,
    pub notify: Notify,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let copied = use_state(|| false);
    // Replaced on every click, so the last invocation's timer decides the
    // final revert.
    let revert_timer = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let copied = copied.clone();
        let revert_timer = revert_timer.clone();
        let text = props.text.clone();
        let success_message = props.success_message.clone();
        let notify = props.notify.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let revert_timer = revert_timer.clone();
            let text = text.clone();
            let success_message = success_message.clone();
            let notify = notify.clone();
            spawn_local(async move {
                let Some(clipboard) = web_sys::window().map(|win| win.navigator().clipboard())
                else {
                    notify.emit((AttrValue::from(COPY_FAILED_MESSAGE), ToastKind::Error));
                    return;
                };

                match JsFuture::from(clipboard.write_text(&text)).await {
                    Ok(_) => {
                        notify.emit((success_message, ToastKind::Success));
                        copied.set(true);
                        let revert = {
                            let copied = copied.clone();
                            Timeout::new(COPY_FEEDBACK_MS, move || copied.set(false))
                        };
                        *revert_timer.borrow_mut() = Some(revert);
                    }
                    Err(_) => {
                        notify.emit((AttrValue::from(COPY_FAILED_MESSAGE), ToastKind::Error));
                    }
                }
            });
        })
    };

    let label = if *copied {
        AttrValue::from("Copied")
    } else {
        props.idle_label.clone()
    };

    html! {
        <button
            type="button"
            class={classes!("copy-btn", (*copied).then_some("copied"))}
            onclick={onclick}
        >
            <span class="copy-tooltip">{ label }</span>
        </button>
    }
}
