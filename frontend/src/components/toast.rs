use yew::prelude::*;
use crate::hooks::{Notice, NoticeKind};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let (class, icon) = match notice.kind {
        NoticeKind::Success => (styles::TOAST_SUCCESS, "✓"),
        NoticeKind::Error => (styles::TOAST_ERROR, "!"),
    };

    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!(styles::TOAST, class)} role="status">
            <span class="mr-2 font-bold">{icon}</span>
            <div class="flex-1">{&notice.message}</div>
            <button onclick={onclick} class="ml-4 opacity-70 hover:opacity-100" aria-label="close">{"×"}</button>
        </div>
    }
}
