use crate::components::icons::X;
use leptos::prelude::*;

/// daisyUI 模态框
///
/// 由 `open` 信号控制 `<dialog>` 的打开与关闭；内容只在打开时挂载，
/// 每次打开都是一份新的表单状态。
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(optional, into)] title: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    if let Err(e) = dialog.show_modal() {
                        tracing::warn!(error = ?e, "showModal failed");
                    }
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <button
                    type="button"
                    class="btn btn-sm btn-circle btn-ghost absolute right-4 top-4"
                    on:click=move |_| open.set(false)
                >
                    <X attr:class="w-5 h-5" />
                </button>
                {title.map(|title| view! { <h3 class="text-2xl font-bold mb-6">{title}</h3> })}
                <Show when=move || open.get()>{children()}</Show>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
