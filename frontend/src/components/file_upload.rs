//! 文件选择与预览
//!
//! 校验失败时不改变当前选择。预览 URL 随选择一起被替换、清除或随组件卸载释放。

use crate::components::icons::{KindIcon, Upload, X};
use crate::notice::use_notices;
use crate::web::PreviewUrl;
use factfusion_shared::intake::{self, ContentKind, FileSelection};
use factfusion_shared::AppError;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// 当前选择在界面上需要的数据
#[derive(Debug, Clone, PartialEq)]
struct Shown {
    file: FileSelection,
    preview: Option<String>,
}

fn supported_formats(kind: ContentKind) -> String {
    kind.extensions()
        .iter()
        .map(|e| e.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
pub fn FileUpload(
    /// 所在标签页的类别，只接受这一类文件
    kind: ContentKind,
    /// 选择变化时通知父组件；清除时传 `None`
    #[prop(into)]
    on_select: Callback<Option<FileSelection>>,
) -> impl IntoView {
    let notices = use_notices();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let shown = RwSignal::new(None::<Shown>);
    let preview = StoredValue::new_local(None::<PreviewUrl>);
    let input_id = format!("{kind}-upload");
    let label_for = input_id.clone();

    let reset_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    let on_change = move |ev: leptos::web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let selection = match intake::accept(&file.name(), file.size() as u64, Some(kind)) {
            Ok(selection) => selection,
            Err(e) => {
                tracing::info!(name = %file.name(), error = %e, "file rejected");
                notices.show(AppError::from(e).notice());
                reset_input();
                return;
            }
        };

        let url = if selection.kind.is_previewable() {
            PreviewUrl::new(&file)
        } else {
            None
        };
        let preview_src = url.as_ref().map(|u| u.as_str().to_string());

        // 先更新界面，再释放旧的 URL
        shown.set(Some(Shown {
            file: selection.clone(),
            preview: preview_src,
        }));
        preview.set_value(url);

        tracing::debug!(name = %selection.name, kind = %selection.kind, "file selected");
        notices.info(
            "File uploaded",
            format!("{} has been added for analysis", selection.name),
        );
        on_select.run(Some(selection));
    };

    let clear = move |_| {
        reset_input();
        shown.set(None);
        preview.set_value(None);
        on_select.run(None);
    };

    view! {
        <div class="w-full">
            <input
                type="file"
                class="hidden"
                id=input_id
                accept=kind.accept_attr()
                node_ref=input_ref
                on:change=on_change
            />
            <Show
                when=move || shown.with(Option::is_some)
                fallback=move || {
                    view! {
                        <label
                            for=label_for.clone()
                            class="flex flex-col items-center cursor-pointer border-2 border-dashed border-base-content/20 rounded-lg p-10 text-center hover:border-primary transition-colors"
                        >
                            <div class="w-16 h-16 rounded-full bg-base-200 flex items-center justify-center mb-4">
                                <Upload attr:class="w-8 h-8 text-primary" />
                            </div>
                            <p class="mb-2">
                                {format!("Drag and drop your {kind} file here, or click to browse")}
                            </p>
                            <p class="text-sm opacity-60">
                                {format!("Supported formats: {}", supported_formats(kind))}
                            </p>
                        </label>
                    }
                }
            >
                <div class="relative bg-base-200 rounded-lg overflow-hidden p-4">
                    <button
                        type="button"
                        class="btn btn-circle btn-xs btn-ghost absolute top-2 right-2 z-10"
                        on:click=clear
                    >
                        <X attr:class="w-4 h-4" />
                    </button>
                    {move || {
                        shown
                            .get()
                            .map(|Shown { file, preview: src }| {
                                view! {
                                    <div class="flex items-center mb-3 gap-2">
                                        <KindIcon kind=file.kind class="w-5 h-5 text-primary" />
                                        <span class="font-medium">{file.name.clone()}</span>
                                    </div>
                                    {preview_view(file.kind, src)}
                                }
                            })
                    }}
                </div>
            </Show>
        </div>
    }
}

fn preview_view(kind: ContentKind, src: Option<String>) -> AnyView {
    match (kind, src) {
        (ContentKind::Image, Some(src)) => view! {
            <div class="w-full h-48">
                <img src=src alt="Preview" class="w-full h-full object-contain rounded-md" />
            </div>
        }
        .into_any(),
        (ContentKind::Audio, Some(src)) => view! {
            <audio controls=true class="w-full" src=src>
                "Your browser does not support the audio element."
            </audio>
        }
        .into_any(),
        (ContentKind::Video, Some(src)) => view! {
            <video controls=true class="w-full h-48 object-contain rounded-lg" src=src>
                "Your browser does not support the video element."
            </video>
        }
        .into_any(),
        _ => view! {
            <div class="bg-base-300 p-3 rounded-md text-sm opacity-70">
                "Document ready for analysis"
            </div>
        }
        .into_any(),
    }
}
