//! 输入标签页组件
//!
//! 文本标签页是一个文本框，其余三个标签页各自是限定类别的文件选择。

use leptos::prelude::*;

use super::run_state::AnalysisRun;
use crate::components::file_upload::FileUpload;
use crate::components::icons::KindIcon;
use factfusion_shared::{ContentKind, FileSelection};

#[component]
pub fn InputTabs(run: AnalysisRun) -> impl IntoView {
    view! {
        <div role="tablist" class="tabs tabs-boxed grid grid-cols-4 mb-6">
            {ContentKind::TABS
                .into_iter()
                .map(|kind| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || {
                                if run.tab.get() == kind { "tab tab-active gap-2" } else { "tab gap-2" }
                            }
                            disabled=move || run.is_busy()
                            on:click=move |_| run.select_tab(kind)
                        >
                            <KindIcon kind=kind class="w-5 h-5" />
                            <span class="hidden sm:inline capitalize">{kind.as_str()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>

        // 切换标签页时整体重建，文件选择和预览随之释放
        {move || match run.tab.get() {
            ContentKind::Text => view! {
                <textarea
                    class="textarea textarea-bordered w-full h-40 resize-none"
                    placeholder="Paste the text content you want to analyze..."
                    prop:value=move || run.text.get()
                    on:input=move |ev| run.text.set(event_target_value(&ev))
                ></textarea>
            }
            .into_any(),
            kind => view! {
                <FileUpload kind=kind on_select={move |file: Option<FileSelection>| run.set_file(file)} />
            }
            .into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factfusion_shared::intake;

    #[test]
    fn typed_selection_closure_becomes_callback() {
        let owner = Owner::new();
        owner.with(|| {
            let selected = RwSignal::new(None::<FileSelection>);
            let on_select: Callback<Option<FileSelection>> =
                Callback::new(move |file: Option<FileSelection>| selected.set(file));

            let file = intake::accept("clip.mp4", 10, Some(ContentKind::Video)).unwrap();
            on_select.run(Some(file.clone()));
            assert_eq!(selected.get_untracked(), Some(file));

            on_select.run(None);
            assert_eq!(selected.get_untracked(), None);
        });
    }
}
