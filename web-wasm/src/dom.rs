//! DOM操作ユーティリティ

use portfolio_common::Section;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// セクションまでスムーズスクロール
///
/// 要素が見つかったら true を返す。
pub fn scroll_to_section(section: Section) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };

    match document.get_element_by_id(section.id()) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            log(&format!("scroll target not found: #{}", section.id()));
            false
        }
    }
}

/// ブラウザコンソールへ出力
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// 現在の西暦年
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
