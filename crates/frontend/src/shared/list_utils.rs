/// List helpers shared by the pages: search box, match highlighting, sort markers
use crate::shared::config::use_config;
use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;
use leptos::prelude::*;

pub use contracts::shared::search::{filter_list, fold_case, sort_list, Searchable, Sortable};

/// Split `text` into `(segment, is_match)` parts for a case-insensitive query.
/// Folds with [`fold_case`], so every row `filter_list` keeps gets a span.
pub fn match_segments(text: &str, query: &str) -> Vec<(String, bool)> {
    let needle: Vec<char> = fold_case(query).chars().collect();
    if needle.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    // folded char paired with the index of the source char it came from
    let folded: Vec<(char, usize)> = chars
        .iter()
        .enumerate()
        .flat_map(|(k, (_, c))| c.to_lowercase().map(move |l| (l, k)))
        .collect();
    let byte_at = |k: usize| chars.get(k).map(|(b, _)| *b).unwrap_or(text.len());

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        let window = &folded[i..i + needle.len()];
        if window.iter().map(|(c, _)| *c).eq(needle.iter().copied()) {
            let start = window[0].1.max(plain_start);
            let end = window[needle.len() - 1].1 + 1;
            if start > plain_start {
                segments.push((text[byte_at(plain_start)..byte_at(start)].to_string(), false));
            }
            if end > start {
                segments.push((text[byte_at(start)..byte_at(end)].to_string(), true));
            }
            plain_start = end;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    if plain_start < chars.len() {
        segments.push((text[byte_at(plain_start)..].to_string(), false));
    }
    segments
}

/// Text with matches of `query` wrapped in `<mark>`
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let parts = match_segments(text, query)
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! { <mark class="search-highlight">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect_view();
    view! { <span>{parts}</span> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Called with the query once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let debouncer = Debouncer::new(use_config().search.debounce_ms);
    let input_value = RwSignal::new(String::new());

    let handle_input = move |value: String| {
        input_value.set(value.clone());
        debouncer.call(move || on_change.run(value));
    };

    let clear = move |_| {
        debouncer.cancel();
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="form__input search-input__field"
                class:search-input__field--active=move || !input_value.get().trim().is_empty()
                placeholder=move || placeholder.get().unwrap_or_else(|| "Search...".to_string())
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="button button--icon search-input__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Sort marker for a column header
pub fn get_sort_indicator(current_field: Option<&str>, field: &str, ascending: bool) -> &'static str {
    if current_field == Some(field) {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: Option<&str>, field: &str) -> &'static str {
    if current_field == Some(field) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_segments_case_insensitive() {
        let parts = match_segments("Clothing and cloth", "CLOTH");
        assert_eq!(
            parts,
            vec![
                ("Cloth".to_string(), true),
                ("ing and ".to_string(), false),
                ("cloth".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_match_segments_unicode_and_empty() {
        let parts = match_segments("Xi măng PCB40", "MĂNG");
        assert_eq!(parts[1], ("măng".to_string(), true));
        assert_eq!(match_segments("Books", ""), vec![("Books".to_string(), false)]);
        assert_eq!(match_segments("Books", "  "), vec![("Books".to_string(), false)]);
        assert_eq!(match_segments("Books", "xyz"), vec![("Books".to_string(), false)]);
    }

    #[test]
    fn test_match_segments_agree_with_filter_folding() {
        // "İ" lower-cases to two chars; the row matches so it must get a span
        let text = "KHO İSTANBUL";
        let query = "i\u{307}stan";
        assert!(fold_case(text).contains(&fold_case(query)));
        let parts = match_segments(text, query);
        assert_eq!(
            parts,
            vec![
                ("KHO ".to_string(), false),
                ("İSTAN".to_string(), true),
                ("BUL".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_match_segments_keep_whitespace_in_query() {
        let parts = match_segments("Xi măng", " măng");
        assert_eq!(parts, vec![("Xi".to_string(), false), (" măng".to_string(), true)]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(Some("name"), "name", true), " ▲");
        assert_eq!(get_sort_indicator(Some("name"), "name", false), " ▼");
        assert_eq!(get_sort_indicator(None, "name", true), " ⇅");
    }
}
