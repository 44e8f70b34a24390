use crate::naming::item_display_name;
use crate::section::ContainerSection;

/// Narrow sections to those matching any whitespace-separated term.
///
/// A section whose label or id contains a term is kept whole. Otherwise it
/// keeps only items whose id or display name contains a term, and is
/// dropped when none do. Matching is case-insensitive substring, terms are
/// OR'ed. An empty query returns every section.
pub fn filter_sections(sections: &[ContainerSection], query: &str) -> Vec<ContainerSection> {
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if terms.is_empty() {
        return sections.to_vec();
    }

    let matches = |text: &str| {
        let text = text.to_lowercase();
        terms.iter().any(|term| text.contains(term.as_str()))
    };

    sections
        .iter()
        .filter_map(|section| {
            if matches(&section.label) || matches(&section.id) {
                return Some(section.clone());
            }

            let items: Vec<_> = section
                .items
                .iter()
                .filter(|item| matches(&item.item_id) || matches(&item_display_name(&item.item_id)))
                .cloned()
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(ContainerSection {
                    id: section.id.clone(),
                    label: section.label.clone(),
                    items,
                })
            }
        })
        .collect()
}
