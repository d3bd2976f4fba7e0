//! Selection state and the filter/sort engine
//!
//! The selection is owned by the application and passed into these pure
//! functions explicitly; nothing here touches global state. Every click
//! recomputes the visible list from scratch, which is plenty fast for a
//! catalog of this size.

use std::cmp::Ordering;

use super::data::Community;

/// The active filters: at most one category and one tag
///
/// Both start unset. Filter-bar buttons overwrite the selection
/// unconditionally (the "All" button sends None); tag chips inside cards
/// toggle off when the same tag is clicked again. The asymmetry matches the
/// shipped behavior of the catalog page this app replaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub category: Option<String>,
    pub tag: Option<String>,
}

impl Selection {
    /// Filter-bar category button: overwrite, never toggle off
    pub fn select_category(&mut self, id: Option<String>) {
        self.category = id;
    }

    /// Filter-bar tag button: overwrite, never toggle off
    pub fn select_tag(&mut self, id: Option<String>) {
        self.tag = id;
    }

    /// Tag chip inside a card: re-clicking the active tag clears it
    pub fn toggle_tag(&mut self, id: &str) {
        if self.tag.as_deref() == Some(id) {
            self.tag = None;
        } else {
            self.tag = Some(id.to_string());
        }
    }

    /// True iff the community passes both active filters
    ///
    /// An unset filter passes everything; both filters must agree (AND).
    pub fn matches(&self, community: &Community) -> bool {
        if let Some(category) = &self.category {
            if !community.categories.contains(category) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !community.tags.contains(tag) {
                return false;
            }
        }
        true
    }
}

/// Catalog ordering: rating descending, then total members descending
///
/// Used with a stable sort, so communities with identical rating and
/// member count keep their dataset order.
pub fn compare(a: &Community, b: &Community) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then(b.members_count().cmp(&a.members_count()))
}

/// Filter the full community list by the selection, then sort it
///
/// Recomputed from scratch on every selection change; no incremental
/// update, no memoization.
pub fn visible_communities<'a>(
    communities: &'a [Community],
    selection: &Selection,
) -> Vec<&'a Community> {
    let mut visible: Vec<&Community> = communities
        .iter()
        .filter(|c| selection.matches(c))
        .collect();
    visible.sort_by(|a, b| compare(a, b));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Platform;
    use std::collections::BTreeMap;

    fn community(id: &str, rating: f64, member_counts: &[u64]) -> Community {
        let platforms: BTreeMap<String, Platform> = member_counts
            .iter()
            .enumerate()
            .map(|(i, &members)| {
                (
                    format!("platform{}", i),
                    Platform {
                        url: String::new(),
                        members,
                    },
                )
            })
            .collect();

        Community {
            id: id.to_string(),
            name: format!("Community {}", id),
            description: String::new(),
            created_at: String::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            rating,
            platforms,
        }
    }

    fn ids(visible: &[&Community]) -> Vec<String> {
        visible.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_rating_beats_members_then_members_break_ties() {
        // id 3 wins on rating alone; ids 1 and 2 tie on rating,
        // so id 2 wins on its larger member count
        let communities = vec![
            community("1", 4.0, &[10]),
            community("2", 4.0, &[50]),
            community("3", 5.0, &[]),
        ];

        let visible = visible_communities(&communities, &Selection::default());
        assert_eq!(ids(&visible), ["3", "2", "1"]);
    }

    #[test]
    fn test_sort_is_monotonically_non_increasing() {
        let communities = vec![
            community("a", 2.5, &[7]),
            community("b", 4.0, &[1]),
            community("c", 2.5, &[100]),
            community("d", 0.0, &[999]),
            community("e", 4.0, &[3, 4]),
        ];

        let visible = visible_communities(&communities, &Selection::default());
        for pair in visible.windows(2) {
            let (hi, lo) = (pair[0], pair[1]);
            let hi_key = (hi.rating, hi.members_count());
            let lo_key = (lo.rating, lo.members_count());
            assert!(hi_key >= lo_key, "{:?} sorted before {:?}", lo_key, hi_key);
        }
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let communities = vec![
            community("first", 3.0, &[5]),
            community("second", 3.0, &[5]),
            community("third", 3.0, &[5]),
        ];

        let visible = visible_communities(&communities, &Selection::default());
        assert_eq!(ids(&visible), ["first", "second", "third"]);
    }

    #[test]
    fn test_no_selection_is_identity_filter() {
        let communities = vec![
            community("1", 1.0, &[1]),
            community("2", 1.0, &[1]),
        ];

        let visible = visible_communities(&communities, &Selection::default());
        assert_eq!(visible.len(), communities.len());
    }

    #[test]
    fn test_category_filter_keeps_only_matches() {
        let mut a = community("a", 1.0, &[]);
        a.categories = vec!["cat1".to_string()];
        let mut b = community("b", 1.0, &[]);
        b.categories = vec!["cat2".to_string()];

        let selection = Selection {
            category: Some("cat1".to_string()),
            tag: None,
        };

        let communities = [a, b];
        let visible = visible_communities(&communities, &selection);
        assert_eq!(ids(&visible), ["a"]);
    }

    #[test]
    fn test_category_and_tag_filters_are_anded() {
        let mut both = community("both", 1.0, &[]);
        both.categories = vec!["cat1".to_string()];
        both.tags = vec!["t1".to_string()];

        let mut category_only = community("cat-only", 1.0, &[]);
        category_only.categories = vec!["cat1".to_string()];

        let mut tag_only = community("tag-only", 1.0, &[]);
        tag_only.tags = vec!["t1".to_string()];

        let selection = Selection {
            category: Some("cat1".to_string()),
            tag: Some("t1".to_string()),
        };

        let communities = [both, category_only, tag_only];
        let visible = visible_communities(&communities, &selection);
        assert_eq!(ids(&visible), ["both"]);
    }

    #[test]
    fn test_chip_toggles_off_on_reclick() {
        let mut selection = Selection::default();

        selection.toggle_tag("t1");
        assert_eq!(selection.tag.as_deref(), Some("t1"));

        selection.toggle_tag("t1");
        assert_eq!(selection.tag, None);

        // Clicking a different chip switches instead of clearing
        selection.toggle_tag("t1");
        selection.toggle_tag("t2");
        assert_eq!(selection.tag.as_deref(), Some("t2"));
    }

    #[test]
    fn test_filter_bar_buttons_overwrite_without_toggling() {
        let mut selection = Selection::default();

        selection.select_tag(Some("t1".to_string()));
        selection.select_tag(Some("t1".to_string()));
        assert_eq!(selection.tag.as_deref(), Some("t1"));

        selection.select_category(Some("cat1".to_string()));
        selection.select_category(Some("cat1".to_string()));
        assert_eq!(selection.category.as_deref(), Some("cat1"));

        // "All" clears via an explicit None, not via re-click
        selection.select_category(None);
        assert_eq!(selection.category, None);
        selection.select_tag(None);
        assert_eq!(selection.tag, None);
    }
}
