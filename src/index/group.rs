//! Category grouping

use indexmap::IndexMap;

use crate::content::Post;

/// Posts grouped by exact category label.
///
/// Categories keep the order in which they first appear in `posts`. Within a
/// group posts are sorted newest first; equal dates keep their input order.
pub fn group_by_category<'a>(posts: &[&'a Post]) -> IndexMap<String, Vec<&'a Post>> {
    let mut groups: IndexMap<String, Vec<&'a Post>> = IndexMap::new();

    for post in posts {
        groups.entry(post.category.clone()).or_default().push(*post);
    }

    // sort_by is stable
    for group in groups.values_mut() {
        group.sort_by(|a, b| b.date.cmp(&a.date));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn post(id: &str, category: &str, day: u32) -> Post {
        let date = Local.with_ymd_and_hms(2025, 10, day, 0, 0, 0).unwrap();
        Post::new(id, format!("Post {id}"), category, date, "")
    }

    fn ids(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_descending_date_within_group() {
        let posts = vec![post("1", "Dev", 23), post("2", "Dev", 25)];
        let refs: Vec<&Post> = posts.iter().collect();

        let groups = group_by_category(&refs);
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups["Dev"]), vec!["2", "1"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let posts = vec![
            post("a", "Dev", 20),
            post("b", "Dev", 22),
            post("c", "Dev", 20),
            post("d", "Dev", 20),
        ];
        let refs: Vec<&Post> = posts.iter().collect();

        let groups = group_by_category(&refs);
        assert_eq!(ids(&groups["Dev"]), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let posts = vec![
            post("1", "블로그", 25),
            post("2", "개발", 24),
            post("3", "개발", 23),
            post("4", "튜토리얼", 22),
            post("6", "튜토리얼", 20),
        ];
        let refs: Vec<&Post> = posts.iter().collect();

        let groups = group_by_category(&refs);
        let mut all: Vec<String> = groups.values().flat_map(|g| ids(g)).collect();
        all.sort();
        assert_eq!(all, vec!["1", "2", "3", "4", "6"]);

        let order: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["블로그", "개발", "튜토리얼"]);
    }

    #[test]
    fn test_exact_label_equality() {
        let posts = vec![post("1", "Dev", 20), post("2", "dev", 21), post("3", "Dev ", 22)];
        let refs: Vec<&Post> = posts.iter().collect();
        assert_eq!(group_by_category(&refs).len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }
}
