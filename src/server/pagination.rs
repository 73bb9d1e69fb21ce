pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` of `items`, empty when the page starts past the end.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_and_last_page() {
        assert_eq!(paginate(items(19), 1), (0..10).collect::<Vec<_>>());
        assert_eq!(paginate(items(19), 2), (10..19).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_page_is_empty() {
        assert!(paginate(items(19), 3).is_empty());
        assert!(paginate(items(19), 999).is_empty());
        assert!(paginate(items(19), usize::MAX).is_empty());
        assert!(paginate(items(0), 1).is_empty());
    }

    #[test]
    fn pages_reconstruct_full_list() {
        for n in [0, 1, 9, 10, 11, 20, 37] {
            let pages = n / QUESTIONS_PER_PAGE + 1;
            let mut joined = Vec::new();
            for page in 1..=pages {
                let chunk = paginate(items(n), page);
                assert!(chunk.len() <= QUESTIONS_PER_PAGE);
                joined.extend(chunk);
            }
            assert_eq!(joined, items(n));
        }
    }
}
