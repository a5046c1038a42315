/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Truncate a full listing to the global `--limit`, if one was given.
pub fn apply_global_limit<T>(items: &mut Vec<T>, global: Option<u32>) -> anyhow::Result<()> {
    if let Some(limit) = global {
        items.truncate(usize::try_from(limit)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{apply_global_limit, effective_limit};

    #[test]
    fn local_takes_precedence() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
    }

    #[test]
    fn global_used_when_local_missing() {
        assert_eq!(effective_limit(None, Some(10), 20), 10);
    }

    #[test]
    fn fallback_used_when_none_set() {
        assert_eq!(effective_limit(None, None, 20), 20);
    }

    #[test]
    fn zero_is_a_valid_local_limit() {
        assert_eq!(effective_limit(Some(0), Some(10), 20), 0);
    }

    #[test]
    fn listing_truncated_only_with_global_limit() {
        let mut items = vec![1, 2, 3];
        apply_global_limit(&mut items, None).unwrap();
        assert_eq!(items, [1, 2, 3]);

        apply_global_limit(&mut items, Some(2)).unwrap();
        assert_eq!(items, [1, 2]);
    }
}
