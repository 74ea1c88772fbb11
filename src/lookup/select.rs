//! Selection policy for multi-candidate results.
use rand::Rng;

/// Chooses one candidate from a ranked, non-empty list.
///
/// Without a requested index the choice is uniformly random over the
/// whole list. A requested index outside `[0, len - 1]` falls back to
/// index 0 instead of erroring. The chosen index is returned so the
/// caller can display which alternative was picked.
pub fn choose<T>(candidates: &[T], requested: Option<i64>) -> (usize, &T) {
    assert!(!candidates.is_empty(), "choose requires at least one candidate");
    let max = candidates.len() - 1;
    let index = match requested {
        None => rand::thread_rng().gen_range(0..=max),
        Some(i) if (0..=max as i64).contains(&i) => i as usize,
        Some(_) => 0,
    };
    (index, &candidates[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: [&str; 4] = ["first", "second", "third", "fourth"];

    #[test]
    fn in_range_index_selects_that_exact_candidate() {
        for i in 0..ITEMS.len() {
            let (index, item) = choose(&ITEMS, Some(i as i64));
            assert_eq!(index, i);
            assert_eq!(*item, ITEMS[i]);
        }
    }

    #[test]
    fn out_of_range_index_falls_back_to_the_first_candidate() {
        assert_eq!(choose(&ITEMS, Some(4)), (0, &"first"));
        assert_eq!(choose(&ITEMS, Some(100)), (0, &"first"));
        assert_eq!(choose(&ITEMS, Some(-1)), (0, &"first"));
    }

    #[test]
    fn random_choice_stays_in_bounds() {
        for _ in 0..200 {
            let (index, item) = choose(&ITEMS, None);
            assert!(index < ITEMS.len());
            assert_eq!(*item, ITEMS[index]);
        }
    }

    #[test]
    fn single_candidate_is_always_chosen() {
        let only = ["alone"];
        assert_eq!(choose(&only, None), (0, &"alone"));
        assert_eq!(choose(&only, Some(3)), (0, &"alone"));
    }
}
