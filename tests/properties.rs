use dsa_kit::{
    are_anagrams, are_anagrams_ignore_case, concat_array, find_duplicate_values,
    has_adjacent_duplicate, has_duplicate, is_palindrome, reverse_string, second_largest,
    two_sum_brute_force, two_sum_complement,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn concat_repeats_input(arr in prop::collection::vec(any::<i64>(), 0..64)) {
        let out = concat_array(&arr);

        prop_assert_eq!(out.len(), 2 * arr.len());
        for (i, v) in arr.iter().enumerate() {
            prop_assert_eq!(&out[i], v);
            prop_assert_eq!(&out[i + arr.len()], v);
        }
    }

    #[test]
    fn reverse_is_an_involution(s in ".*") {
        prop_assert_eq!(reverse_string(&reverse_string(&s)), s);
    }

    #[test]
    fn shuffled_strings_are_anagrams(s in "[a-zA-Z]{0,24}", rot in 0usize..24) {
        let mut chars: Vec<char> = s.chars().collect();
        if !chars.is_empty() {
            let k = rot % chars.len();
            chars.rotate_left(k);
        }
        let rotated: String = chars.into_iter().collect();

        prop_assert!(are_anagrams(&s, &rotated));
        prop_assert!(are_anagrams_ignore_case(&s.to_uppercase(), &rotated.to_lowercase()));
    }

    #[test]
    fn anagrams_match_sorted_chars(a in "[abc]{0,8}", b in "[abc]{0,8}") {
        let mut sa: Vec<char> = a.chars().collect();
        let mut sb: Vec<char> = b.chars().collect();
        sa.sort_unstable();
        sb.sort_unstable();

        prop_assert_eq!(are_anagrams(&a, &b), sa == sb);
    }

    #[test]
    fn adjacent_duplicate_after_insert(
        set in prop::collection::btree_set(-1000i64..1000, 1..32),
        idx in any::<prop::sample::Index>()
    ) {
        let mut arr: Vec<i64> = set.into_iter().collect();

        prop_assert!(!has_adjacent_duplicate(&arr));
        prop_assert!(!has_duplicate(&arr));

        let i = idx.index(arr.len());
        let dup = arr[i];
        arr.insert(i, dup);

        prop_assert!(has_adjacent_duplicate(&arr));
        prop_assert!(has_duplicate(&arr));
        prop_assert_eq!(find_duplicate_values(&arr), vec![dup]);
    }

    #[test]
    fn duplicate_finders_agree(arr in prop::collection::vec(-20i32..20, 0..40)) {
        prop_assert_eq!(has_duplicate(&arr), !find_duplicate_values(&arr).is_empty());
    }

    #[test]
    fn two_sum_variants_agree_on_existence(
        arr in prop::collection::vec(-50i64..50, 0..30),
        target in -100i64..100
    ) {
        let brute = two_sum_brute_force(&arr, target);
        let single = two_sum_complement(&arr, target);

        prop_assert_eq!(brute.is_some(), single.is_some());

        for (i, j) in brute.into_iter().chain(single) {
            prop_assert!(i < j);
            prop_assert_eq!(arr[i] + arr[j], target);
        }
    }

    #[test]
    fn second_largest_is_below_max(arr in prop::collection::vec(any::<i32>(), 0..32)) {
        match second_largest(&arr) {
            Some(s) => {
                let max = *arr.iter().max().unwrap();
                prop_assert!(s < max);
                prop_assert!(arr.iter().all(|&v| v == max || v <= s));
            }
            None => prop_assert!(arr.windows(2).all(|w| w[0] == w[1])),
        }
    }

    #[test]
    fn palindrome_of_mirrored_text(s in "[a-z0-9]{0,16}") {
        let mirrored = format!("{s}, {}!", reverse_string(&s).to_uppercase());
        prop_assert!(is_palindrome(&mirrored));
    }
}
