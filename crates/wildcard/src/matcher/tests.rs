use rstest::rstest;

use super::*;

fn index(m: impl Into<Matcher>, text: &str) -> Option<(usize, Vec<usize>)> {
    let m = m.into();
    let result = m.index(text).map(|Index { start, ends }| (start, ends));
    if let Some((start, ends)) = &result {
        assert!(ends.windows(2).all(|w| w[0] < w[1]), "{} on {:?}: unsorted {:?}", m, text, ends);
        assert!(ends.iter().all(|&end| end >= *start && end <= text.len()));
    }
    result
}

fn seps(s: &str) -> Separators {
    Separators::from(s)
}

fn no_seps() -> Separators {
    Separators::none()
}

#[rstest]
#[case(0, Some(3), "abc", Some((0, vec![0, 1, 2, 3])))]
#[case(0, Some(3), "abcdef", Some((0, vec![0, 1, 2, 3])))]
#[case(1, None, "abc", Some((0, vec![1, 2, 3])))]
#[case(3, None, "abcd", Some((0, vec![3, 4])))]
#[case(2, Some(2), "ab", Some((0, vec![2])))]
#[case(2, None, "a", None)]
#[case(0, None, "", Some((0, vec![0])))]
fn test_min_max_index(
    #[case] min: usize,
    #[case] max: Option<usize>,
    #[case] text: &str,
    #[case] expected: Option<(usize, Vec<usize>)>,
) {
    assert_eq!(index(MinMax::new(min, max, no_seps()), text), expected);
}

#[test]
fn test_min_max_index_skips_separators() {
    let m = MinMax::new(2, Some(3), seps("."));
    assert_eq!(index(m.clone(), "a.bcde"), Some((2, vec![4, 5])));
    assert_eq!(index(m.clone(), "a.b.c"), None);
    assert_eq!(index(m, "🦀🦀"), Some((0, vec![8])));
}

#[rstest]
#[case("", false)]
#[case("ab", true)]
#[case("abc", true)]
#[case("abcd", false)]
#[case("a", false)]
#[case("a.b", false)]
fn test_min_max_matches(#[case] text: &str, #[case] expected: bool) {
    let m = MinMax::new(2, Some(3), seps("."));
    assert_eq!(m.matches(text), expected);
}

#[rstest]
#[case("ab", "abc", Some((0, vec![2, 3])))]
#[case("ab", "fffabfff", Some((3, vec![5, 6, 7, 8])))]
#[case("ab", "fff", None)]
fn test_prefix_index(#[case] prefix: &str, #[case] text: &str, #[case] expected: Option<(usize, Vec<usize>)>) {
    assert_eq!(index(Prefix::new(prefix, no_seps()), text), expected);
}

#[test]
fn test_prefix_with_separators() {
    let m = Prefix::new("a.", seps("."));
    assert!(m.matches("a.b"));
    assert!(m.matches("a."));
    assert!(!m.matches("a.b.c"));
    assert!(!m.matches("b.a"));
    assert_eq!(index(m, "xa.bc.d"), Some((1, vec![3, 4, 5])));
}

#[rstest]
#[case("ab", "abc", Some((0, vec![2])))]
#[case("ab", "fffabfff", Some((0, vec![5])))]
#[case("aa", "aaa", Some((0, vec![2, 3])))]
#[case("ab", "fff", None)]
fn test_suffix_index(#[case] suffix: &str, #[case] text: &str, #[case] expected: Option<(usize, Vec<usize>)>) {
    assert_eq!(index(Suffix::new(suffix, no_seps()), text), expected);
}

#[test]
fn test_suffix_with_separators() {
    let m = Suffix::new(".c", seps("/"));
    assert!(m.matches("b.c"));
    assert!(m.matches(".c"));
    assert!(!m.matches("a/b.c"));
    assert_eq!(index(m.clone(), "a/b.c.c"), Some((2, vec![5, 7])));
    assert_eq!(index(m, "x.c/y.c"), Some((0, vec![3])));
}

#[test]
fn test_prefix_suffix() {
    let m = PrefixSuffix::new("ab", "ba", no_seps());
    assert!(m.matches("abba"));
    assert!(m.matches("abXba"));
    assert!(!m.matches("aba"));
    assert!(!m.matches("abab"));
    assert_eq!(index(m, "ababa"), Some((0, vec![5])));

    let m = PrefixSuffix::new("a", "b", seps("."));
    assert!(m.matches("ab"));
    assert!(!m.matches("a.b"));
    assert_eq!(index(m, "a.ab"), Some((2, vec![4])));
}

#[test]
fn test_contains() {
    let m = Contains::new("b");
    assert!(m.matches("abc"));
    assert!(!m.matches("ac"));
    assert_eq!(index(m.clone(), "abcb"), Some((0, vec![2, 3, 4])));
    assert_eq!(index(m, "ac"), None);
}

#[test]
fn test_literal() {
    let m = Literal::new("b");
    assert!(m.matches("b"));
    assert!(!m.matches("bb"));
    assert_eq!(m.fixed_len(), Some(1));
    assert_eq!(Literal::new("🦀b").fixed_len(), Some(2));
    assert_eq!(index(m.clone(), "abcb"), Some((1, vec![2])));
    assert_eq!(index(m, "ac"), None);
}

#[test]
fn test_nothing() {
    assert!(Nothing.matches(""));
    assert!(!Nothing.matches("a"));
    assert_eq!(index(Nothing, "abc"), Some((0, vec![0])));
}

#[test]
fn test_single() {
    let m = Single::new(seps("."));
    assert!(m.matches("a"));
    assert!(m.matches("é"));
    assert!(!m.matches("."));
    assert!(!m.matches("ab"));
    assert!(!m.matches(""));
    assert_eq!(index(m.clone(), ".é"), Some((1, vec![3])));
    assert_eq!(index(m, "..."), None);
}

#[test]
fn test_any() {
    let m = Any::new(seps("."));
    assert!(m.matches(""));
    assert!(m.matches("abc"));
    assert!(!m.matches("a.c"));
    assert_eq!(index(m.clone(), "ab.c"), Some((0, vec![0, 1, 2])));
    assert_eq!(index(m, ".c"), Some((0, vec![0])));
}

#[test]
fn test_super() {
    assert!(Super.matches(""));
    assert!(Super.matches("a.b/c"));
    assert_eq!(index(Super, "aé"), Some((0, vec![0, 1, 3])));
    assert_eq!(index(Super, ""), Some((0, vec![0])));
}

#[test]
fn test_classes() {
    let range = Range::new('a', 'c', false);
    assert!(range.matches("b"));
    assert!(!range.matches("d"));
    assert!(!range.matches("bb"));
    assert_eq!(index(range, "xyb"), Some((2, vec![3])));

    let range = Range::new('a', 'c', true);
    assert!(range.matches("d"));
    assert!(!range.matches("a"));
    assert_eq!(index(range, "abé"), Some((2, vec![4])));

    let list = List::new(['c', 'a'], false);
    assert!(list.matches("a"));
    assert!(!list.matches("b"));
    assert_eq!(index(list.clone(), "bbc"), Some((2, vec![3])));
    assert_eq!(index(list, "bbb"), None);

    let list = List::new(['a'], true);
    assert!(list.matches("b"));
    assert!(!list.matches("a"));
    assert!(!list.matches(""));
}

#[test]
fn test_any_of() {
    let m = AnyOf::new(vec![Literal::new("a").into(), Literal::new("ab").into(), Literal::new("z").into()]);
    assert!(m.matches("ab"));
    assert!(m.matches("z"));
    assert!(!m.matches("b"));
    assert_eq!(m.fixed_len(), None);
    assert_eq!(index(m, "xab"), Some((1, vec![2, 3])));

    let m = AnyOf::new(vec![Literal::new("ab").into(), Literal::new("cd").into()]);
    assert_eq!(m.fixed_len(), Some(2));
    assert_eq!(index(m.clone(), "xcdab"), Some((1, vec![3])));
    assert_eq!(index(m, "xyz"), None);
}

#[test]
fn test_every_of() {
    let m = EveryOf::new(vec![Range::new('a', 'z', false).into(), List::new(['b'], true).into()]);
    assert!(m.matches("c"));
    assert!(!m.matches("b"));
    assert!(!m.matches("C"));
    assert_eq!(m.fixed_len(), Some(1));
    assert_eq!(index(m.clone(), "bc"), Some((1, vec![2])));
    assert_eq!(index(m, "bB"), None);

    let m = EveryOf::new(vec![
        MinMax::new(2, Some(3), no_seps()).into(),
        MinMax::new(3, None, no_seps()).into(),
    ]);
    assert!(m.matches("abc"));
    assert!(!m.matches("ab"));
    assert!(!m.matches("abcd"));
    assert_eq!(index(m, "abcd"), Some((0, vec![3])));

    assert!(!EveryOf::new(vec![]).matches(""));
}

#[test]
fn test_btree_matches() {
    let m = BTree::new(Literal::new("x").into(), Some(Single::new(no_seps()).into()), None);
    assert_eq!(m.fixed_len(), Some(2));
    assert!(m.matches("ax"));
    assert!(m.matches("éx"));
    assert!(!m.matches("x"));
    assert!(!m.matches("abx"));
    assert!(!m.matches("axx"));

    let m = BTree::new(
        Literal::new("cat").into(),
        Some(Super.into()),
        Some(Any::new(seps(".")).into()),
    );
    assert_eq!(m.fixed_len(), None);
    assert!(m.matches("cat"));
    assert!(m.matches("a.cat.catb"));
    assert!(!m.matches("cat.x"));
}

#[test]
fn test_btree_index() {
    let m = BTree::new(Literal::new("b").into(), Some(Single::new(no_seps()).into()), None);
    assert_eq!(index(m, "xxab"), Some((2, vec![4])));

    let m = BTree::new(Literal::new("b").into(), None, Some(Any::new(seps(".")).into()));
    assert_eq!(index(m.clone(), "abc.d"), Some((1, vec![2, 3])));
    assert_eq!(index(m, "ac"), None);
}

#[test]
fn test_display() {
    let seps = seps("./");
    let cases: Vec<(Matcher, &str)> = vec![
        (Nothing.into(), "<nothing>"),
        (Literal::new("abc").into(), "<text:abc>"),
        (Single::new(no_seps()).into(), "<single>"),
        (Single::new(seps.clone()).into(), "<single:![./]>"),
        (Any::new(seps.clone()).into(), "<any:![./]>"),
        (Super.into(), "<super>"),
        (MinMax::new(1, None, no_seps()).into(), "<min_max:1..>"),
        (MinMax::new(2, Some(3), seps.clone()).into(), "<min_max:2..=3:![./]>"),
        (Range::new('a', 'z', false).into(), "<range:[a,z]>"),
        (Range::new('a', 'z', true).into(), "<range:![a,z]>"),
        (List::new(['b', 'a'], false).into(), "<list:[ab]>"),
        (List::new(['a'], true).into(), "<list:![a]>"),
        (Prefix::new("ab", no_seps()).into(), "<prefix:ab>"),
        (Suffix::new("ab", seps.clone()).into(), "<suffix:ab:![./]>"),
        (PrefixSuffix::new("a", "b", no_seps()).into(), "<prefix_suffix:a,b>"),
        (Contains::new("ab").into(), "<contains:ab>"),
        (
            AnyOf::new(vec![Literal::new("a").into(), Super.into()]).into(),
            "<any_of:[<text:a>,<super>]>",
        ),
        (
            EveryOf::new(vec![Literal::new("a").into(), Single::new(no_seps()).into()]).into(),
            "<every_of:[<text:a>,<single>]>",
        ),
        (
            BTree::new(Literal::new("a").into(), None, Some(Super.into())).into(),
            "<btree:[<nil><-<text:a>-><super>]>",
        ),
    ];

    for (m, expected) in cases {
        assert_eq!(m.to_string(), expected);
    }
}
