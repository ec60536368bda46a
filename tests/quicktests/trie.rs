use std::collections::HashSet;

use dsa_tour::trie::Trie;

use quickcheck_macros::quickcheck;

#[test]
fn scenario_go_golang() {
    let mut trie = Trie::new();
    trie.insert("go");
    trie.insert("golang");

    assert!(trie.search("go"));
    assert!(trie.search("golang"));
    assert!(!trie.search("java"));
    assert!(!trie.search("gol"));
}

#[quickcheck]
fn round_trip(words: Vec<String>) -> bool {
    let mut trie = Trie::new();
    words.iter().all(|w| {
        trie.insert(w);
        trie.search(w)
    })
}

#[quickcheck]
fn only_inserted_words_are_members(words: Vec<String>, others: Vec<String>) -> bool {
    let trie: Trie = words.iter().map(String::as_str).collect();
    let inserted: HashSet<_> = words.iter().collect();

    others
        .iter()
        .all(|w| trie.search(w) == inserted.contains(w))
}

#[quickcheck]
fn every_prefix_is_a_prefix(words: Vec<String>) -> bool {
    let trie: Trie = words.iter().map(String::as_str).collect();

    words.iter().all(|w| {
        w.char_indices()
            .all(|(i, _)| trie.starts_with(&w[..i]))
    })
}

#[quickcheck]
fn inserting_twice_changes_nothing(words: Vec<String>) -> bool {
    let mut trie: Trie = words.iter().map(String::as_str).collect();
    let nodes = trie.node_count();
    let len = trie.len();
    trie.extend(words.iter().map(String::as_str));

    trie.node_count() == nodes && trie.len() == len && words.iter().all(|w| trie.search(w))
}
