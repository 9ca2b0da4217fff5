//! Basic usage: a word-completion set over character sequences.

use seqtrie::Trie;

fn main() {
    let mut words: Trie<char> = Trie::new();

    for word in &["hello", "help", "helmet", "world", "wore"] {
        words.insert(word.chars());
    }

    println!("stored {} words", words.len());

    let prefix: Vec<char> = "hel".chars().collect();
    println!("completions of \"hel\":");
    for suffix in words.completions(&prefix) {
        let rest: String = suffix.into_iter().collect();
        println!("  hel{}", rest);
    }

    // Tries are values: the clone is unaffected by later edits.
    let snapshot = words.clone();
    words.remove(&"world".chars().collect::<Vec<char>>());

    println!(
        "after removal: {} words (snapshot still has {})",
        words.len(),
        snapshot.len()
    );

    // Set algebra over whole sets of words.
    let greetings: Trie<char> = vec!["hello".chars(), "hey".chars()]
        .into_iter()
        .collect();
    let known_greetings = words.intersection(&greetings);
    println!("known greetings: {}", known_greetings.len());
}
