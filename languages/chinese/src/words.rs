use hanzi_types::ExampleWord;

/// Number of placeholder compounds produced for characters without curated words
pub const PLACEHOLDER_COUNT: usize = 3;

/// Example words for a character.
///
/// Curated for a handful of characters. Anything else gets synthetic compounds
/// built by gluing filler characters onto the queried one; those carry no real
/// meaning and are flagged `synthetic`.
pub fn example_words(character: &str) -> Vec<ExampleWord> {
    match curated(character) {
        Some(words) => words,
        None => placeholders(character),
    }
}

fn curated(character: &str) -> Option<Vec<ExampleWord>> {
    let words = match character {
        "学" => vec![
            ExampleWord::curated("学生", "xuéshēng", "Student"),
            ExampleWord::curated("学校", "xuéxiào", "Schule"),
            ExampleWord::curated("学习", "xuéxí", "lernen"),
        ],
        "好" => vec![
            ExampleWord::curated("你好", "nǐhǎo", "Hallo"),
            ExampleWord::curated("好的", "hǎode", "okay, gut"),
            ExampleWord::curated("很好", "hěnhǎo", "sehr gut"),
        ],
        _ => return None,
    };
    Some(words)
}

fn placeholders(character: &str) -> Vec<ExampleWord> {
    let compounds = [
        format!("{character}子"),
        format!("大{character}"),
        format!("{character}们"),
    ];

    compounds
        .into_iter()
        .enumerate()
        .map(|(i, word)| ExampleWord::placeholder(word, format!("Beispielwort {}", i + 1)))
        .collect()
}
