//! Word provider - random Russian word for the drawing prompt
//!
//! The lexicon is embedded: nouns only, loosely themed around things one
//! might actually draw.

use rand::seq::SliceRandom;

/// Embedded Russian lexicon
const WORDS: &[&str] = &[
    "акварель", "альбом", "арка", "бабочка", "башня", "берег", "блокнот",
    "букет", "буря", "ваза", "велосипед", "весна", "ветер", "вечер",
    "вишня", "вода", "волна", "ворона", "гавань", "гитара", "глубина",
    "гнездо", "город", "гора", "горизонт", "дверь", "дерево", "дождь",
    "дом", "дорога", "дракон", "желудь", "жираф", "журавль", "замок",
    "заря", "звезда", "зеркало", "зима", "змея", "зонт", "иней",
    "камень", "капля", "карандаш", "карта", "кашалот", "кит", "ключ",
    "книга", "колесо", "колодец", "корабль", "корень", "кошка", "крыло",
    "крыша", "кувшин", "лампа", "ландыш", "лес", "лестница", "лето",
    "линия", "лиса", "лист", "лодка", "луна", "маяк", "медведь",
    "мельница", "метель", "мост", "море", "мороз", "мотылёк", "небо",
    "облако", "огонь", "озеро", "окно", "орёл", "осень", "остров",
    "пейзаж", "перо", "песок", "письмо", "поезд", "поле", "поляна",
    "портрет", "причал", "птица", "пустыня", "радуга", "река", "роса",
    "рояль", "рыба", "сад", "свеча", "север", "снег", "сова",
    "солнце", "сосна", "стена", "стрекоза", "сумерки", "телескоп", "тень",
    "трава", "тропа", "туман", "улица", "утро", "фонарь", "холм",
    "холст", "цветок", "чайка", "часы", "черепаха", "шляпа", "этюд",
    "яблоко", "якорь", "ящерица",
];

/// Draw one random word from the lexicon
pub fn random_word() -> &'static str {
    let mut rng = rand::thread_rng();
    WORDS
        .choose(&mut rng)
        .copied()
        .unwrap_or(WORDS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_is_nonempty_cyrillic() {
        let word = random_word();

        assert!(!word.is_empty());
        assert!(word
            .chars()
            .any(|c| ('\u{0400}'..='\u{04FF}').contains(&c)));
    }

    #[test]
    fn test_words_vary_across_draws() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            seen.insert(random_word());
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_lexicon_has_no_blank_entries() {
        assert!(WORDS.iter().all(|w| !w.trim().is_empty()));
    }
}
