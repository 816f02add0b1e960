use crate::card::Card;

/// Deck shown on first launch, before anything has been saved.
pub fn sample_cards() -> Vec<Card> {
    vec![
        Card::new("1", "你好", "Hello (Nǐ hǎo)", "Chinese").with_color("#dbeafe"),
        Card::new("2", "ありがとう", "Thank you (Arigatou)", "Japanese").with_color("#fce7f3"),
        Card::new("3", "Apple", "苹果 (píngguǒ)", "English").with_color("#dcfce7"),
        Card::new("4", "Swipe left", "Go to the next card", "Tutorial"),
        Card::new("5", "Swipe right", "Go back to the previous card", "Tutorial"),
        Card::new("6", "Swipe up", "Delete the current card", "Tutorial"),
        Card::new("7", "Swipe down", "Show the back of the card", "Tutorial"),
        Card::new("8", "Long-press a card", "Open it for editing", "Tutorial").with_color("#f3f4f6"),
    ]
}
