/// Image shown on every face-down card.
pub const CARD_BACK_IMAGE: &str = "images/cardBack.png";

/// Symbol shared by the two cards of a pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardType {
    Lemon,
    Banana,
    Watermelon,
    Kiwi,
    Orange,
    RedApple,
    GreenApple,
    YellowFruit,
    Cherry,
    Strawberry,
}

impl CardType {
    /// Fill order used when a board is initialized.
    pub const ALL: [CardType; 10] = [
        Self::Lemon,
        Self::Banana,
        Self::Watermelon,
        Self::Kiwi,
        Self::Orange,
        Self::RedApple,
        Self::GreenApple,
        Self::YellowFruit,
        Self::Cherry,
        Self::Strawberry,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn name(self) -> &'static str {
        use CardType::*;
        match self {
            Lemon => "lemon",
            Banana => "banana",
            Watermelon => "watermelon",
            Kiwi => "kiwi",
            Orange => "orange",
            RedApple => "red_apple",
            GreenApple => "green_apple",
            YellowFruit => "yellow_fruit",
            Cherry => "cherry",
            Strawberry => "strawberry",
        }
    }

    pub const fn image_path(self) -> &'static str {
        use CardType::*;
        match self {
            Lemon => "images/lemon.png",
            Banana => "images/banana.png",
            Watermelon => "images/watermelon.png",
            Kiwi => "images/kiwi.png",
            Orange => "images/orange.png",
            RedApple => "images/red_apple.png",
            GreenApple => "images/green_apple.png",
            YellowFruit => "images/yellow_fruit.png",
            Cherry => "images/cherry.png",
            Strawberry => "images/strawberry.png",
        }
    }

    /// Position of this type within [`CardType::ALL`].
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}
