use rand::seq::SliceRandom;
use rand::Rng;

pub const GREETINGS: &[&str] = &[
    "Joyeux Noël !",
    "Bonnes fêtes !",
    "Merry Christmas!",
    "Happy holidays!",
    "Feliz Navidad!",
    "Frohe Weihnachten!",
    "Buon Natale!",
    "Season's greetings!",
];

/// Uniformly chosen entry of `GREETINGS`.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GREETINGS.choose(rng).copied().unwrap_or("Hello!")
}
