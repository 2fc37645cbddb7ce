/// Cards dealt to each side; also the number of rounds in a game.
pub const HAND_SIZE: usize = 5;
