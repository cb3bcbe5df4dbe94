use crate::constants::PICK_COUNT;
use crate::state::Pick;

/// Maps a 32-byte VRF output to the winning pick.
///
/// The first 16 bytes are read as a little-endian u128 `r` and the pick is
/// `(r % 4) + 1`. 2^128 is a multiple of 4, so every pick covers exactly a
/// quarter of the input space.
pub fn pick_from_randomness(randomness: &[u8; 32]) -> Pick {
    let mut word = [0u8; 16];
    word.copy_from_slice(&randomness[..16]);
    let r = u128::from_le_bytes(word);
    Pick::ALL[(r % PICK_COUNT as u128) as usize]
}
