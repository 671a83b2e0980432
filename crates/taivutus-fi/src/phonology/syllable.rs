// Syllable segmentation over Finnish graphemes

use taivutus_core::character::is_vowel;

/// Return the offsets at which each syllable of `word` begins.
///
/// Offset 0 is always present. After every vowel run, a single consonant
/// followed by a vowel starts the next syllable, and in a longer consonant
/// run only the last consonant before the next vowel does ("kis-sa").
/// A word ending in a consonant cluster gets no extra boundary.
pub fn syllables(word: &[char]) -> Vec<usize> {
    let mut indices = vec![0];
    let len = word.len();
    let mut i = 0;

    while i < len {
        while i < len && !is_vowel(word[i]) {
            i += 1;
        }
        while i < len && is_vowel(word[i]) {
            i += 1;
        }
        if i + 1 < len && is_vowel(word[i + 1]) {
            indices.push(i);
        } else if i + 2 < len && !is_vowel(word[i + 1]) {
            indices.push(i + 1);
        }
    }

    indices
}

/// Number of syllables in `word`.
pub fn syllable_count(word: &[char]) -> usize {
    syllables(word).len()
}
