/// Map an object's condition letter to its percentage rating.
///
/// Unrecognized letters decode as 100 (perfect), not an error.
pub fn condition_rating(letter: char) -> i64 {
    match letter {
        'P' => 100,
        'G' => 90,
        'A' => 75,
        'W' => 50,
        'D' => 25,
        'B' => 10,
        'R' => 0,
        _ => 100,
    }
}
