/// Faces printed on the sixteen standard cubes, one row per cube.
///
/// Cube `i` starts at cell `(i / 4, i % 4)` on a fresh board.
pub const CUBE_FACES: [[&str; 6]; 16] = [
    ["A", "A", "C", "I", "O", "T"],
    ["T", "Y", "A", "B", "I", "L"],
    ["J", "M", "O", "QU", "A", "B"],
    ["A", "C", "D", "E", "M", "P"],
    ["A", "C", "E", "L", "S", "R"],
    ["A", "D", "E", "N", "V", "Z"],
    ["A", "H", "M", "O", "R", "S"],
    ["B", "F", "I", "O", "R", "X"],
    ["D", "E", "N", "O", "S", "W"],
    ["D", "K", "N", "O", "T", "U"],
    ["E", "E", "F", "H", "I", "Y"],
    ["E", "G", "I", "N", "T", "V"],
    ["E", "G", "K", "L", "U", "Y"],
    ["E", "H", "I", "N", "P", "S"],
    ["E", "L", "P", "S", "T", "U"],
    ["G", "I", "L", "R", "U", "W"],
];

/// Owned face sets for the standard cubes, ready to build a grid from.
pub fn standard_face_sets() -> Vec<Vec<String>> {
    CUBE_FACES
        .iter()
        .map(|faces| faces.iter().map(|face| face.to_string()).collect())
        .collect()
}
