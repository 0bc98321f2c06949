use std::fmt;

use rand::Rng;

/// Handle identifying one physical cube.
///
/// Two cubes showing the same letter are still different cubes, so
/// selection and placement always compare handles, never faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeId(pub usize);

impl fmt::Display for CubeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Cube {
    id: CubeId,
    faces: Vec<String>,
    current: usize,
}

impl Cube {
    /// Create a cube showing its first face. Faces are stored uppercase.
    ///
    /// Panics if `faces` is empty; a cube without faces cannot show anything.
    pub fn new(id: CubeId, faces: Vec<String>) -> Self {
        assert!(!faces.is_empty(), "cube {} needs at least one face", id);
        let faces = faces.into_iter().map(|face| face.to_uppercase()).collect();
        Self {
            id,
            faces,
            current: 0,
        }
    }

    pub fn id(&self) -> CubeId {
        self.id
    }

    #[cfg(test)]
    pub fn faces(&self) -> &[String] {
        &self.faces
    }

    pub fn visible_face(&self) -> &str {
        &self.faces[self.current]
    }

    /// Roll the cube: pick any face uniformly, possibly the same one again.
    pub fn randomize_face(&mut self, rng: &mut impl Rng) {
        self.current = rng.random_range(0..self.faces.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn faces(letters: &[&str]) -> Vec<String> {
        letters.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_cube_shows_first_face() {
        let cube = Cube::new(CubeId(3), faces(&["q", "A", "B"]));
        assert_eq!(cube.visible_face(), "Q");
        assert_eq!(cube.id(), CubeId(3));
    }

    #[test]
    fn test_randomize_stays_within_faces() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut cube = Cube::new(CubeId(0), faces(&["A", "B", "QU", "D", "E", "F"]));

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            cube.randomize_face(&mut rng);
            assert!(cube.faces().iter().any(|f| f == cube.visible_face()));
            seen.insert(cube.visible_face().to_string());
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    #[should_panic]
    fn test_cube_without_faces_panics() {
        Cube::new(CubeId(0), Vec::new());
    }
}
