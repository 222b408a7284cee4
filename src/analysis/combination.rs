use crate::dice::Face;
use serde::Serialize;

/// Order-independent multiset of the faces shown in one roll.
///
/// Faces are kept sorted, so equality is multiset equality and
/// the derived ordering is lexicographic on the sorted faces.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Combination<F>(Vec<F>);

impl<F: Face> Combination<F> {
    pub fn faces(&self) -> &[F] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<F: Face> From<Vec<F>> for Combination<F> {
    fn from(mut faces: Vec<F>) -> Self {
        faces.sort();
        Self(faces)
    }
}
impl<F: Face> From<&[F]> for Combination<F> {
    fn from(faces: &[F]) -> Self {
        Self::from(faces.to_vec())
    }
}

impl<F: Face> std::fmt::Display for Combination<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({})",
            self.0
                .iter()
                .map(|face| face.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
