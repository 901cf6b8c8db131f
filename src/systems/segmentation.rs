use indexmap::IndexMap;
use ndarray::Array2;

use crate::blob::Blob;

/// Disjoint-set over the pressed pixels; only the final partition matters
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_a] = root_b;
        }
    }
}

/// The restricted neighbor rule: south, east, and exactly one diagonal
/// (southwest unless the cell sits at the start of its row, in which case
/// southeast). Deliberately NOT generic 8-connectivity: a southeast
/// diagonal away from the row start never connects.
fn restricted_neighbors(r: usize, c: usize, rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let mut neighbors = Vec::with_capacity(3);
    if r < rows - 1 {
        if c > 0 {
            neighbors.push((r + 1, c - 1));
        } else if c < cols - 1 {
            neighbors.push((r + 1, c + 1));
        }
        neighbors.push((r + 1, c));
    }
    if c < cols - 1 {
        neighbors.push((r, c + 1));
    }
    neighbors
}

/// Label the connected pressed regions of a contact mask into blobs.
/// Each blob's position is the median-by-column pixel of its region
/// (index len/2 after a stable sort by column), and its size the pixel
/// count.
pub fn segment(mask: &Array2<bool>) -> Vec<Blob> {
    let (rows, cols) = mask.dim();

    // pressed pixels in row-major order; the map keeps that order so the
    // emitted blob list is deterministic
    let mut pressed: IndexMap<(usize, usize), usize> = IndexMap::new();
    for ((r, c), &set) in mask.indexed_iter() {
        if set {
            let next = pressed.len();
            pressed.insert((r, c), next);
        }
    }

    let mut sets = DisjointSet::new(pressed.len());
    for (&(r, c), &i) in pressed.iter() {
        for neighbor in restricted_neighbors(r, c, rows, cols) {
            if let Some(&j) = pressed.get(&neighbor) {
                sets.union(i, j);
            }
        }
    }

    let mut segments: IndexMap<usize, Vec<(usize, usize)>> = IndexMap::new();
    for (&(r, c), &i) in pressed.iter() {
        segments.entry(sets.find(i)).or_default().push((r, c));
    }

    segments.into_values().map(blob_from_pixels).collect()
}

fn blob_from_pixels(mut pixels: Vec<(usize, usize)>) -> Blob {
    pixels.sort_by_key(|&(_, c)| c);
    let (r, c) = pixels[pixels.len() / 2];
    Blob::new((r as f32, c as f32), pixels.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from(rows: usize, cols: usize, pixels: &[(usize, usize)]) -> Array2<bool> {
        let mut mask = Array2::from_elem((rows, cols), false);
        for &(r, c) in pixels {
            mask[[r, c]] = true;
        }
        mask
    }

    #[test]
    fn test_empty_mask_yields_no_blobs() {
        assert!(segment(&mask_from(4, 4, &[])).is_empty());
    }

    #[test]
    fn test_square_block_is_one_blob() {
        let blobs = segment(&mask_from(4, 4, &[(0, 0), (0, 1), (1, 0), (1, 1)]));
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].size, 4);
        // stable column sort: (0,0) (1,0) (0,1) (1,1); index 2
        assert_eq!(blobs[0].position, (0., 1.));
    }

    #[test]
    fn test_position_is_median_by_column() {
        let blobs = segment(&mask_from(1, 8, &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]));
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].position, (0., 3.));
    }

    #[test]
    fn test_southeast_diagonal_away_from_row_start_does_not_merge() {
        // (0,1)-(1,2) is a diagonal the restricted rule never examines
        let blobs = segment(&mask_from(3, 4, &[(0, 1), (1, 2)]));
        assert_eq!(blobs.len(), 2);
        assert!(blobs.iter().all(|b| b.size == 1));
    }

    #[test]
    fn test_southeast_diagonal_at_row_start_merges() {
        let blobs = segment(&mask_from(3, 4, &[(0, 0), (1, 1)]));
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].size, 2);
    }

    #[test]
    fn test_southwest_diagonal_merges() {
        let blobs = segment(&mask_from(3, 4, &[(0, 2), (1, 1)]));
        assert_eq!(blobs.len(), 1);
    }

    #[test]
    fn test_straight_neighbors_merge() {
        let vertical = segment(&mask_from(3, 3, &[(0, 1), (1, 1)]));
        assert_eq!(vertical.len(), 1);
        let horizontal = segment(&mask_from(3, 3, &[(1, 0), (1, 1)]));
        assert_eq!(horizontal.len(), 1);
    }

    #[test]
    fn test_separate_regions_stay_separate() {
        let blobs = segment(&mask_from(5, 8, &[(0, 0), (0, 1), (4, 6), (4, 7), (2, 4)]));
        assert_eq!(blobs.len(), 3);
        let mut sizes: Vec<usize> = blobs.iter().map(|b| b.size).collect();
        sizes.sort();
        assert_eq!(sizes, vec![1, 2, 2]);
    }

    #[test]
    fn test_l_shape_merges_through_chain() {
        let blobs = segment(&mask_from(4, 4, &[(0, 2), (1, 2), (2, 2), (2, 1), (2, 0)]));
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].size, 5);
    }
}
