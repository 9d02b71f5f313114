//! Macro ring: caloric share of protein, carbs and fat.

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Macro {
    Protein,
    Carbs,
    Fat,
}

impl Macro {
    pub fn label(&self) -> &'static str {
        match self {
            Macro::Protein => "Protein",
            Macro::Carbs => "Carbs",
            Macro::Fat => "Fat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSegment {
    pub kind: Macro,
    pub kcal: f64,
    /// Share of the ring in `0.0..=1.0`. Zero for every segment of an empty ring.
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MacroRing {
    pub segments: [RingSegment; 3],
    pub total_kcal: f64,
}

impl MacroRing {
    pub fn from_grams(protein: f64, carbs: f64, fat: f64) -> Self {
        let kcal = [
            (Macro::Protein, protein * PROTEIN_KCAL_PER_GRAM),
            (Macro::Carbs, carbs * CARBS_KCAL_PER_GRAM),
            (Macro::Fat, fat * FAT_KCAL_PER_GRAM),
        ];
        let total_kcal: f64 = kcal.iter().map(|(_, k)| k).sum();

        let segments = kcal.map(|(kind, kcal)| RingSegment {
            kind,
            kcal,
            fraction: if total_kcal > 0.0 { kcal / total_kcal } else { 0.0 },
        });

        Self { segments, total_kcal }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.fraction == 0.0)
    }

    /// Splits `width` cells between the segments by largest remainder.
    ///
    /// The counts add up to `width` unless the ring is empty, in which case
    /// every count is zero.
    pub fn cells(&self, width: usize) -> [usize; 3] {
        if self.is_empty() || width == 0 {
            return [0; 3];
        }

        let kcal = self.segments.map(|s| s.kcal.max(0.0));
        let norm: f64 = kcal.iter().sum();
        if norm <= 0.0 {
            return [0; 3];
        }
        let exact = kcal.map(|k| k * width as f64 / norm);
        let mut counts = exact.map(|e| e.floor() as usize);

        let mut leftover = width.saturating_sub(counts.iter().sum());
        let mut order = [0usize, 1, 2];
        order.sort_by(|&a, &b| {
            let ra = exact[a] - exact[a].floor();
            let rb = exact[b] - exact[b].floor();
            rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal)
        });
        for idx in order.iter().cycle() {
            if leftover == 0 {
                break;
            }
            counts[*idx] += 1;
            leftover -= 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caloric_contribution_uses_fixed_factors() {
        let ring = MacroRing::from_grams(10.0, 20.0, 5.0);
        let kcal: Vec<f64> = ring.segments.iter().map(|s| s.kcal).collect();
        assert_eq!(kcal, vec![40.0, 80.0, 45.0]);
        assert_eq!(ring.total_kcal, 165.0);

        let fractions: f64 = ring.segments.iter().map(|s| s.fraction).sum();
        assert!((fractions - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_macros_render_empty_ring() {
        let ring = MacroRing::from_grams(0.0, 0.0, 0.0);
        assert_eq!(ring.total_kcal, 0.0);
        assert!(ring.is_empty());
        assert!(ring.segments.iter().all(|s| s.fraction == 0.0 && !s.fraction.is_nan()));
        assert_eq!(ring.cells(30), [0, 0, 0]);
    }

    #[test]
    fn test_cells_fill_the_requested_width() {
        let ring = MacroRing::from_grams(10.0, 20.0, 5.0);
        let cells = ring.cells(33);
        assert_eq!(cells.iter().sum::<usize>(), 33);
        assert_eq!(cells, [8, 16, 9]);

        let only_fat = MacroRing::from_grams(0.0, 0.0, 12.0);
        assert_eq!(only_fat.cells(10), [0, 0, 10]);
    }
}
