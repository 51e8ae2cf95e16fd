use crate::config::Detail;

/// Maps a full RGB triple to one color cell.
///
/// Each channel is divided into `level` buckets and the three bucket indices
/// are combined as a mixed-radix number: `r + g * level + b * level²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorQuantizer {
    level: u32,
    division: u32,
    max_cell: u32,
}

impl ColorQuantizer {
    pub fn new(detail: Detail) -> Self {
        Self {
            level: detail.colors_per_channel(),
            division: detail.channel_division(),
            max_cell: detail.colors_per_pixel() - 1,
        }
    }

    pub fn quantize(&self, red: u8, green: u8, blue: u8) -> u8 {
        let r = red as u32 / self.division;
        let g = green as u32 / self.division;
        let b = blue as u32 / self.division;
        let cell = r + g * self.level + b * self.level * self.level;
        // When 256 isn't a multiple of the level, 255 lands in bucket `level`
        // and the sum can pass the last cell.
        cell.min(self.max_cell) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_clamps_to_last_cell() {
        let q = ColorQuantizer::new(Detail::Three);
        assert_eq!(q.quantize(255, 255, 255), 26);
    }

    #[test]
    fn test_white_clamps_for_uneven_levels() {
        // 5: 255 / 51 = 5, 5 + 25 + 125 = 155
        assert_eq!(ColorQuantizer::new(Detail::Five).quantize(255, 255, 255), 124);
        // 6: 255 / 42 = 6, 6 + 36 + 216 = 258
        assert_eq!(ColorQuantizer::new(Detail::Six).quantize(255, 255, 255), 215);
    }

    #[test]
    fn test_black_is_cell_zero() {
        for detail in Detail::ALL {
            assert_eq!(ColorQuantizer::new(detail).quantize(0, 0, 0), 0);
        }
    }

    #[test]
    fn test_mixed_radix_cells() {
        let q = ColorQuantizer::new(Detail::Three);
        // 100 / 85 = 1 per channel
        assert_eq!(q.quantize(100, 0, 0), 1);
        assert_eq!(q.quantize(0, 100, 0), 3);
        assert_eq!(q.quantize(0, 0, 100), 9);
        assert_eq!(q.quantize(100, 100, 100), 13);
        // red 255 overflows into bucket 3 without tripping the clamp
        assert_eq!(q.quantize(255, 0, 0), 3);
        // blue 255 gives 27 and is clamped
        assert_eq!(q.quantize(0, 0, 255), 26);
    }

    #[test]
    fn test_exact_division_never_clamps() {
        let q = ColorQuantizer::new(Detail::Four);
        assert_eq!(q.quantize(255, 255, 255), 63);
        assert_eq!(q.quantize(63, 64, 0), 4);
    }

    #[test]
    fn test_cells_stay_in_range() {
        for detail in Detail::ALL {
            let q = ColorQuantizer::new(detail);
            let max = detail.colors_per_pixel();
            for v in [0u8, 1, 50, 84, 85, 127, 128, 170, 200, 254, 255] {
                for (r, g, b) in [(v, v, v), (v, 0, 255), (255, v, 0), (0, 255, v)] {
                    assert!((q.quantize(r, g, b) as u32) < max);
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let q = ColorQuantizer::new(Detail::Five);
        assert_eq!(q.quantize(12, 200, 99), q.quantize(12, 200, 99));
        assert_eq!(
            q.quantize(12, 200, 99),
            ColorQuantizer::new(Detail::Five).quantize(12, 200, 99)
        );
    }
}
