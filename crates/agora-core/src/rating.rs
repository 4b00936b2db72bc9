const STAR_TOTAL: usize = 5;

/// Render a rating as a fixed row of five stars.
///
/// The filled count is `floor(rating)`, never rounded: 4.9 still shows four
/// filled stars. Out-of-range input is clamped to [0, 5].
pub fn stars(rating: f32) -> String {
    let filled = rating.clamp(0.0, STAR_TOTAL as f32).floor() as usize;
    let mut out = String::with_capacity(STAR_TOTAL * '★'.len_utf8());
    for _ in 0..filled {
        out.push('★');
    }
    for _ in filled..STAR_TOTAL {
        out.push('☆');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_star_boundaries() {
        assert_eq!(stars(0.0), "☆☆☆☆☆");
        assert_eq!(stars(4.9), "★★★★☆");
        assert_eq!(stars(5.0), "★★★★★");
        assert_eq!(stars(4.5), "★★★★☆");
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(stars(-1.0), "☆☆☆☆☆");
        assert_eq!(stars(7.3), "★★★★★");
    }

    proptest! {
        #[test]
        fn prop_stars_always_total_five(rating in 0.0f32..=5.0) {
            let rendered = stars(rating);
            let filled = rendered.chars().filter(|&c| c == '★').count();
            let empty = rendered.chars().filter(|&c| c == '☆').count();
            prop_assert_eq!(filled, rating.floor() as usize);
            prop_assert_eq!(filled + empty, 5);
            prop_assert_eq!(rendered.chars().count(), 5);
        }
    }
}
