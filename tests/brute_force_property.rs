use proptest::prelude::*;
use rect_cht::reference::{brute_force, quadratic_dp};
use rect_cht::{min_grouping_cost, GroupingOptimizer, Rectangle};

fn to_rects(pairs: &[(u16, u16)]) -> Vec<Rectangle<u16>> {
    pairs.iter().map(|&(w, h)| Rectangle::new(w, h)).collect()
}

proptest! {
    #[test]
    fn matches_exhaustive_search(
        pairs in prop::collection::vec((1u16..40, 1u16..40), 1usize..12)
    ) {
        let rects = to_rects(&pairs);
        let expected: i64 = brute_force(&rects).unwrap();
        let cost: i64 = min_grouping_cost(rects).unwrap();
        prop_assert_eq!(cost, expected);
    }

    #[test]
    fn matches_quadratic_dp_on_larger_inputs(
        pairs in prop::collection::vec((1u16..1000, 1u16..1000), 1usize..300)
    ) {
        let rects = to_rects(&pairs);
        let expected: i64 = quadratic_dp(&rects).unwrap();
        let cost: i64 = min_grouping_cost(rects).unwrap();
        prop_assert_eq!(cost, expected);
    }

    #[test]
    fn groups_tile_frontier_and_sum_to_cost(
        pairs in prop::collection::vec((1u16..500, 1u16..500), 1usize..120)
    ) {
        let optimizer = GroupingOptimizer::<u16, i64>::new(to_rects(&pairs)).unwrap();
        let (cost, groups) = optimizer.run().unwrap();
        let frontier = optimizer.frontier();

        prop_assert_eq!(groups.first().map(|g| g.start), Some(0));
        prop_assert_eq!(groups.last().map(|g| g.end), Some(frontier.len()));
        for pair in groups.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        for g in &groups {
            prop_assert!(!g.is_empty());
            prop_assert_eq!(g.width, frontier[g.end - 1].width);
            prop_assert_eq!(g.height, frontier[g.start].height);
            prop_assert_eq!(g.cost, i64::from(g.width) * i64::from(g.height));
        }
        prop_assert_eq!(groups.iter().map(|g| g.cost).sum::<i64>(), cost);
        prop_assert_eq!(optimizer.dominated() + frontier.len(), pairs.len());
    }

    #[test]
    fn accumulator_choice_does_not_change_the_answer(
        pairs in prop::collection::vec((1u8..=255, 1u8..=255), 1usize..60)
    ) {
        let rects: Vec<Rectangle<u8>> =
            pairs.iter().map(|&(w, h)| Rectangle::new(w, h)).collect();
        let narrow: i64 = min_grouping_cost(rects.clone()).unwrap();
        let wide: i128 = min_grouping_cost(rects).unwrap();
        prop_assert_eq!(i128::from(narrow), wide);
    }
}
