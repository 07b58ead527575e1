use proptest::prelude::*;
use rect_cht::{GroupingError, LowerEnvelope, QueryCursor};

fn brute_min(lines: &[(i64, i64)], x: i64) -> i64 {
    lines.iter().map(|&(k, b)| k * x + b).min().unwrap()
}

/// Interleave insertions and queries the way the optimizer does, checking
/// every answer and the cursor/size invariants along the way.
fn replay(ops: &[(i64, i64, i64)]) -> Result<(), TestCaseError> {
    let mut env = LowerEnvelope::new();
    let mut cursor = QueryCursor::new();
    let mut inserted = Vec::new();
    for &(slope, intercept, x) in ops {
        let len_before = env.len();
        env.add_line(slope, intercept).unwrap();
        inserted.push((slope, intercept));
        prop_assert!(env.len() <= env.inserted());
        prop_assert_eq!(env.inserted(), inserted.len());

        let cursor_before = cursor.index();
        let value = env.query_min(x, &mut cursor).unwrap();
        prop_assert_eq!(value, brute_min(&inserted, x));
        prop_assert!(cursor.index() < env.len());

        // The cursor only moves back when the insertion removed lines.
        if cursor.index() < cursor_before {
            prop_assert!(env.len() <= len_before);
            prop_assert_eq!(cursor.index(), env.len() - 1);
        }
    }
    Ok(())
}

fn monotone_ops(raw: Vec<(i64, i64, i64)>) -> Vec<(i64, i64, i64)> {
    // Strictly decreasing slopes, non-decreasing queries.
    let mut slope = 1_000i64;
    let mut x = 0i64;
    raw.into_iter()
        .map(|(ds, b, dx)| {
            slope -= ds;
            x += dx;
            (slope, b, x)
        })
        .collect()
}

proptest! {
    #[test]
    fn interleaved_queries_match_brute_force(
        raw in prop::collection::vec((1i64..20, -500i64..500, 0i64..10), 1usize..80)
    ) {
        replay(&monotone_ops(raw))?;
    }

    #[test]
    fn retained_lines_keep_decreasing_slopes(
        raw in prop::collection::vec((1i64..20, -500i64..500, 0i64..10), 1usize..80)
    ) {
        let mut env = LowerEnvelope::new();
        for (slope, intercept, _) in monotone_ops(raw) {
            env.add_line(slope, intercept).unwrap();
        }
        for pair in env.lines().windows(2) {
            prop_assert!(pair[0].slope > pair[1].slope);
            prop_assert!(pair[0].origin < pair[1].origin);
        }
    }
}

#[test]
fn cursor_resets_to_last_line_after_pops() {
    let mut env = LowerEnvelope::new();
    let mut cursor = QueryCursor::new();
    env.add_line(10i64, 0).unwrap();
    env.add_line(6, 1).unwrap();
    env.add_line(3, 3).unwrap();
    assert_eq!(env.query_min(1, &mut cursor), Ok(6));
    assert_eq!(cursor.index(), 2);

    env.add_line(1, 2).unwrap();
    assert_eq!(env.len(), 2);
    assert_eq!(env.query_min(1, &mut cursor), Ok(3));
    assert_eq!(cursor.index(), 1);

    // Further queries continue forward from the reset position.
    assert_eq!(env.query_min(5, &mut cursor), Ok(7));
    assert_eq!(cursor.index(), 1);
}

#[test]
fn cursor_at_last_index_is_not_reset_by_a_single_pop() {
    let mut env = LowerEnvelope::new();
    let mut cursor = QueryCursor::new();
    env.add_line(2i64, 0).unwrap();
    env.add_line(1, 10).unwrap();
    assert_eq!(env.query_min(20, &mut cursor), Ok(30));
    assert_eq!(cursor.index(), 1);

    // Removes (1, 10); the new line takes index 1 so the cursor stays valid.
    env.add_line(0, 5).unwrap();
    assert_eq!(env.len(), 2);
    assert_eq!(env.query(20, &mut cursor), Ok((5, 2)));
    assert_eq!(cursor.index(), 1);
}

#[test]
fn query_before_any_line_is_an_error() {
    let env = LowerEnvelope::<i128>::with_capacity(4);
    assert!(env.is_empty());
    let mut cursor = QueryCursor::new();
    assert_eq!(env.query(0, &mut cursor), Err(GroupingError::EmptyEnvelope));
}
