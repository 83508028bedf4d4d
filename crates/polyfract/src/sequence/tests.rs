use super::*;
use crate::geom2::perimeter;
use crate::rand2::regular_polygon;
use crate::rules::{subdivide_fractal, subdivide_koch};
use nalgebra::vector;
use proptest::prelude::*;

fn triangle() -> Vec<Point2> {
    vec![
        vector![0.0, 1.0],
        vector![-0.866, -0.5],
        vector![0.866, -0.5],
    ]
}

fn square() -> Vec<Point2> {
    vec![
        vector![-1.0, -1.0],
        vector![1.0, -1.0],
        vector![1.0, 1.0],
        vector![-1.0, 1.0],
    ]
}

#[test]
fn koch_triangle_one_generation_has_fifteen_points() {
    let tri = triangle();
    let out = iterate(&tri, Rule::Koch, 3).unwrap();
    assert_eq!(out.len(), 15);
    for i in 0..3 {
        let edge = subdivide_koch(tri[i], tri[(i + 1) % 3], 3).unwrap();
        assert_eq!(&out[5 * i..5 * i + 5], edge.as_slice());
    }
}

#[test]
fn fractal_square_one_generation_keeps_or_merges_seams() {
    let sq = square();
    let kept = iterate(&sq, Rule::Fractal, sq.len()).unwrap();
    assert_eq!(kept.len(), 36);
    // Wrap-around edge closes the polygon back to vertex 0.
    assert_eq!(&kept[27..], subdivide_fractal(sq[3], sq[0]).as_slice());

    let cfg = SequenceCfg {
        seams: Seams::Merge,
        ..SequenceCfg::default()
    };
    let merged = iterate_with(&sq, Rule::Fractal, sq.len(), &cfg).unwrap();
    assert_eq!(merged.len(), 32);
    let expected: Vec<Point2> = kept
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 9 != 0)
        .map(|(_, p)| *p)
        .collect();
    assert_eq!(merged, expected);
    // No shared vertex left twice in a row, wrap-around included.
    for i in 0..merged.len() {
        assert_ne!(merged[i], merged[(i + 1) % merged.len()]);
    }
    // Kept seams: each edge path starts where the previous one ended.
    for e in 1..4 {
        assert_eq!(kept[9 * e], kept[9 * e - 1]);
    }
}

#[test]
fn growth_factors_match_output_len() {
    let pent = regular_polygon(5, 1.0, 0.0).unwrap();
    let g1 = iterate(&pent, Rule::Koch, 5).unwrap();
    assert_eq!(g1.len(), 5 * 7);
    // Side count stays at the original polygon's count.
    let g2 = iterate(&g1, Rule::Koch, 5).unwrap();
    assert_eq!(g2.len(), 5 * 7 * 7);
    assert_eq!(output_len(35, Rule::Koch, 5, Seams::Keep), 245);
    assert_eq!(output_len(35, Rule::Koch, 5, Seams::Merge), 210);
    assert_eq!(output_len(4, Rule::Fractal, 4, Seams::Keep), 36);
    assert_eq!(output_len(4, Rule::Fractal, 4, Seams::Merge), 32);
}

#[test]
fn invalid_inputs_fail_fast() {
    let two = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
    assert_eq!(
        iterate(&two, Rule::Fractal, 3),
        Err(SubdivisionError::InvalidPolygon { len: 2 })
    );
    assert_eq!(
        iterate(&[], Rule::Koch, 3),
        Err(SubdivisionError::InvalidPolygon { len: 0 })
    );
    assert_eq!(
        iterate(&square(), Rule::Koch, 2),
        Err(SubdivisionError::InvalidSideCount { side_count: 2 })
    );
    // Fractal ignores the side count entirely.
    assert_eq!(iterate(&square(), Rule::Fractal, 0).unwrap().len(), 36);
}

#[test]
fn two_generations_compose() {
    let tri = triangle();
    let cfg = SequenceCfg::default();
    let once = iterate(&tri, Rule::Koch, 3).unwrap();
    let twice = iterate(&once, Rule::Koch, 3).unwrap();
    assert_eq!(iterate_n(&tri, Rule::Koch, 3, &cfg, 2).unwrap(), twice);
    // Second generation is the concatenation of every first-generation edge.
    let mut by_edge = Vec::new();
    for i in 0..once.len() {
        by_edge.extend(subdivide_koch(once[i], once[(i + 1) % once.len()], 3).unwrap());
    }
    assert_eq!(by_edge, twice);
    assert_eq!(iterate_n(&tri, Rule::Koch, 3, &cfg, 0).unwrap(), tri);
}

#[test]
fn perimeter_growth_per_rule() {
    let tri = regular_polygon(3, 1.0, 0.3).unwrap();
    let p0 = perimeter(&tri);
    let koch = iterate(&tri, Rule::Koch, 3).unwrap();
    assert!((perimeter(&koch) - p0 * 4.0 / 3.0).abs() < 1e-9);
    let fractal = iterate(&tri, Rule::Fractal, 3).unwrap();
    assert!((perimeter(&fractal) - p0 * 2.0).abs() < 1e-9);
    // Kept seams add zero-length edges only.
    let cfg = SequenceCfg {
        seams: Seams::Merge,
        ..SequenceCfg::default()
    };
    let merged = iterate_with(&tri, Rule::Fractal, 3, &cfg).unwrap();
    assert!((perimeter(&merged) - perimeter(&fractal)).abs() < 1e-9);
}

#[test]
fn vertex_budget_is_checked_before_work() {
    let cfg = SequenceCfg {
        max_vertices: Some(100),
        ..SequenceCfg::default()
    };
    assert_eq!(iterate_with(&square(), Rule::Fractal, 4, &cfg).unwrap().len(), 36);
    assert_eq!(
        iterate_n(&square(), Rule::Fractal, 4, &cfg, 2),
        Err(SubdivisionError::VertexBudgetExceeded {
            predicted: 324,
            limit: 100
        })
    );
}

#[test]
fn huge_side_counts_are_refused_without_a_budget() {
    let tri = triangle();
    assert_eq!(
        iterate(&tri, Rule::Koch, usize::MAX),
        Err(SubdivisionError::VertexBudgetExceeded {
            predicted: usize::MAX,
            limit: MAX_SEQUENCE_LEN
        })
    );
    // A configured budget above the ceiling is clamped to it.
    let cfg = SequenceCfg {
        max_vertices: Some(usize::MAX),
        ..SequenceCfg::default()
    };
    assert!(matches!(
        iterate_n(&tri, Rule::Koch, MAX_SEQUENCE_LEN / 2, &cfg, 1),
        Err(SubdivisionError::VertexBudgetExceeded { limit: MAX_SEQUENCE_LEN, .. })
    ));
    assert_eq!(Seams::Keep.name(), "keep");
    assert_eq!(Seams::Merge.name(), "merge");
}

#[test]
fn generator_holds_side_count_and_rolls_back_on_error() {
    let mut gen = CurveGenerator::new(square(), Rule::Fractal)
        .unwrap()
        .with_cfg(SequenceCfg {
            max_vertices: Some(DEFAULT_VERTEX_BUDGET),
            ..SequenceCfg::default()
        });
    assert_eq!(gen.side_count(), 4);
    assert_eq!(gen.step().unwrap().len(), 36);
    gen.set_rule(Rule::Koch);
    assert_eq!(gen.run(2).unwrap().len(), 36 * 6 * 6);
    assert_eq!(gen.side_count(), 4);
    assert_eq!(gen.generation(), 3);

    // 1296 * 6^2 = 46656 > 30000: refused as a whole.
    let before = gen.vertices().to_vec();
    assert!(matches!(
        gen.run(2),
        Err(SubdivisionError::VertexBudgetExceeded { limit: 30_000, .. })
    ));
    assert_eq!(gen.vertices(), before.as_slice());
    assert_eq!(gen.generation(), 3);
    assert_eq!(gen.rule(), Rule::Koch);

    assert!(matches!(
        CurveGenerator::new(vec![vector![0.0, 0.0]], Rule::Koch),
        Err(SubdivisionError::InvalidPolygon { len: 1 })
    ));
}

proptest! {
    #[test]
    fn every_edge_is_subdivided_once(n in 3usize..9, phase in 0.0f64..6.28, generations in 1usize..3) {
        let poly = regular_polygon(n, 0.8, phase).unwrap();
        let cfg = SequenceCfg::default();
        for rule in Rule::ALL {
            let out = iterate_n(&poly, rule, n, &cfg, generations).unwrap();
            let mut expected = poly.len();
            for _ in 0..generations {
                expected = output_len(expected, rule, n, Seams::Keep);
            }
            prop_assert_eq!(out.len(), expected);
            // Closed output: first point is still the first original vertex.
            prop_assert_eq!(out[0], poly[0]);
        }
    }
}

#[test]
fn engine_types_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Point2>();
    assert_send_sync::<Rule>();
    assert_send_sync::<SequenceCfg>();
    assert_send_sync::<CurveGenerator>();
    assert_send_sync::<SubdivisionError>();
}
