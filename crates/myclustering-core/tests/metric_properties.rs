use myclustering_core::DistanceMetric;
use ndarray::Array1;
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = Array1<f64>> {
    proptest::collection::vec(-1000.0f64..1000.0, 1..6).prop_map(Array1::from_vec)
}

fn arb_metric() -> impl Strategy<Value = DistanceMetric> {
    prop_oneof![
        Just(DistanceMetric::Euclidean),
        Just(DistanceMetric::SquaredEuclidean),
        Just(DistanceMetric::Manhattan),
        Just(DistanceMetric::Chebyshev),
        Just(DistanceMetric::Cosine),
    ]
}

proptest! {
    #[test]
    fn distances_are_non_negative_and_symmetric(
        dims in 1usize..6,
        seed_a in proptest::collection::vec(-1000.0f64..1000.0, 6),
        seed_b in proptest::collection::vec(-1000.0f64..1000.0, 6),
        metric in arb_metric(),
    ) {
        let a = Array1::from_vec(seed_a[..dims].to_vec());
        let b = Array1::from_vec(seed_b[..dims].to_vec());

        let d_ab = metric.distance(a.view(), b.view());
        let d_ba = metric.distance(b.view(), a.view());
        prop_assert!(d_ab >= 0.0);
        prop_assert!((d_ab - d_ba).abs() < 1e-9);
    }

    #[test]
    fn self_distance_is_zero_for_translation_metrics(point in arb_point()) {
        for metric in [
            DistanceMetric::Euclidean,
            DistanceMetric::SquaredEuclidean,
            DistanceMetric::Manhattan,
            DistanceMetric::Chebyshev,
        ] {
            prop_assert_eq!(metric.distance(point.view(), point.view()), 0.0);
        }
    }

    #[test]
    fn euclidean_triangle_inequality(
        dims in 1usize..6,
        va in proptest::collection::vec(-100.0f64..100.0, 6),
        vb in proptest::collection::vec(-100.0f64..100.0, 6),
        vc in proptest::collection::vec(-100.0f64..100.0, 6),
    ) {
        let a = Array1::from_vec(va[..dims].to_vec());
        let b = Array1::from_vec(vb[..dims].to_vec());
        let c = Array1::from_vec(vc[..dims].to_vec());

        for metric in [
            DistanceMetric::Euclidean,
            DistanceMetric::Manhattan,
            DistanceMetric::Chebyshev,
        ] {
            let ab = metric.distance(a.view(), b.view());
            let bc = metric.distance(b.view(), c.view());
            let ac = metric.distance(a.view(), c.view());
            prop_assert!(ac <= ab + bc + 1e-9, "{}", metric.name());
        }
    }
}
