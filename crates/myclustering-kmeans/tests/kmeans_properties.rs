use myclustering_kmeans::KMeans;
use ndarray::Array2;
use proptest::prelude::*;

fn arb_dataset() -> impl Strategy<Value = Array2<f64>> {
    // 4..40 samples, 1..5 features, bounded finite values.
    (4usize..40, 1usize..5).prop_flat_map(|(n, d)| {
        proptest::collection::vec(-1000.0f64..1000.0, n * d)
            .prop_map(move |values| Array2::from_shape_vec((n, d), values).unwrap())
    })
}

proptest! {
    #[test]
    fn every_label_is_in_range(data in arb_dataset(), k in 1usize..4, seed in 0u64..100) {
        let mut kmeans = KMeans::new(k).seed(seed);
        let assignment = kmeans.fit(data.view()).unwrap();

        prop_assert_eq!(assignment.len(), data.nrows());
        for &label in assignment.labels() {
            prop_assert!(label >= 0 && (label as usize) < k);
        }
        prop_assert_eq!(assignment.n_noise(), 0);
    }

    #[test]
    fn inertia_is_finite_and_non_negative(data in arb_dataset(), seed in 0u64..100) {
        let mut kmeans = KMeans::new(2).seed(seed);
        kmeans.fit(data.view()).unwrap();

        let inertia = kmeans.inertia().unwrap();
        prop_assert!(inertia.is_finite());
        prop_assert!(inertia >= 0.0);
    }

    #[test]
    fn same_seed_same_result(data in arb_dataset(), seed in 0u64..100) {
        let mut a = KMeans::new(3).seed(seed);
        let mut b = KMeans::new(3).seed(seed);

        // Skip datasets too small for k=3; the error path is covered elsewhere.
        if data.nrows() >= 3 {
            let la = a.fit(data.view()).unwrap();
            let lb = b.fit(data.view()).unwrap();
            prop_assert_eq!(la, lb);
            prop_assert_eq!(a.centroids().unwrap(), b.centroids().unwrap());
        }
    }

    #[test]
    fn centroids_stay_inside_the_data_envelope(data in arb_dataset(), seed in 0u64..100) {
        let mut kmeans = KMeans::new(2).seed(seed);
        kmeans.fit(data.view()).unwrap();

        // Means of member points can never leave the per-feature min/max box.
        let centroids = kmeans.centroids().unwrap();
        for col in 0..data.ncols() {
            let column = data.column(col);
            let min = column.iter().copied().fold(f64::INFINITY, f64::min);
            let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            for &c in centroids.column(col) {
                prop_assert!(c >= min - 1e-9 && c <= max + 1e-9);
            }
        }
    }
}
