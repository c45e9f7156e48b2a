use myclustering_core::Linkage;
use myclustering_hierarchy::AgglomerativeClustering;
use ndarray::Array2;
use proptest::prelude::*;

fn arb_dataset() -> impl Strategy<Value = Array2<f64>> {
    (2usize..20, 1usize..4).prop_flat_map(|(n, d)| {
        proptest::collection::vec(-100.0f64..100.0, n * d)
            .prop_map(move |values| Array2::from_shape_vec((n, d), values).unwrap())
    })
}

fn arb_linkage() -> impl Strategy<Value = Linkage> {
    prop_oneof![
        Just(Linkage::Single),
        Just(Linkage::Complete),
        Just(Linkage::Average),
        Just(Linkage::Ward),
    ]
}

proptest! {
    #[test]
    fn always_n_minus_one_merges(data in arb_dataset(), linkage in arb_linkage()) {
        let mut model = AgglomerativeClustering::new(linkage);
        let dendrogram = model.fit(data.view()).unwrap();
        prop_assert_eq!(dendrogram.steps().len(), data.nrows() - 1);
    }

    #[test]
    fn heights_are_monotone(data in arb_dataset(), linkage in arb_linkage()) {
        let mut model = AgglomerativeClustering::new(linkage);
        let dendrogram = model.fit(data.view()).unwrap();
        let steps = dendrogram.steps();
        for pair in steps.windows(2) {
            prop_assert!(pair[1].distance >= pair[0].distance - 1e-9);
        }
    }

    #[test]
    fn every_cut_count_is_honoured(data in arb_dataset(), linkage in arb_linkage()) {
        let mut model = AgglomerativeClustering::new(linkage);
        let dendrogram = model.fit(data.view()).unwrap();
        let n = data.nrows();
        for k in 1..=n {
            let assignment = dendrogram.cut(k).unwrap();
            prop_assert_eq!(assignment.n_clusters(), k);
            prop_assert_eq!(assignment.len(), n);
            prop_assert_eq!(assignment.n_noise(), 0);
        }
    }

    #[test]
    fn leaf_order_is_a_permutation(data in arb_dataset(), linkage in arb_linkage()) {
        let mut model = AgglomerativeClustering::new(linkage);
        let dendrogram = model.fit(data.view()).unwrap();
        let mut order = dendrogram.leaf_order();
        order.sort_unstable();
        let expected: Vec<usize> = (0..data.nrows()).collect();
        prop_assert_eq!(order, expected);
    }
}
