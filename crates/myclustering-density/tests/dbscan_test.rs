use myclustering_core::{DistanceMetric, IClusterer};
use myclustering_density::Dbscan;
use ndarray::{array, Array2};

/// Two dense blobs plus one far-away outlier, mirroring the classic
/// two-moons-style smoke test for density clustering.
fn blobs_with_outlier() -> Array2<f64> {
    let mut rng = fastrand::Rng::with_seed(21);
    let mut values = Vec::new();
    for &(cx, cy) in &[(0.0f64, 0.0f64), (10.0, 10.0)] {
        for _ in 0..12 {
            values.push(cx + rng.f64() * 0.8);
            values.push(cy + rng.f64() * 0.8);
        }
    }
    values.push(50.0);
    values.push(-50.0);
    Array2::from_shape_vec((25, 2), values).unwrap()
}

#[test]
fn finds_two_clusters_and_flags_the_outlier() {
    let data = blobs_with_outlier();
    let mut dbscan = Dbscan::new(1.5, 3);
    let assignment = dbscan.fit(data.view()).unwrap();

    assert_eq!(assignment.n_clusters(), 2);
    assert_eq!(assignment.n_noise(), 1);
    assert_eq!(assignment.labels()[24], -1);

    let labels = assignment.labels();
    assert!(labels[..12].iter().all(|&l| l == 0));
    assert!(labels[12..24].iter().all(|&l| l == 1));
}

#[test]
fn refitting_is_deterministic() {
    let data = blobs_with_outlier();
    let a = Dbscan::new(1.5, 3).fit(data.view()).unwrap();
    let b = Dbscan::new(1.5, 3).fit(data.view()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn larger_eps_absorbs_the_outlier_boundary() {
    // With eps wide enough to bridge the blobs, everything becomes one cluster.
    let data = array![[0.0], [1.0], [2.0], [3.0], [4.0]];
    let mut narrow = Dbscan::new(0.5, 2);
    let mut wide = Dbscan::new(1.5, 2);

    let narrow_fit = narrow.fit(data.view()).unwrap();
    let wide_fit = wide.fit(data.view()).unwrap();
    assert_eq!(narrow_fit.n_clusters(), 0);
    assert_eq!(wide_fit.n_clusters(), 1);
    assert_eq!(wide_fit.n_noise(), 0);
}

#[test]
fn manhattan_metric_is_honoured() {
    // Diagonal neighbours: euclidean distance √2 ≈ 1.41, manhattan 2.
    let data = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
    let mut euclid = Dbscan::new(1.5, 2);
    let mut manhattan = Dbscan::new(1.5, 2).metric(DistanceMetric::Manhattan);

    assert_eq!(euclid.fit(data.view()).unwrap().n_clusters(), 1);
    assert_eq!(manhattan.fit(data.view()).unwrap().n_clusters(), 0);
}

#[test]
fn trait_surface_reports_found_clusters() {
    let data = blobs_with_outlier();
    let mut clusterer: Box<dyn IClusterer> = Box::new(Dbscan::new(1.5, 3));

    assert_eq!(clusterer.n_clusters(), None);
    clusterer.fit_predict(data.view()).unwrap();
    assert_eq!(clusterer.n_clusters(), Some(2));
    assert_eq!(clusterer.name(), "dbscan");
}
