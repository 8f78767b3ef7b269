//! K-means on a simple 2D dataset, with explicit and random initial centers.

use rand::prelude::*;
use vecn::cluster::{k_means, Kmeans};
use vecn::{Point, Point2};

fn main() {
    // Three well-separated clusters in 2D.
    let data: Vec<Point2> = vec![
        // Cluster A (near origin)
        Point::new(0.0, 0.0),
        Point::new(0.1, 0.2),
        Point::new(0.2, 0.1),
        Point::new(-0.1, 0.1),
        // Cluster B (near (5, 5))
        Point::new(5.0, 5.0),
        Point::new(5.1, 4.9),
        Point::new(4.9, 5.1),
        Point::new(5.2, 5.2),
        // Cluster C (near (10, 0))
        Point::new(10.0, 0.0),
        Point::new(10.1, 0.1),
        Point::new(9.9, -0.1),
        Point::new(10.2, 0.2),
    ];

    // --- Explicit initial centers ---
    let clusters = k_means(vec![data[0], data[4], data[8]], &data).unwrap();
    println!("=== k-means, explicit centers ===");
    for (i, cluster) in clusters.iter().enumerate() {
        println!("  cluster {} center {} ({} members)", i, cluster.center, cluster.len());
        for m in &cluster.members {
            println!("    {}", m);
        }
    }

    // --- Random initial centers inside (11, 6) ---
    let mut rng = StdRng::seed_from_u64(42);
    let fit = Kmeans::new(3)
        .fit_random(&Point::new(11.0, 6.0), &data, &mut rng)
        .unwrap();
    println!(
        "\n=== k-means, random centers (converged: {}, iterations: {}, inertia: {:.3}) ===",
        fit.converged,
        fit.iterations,
        fit.inertia()
    );
    for (i, label) in fit.labels.iter().enumerate() {
        println!("  point {:2} ({:5.1}, {:5.1}) => cluster {}", i, data[i].x(), data[i].y(), label);
    }
}
