//! End-to-end scenarios for small point sets whose triangulation is known
//! by hand: the base cases of the recursion, a quadrilateral with a unique
//! Delaunay diagonal, regular grids and degenerate input.

use quadedge_delaunay::prelude::*;
use quadedge_delaunay::topology::characteristics::euler::TopologyClassification;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn triangulate(coords: &[[f64; 2]]) -> DelaunayTriangulation<FastKernel<f64>> {
    init_tracing();
    let points: Vec<_> = coords.iter().copied().map(Point::new).collect();
    let mut dt = DelaunayTriangulation::new(&points).unwrap();
    dt.triangulate().unwrap();
    dt
}

fn coords_of(dt: &DelaunayTriangulation<FastKernel<f64>>, keys: &[VertexKey]) -> Vec<[f64; 2]> {
    keys.iter()
        .map(|&k| *dt.mesh().point(k).unwrap().coords())
        .collect()
}

/// True if the triangulation has an edge between the two points, in either
/// direction.
fn has_edge(dt: &DelaunayTriangulation<FastKernel<f64>>, a: [f64; 2], b: [f64; 2]) -> bool {
    let (a, b) = (Point::new(a), Point::new(b));
    dt.edges()
        .unwrap()
        .iter()
        .any(|&(p, q)| (p == a && q == b) || (p == b && q == a))
}

// =============================================================================
// BASE CASES
// =============================================================================

#[test]
fn two_points_give_a_single_edge() {
    let dt = triangulate(&[[1.0, 1.0], [0.0, 0.0]]);

    assert_eq!(dt.number_of_edges(), 1);
    assert_eq!(dt.number_of_triangles(), 0);
    assert!(dt.is_valid().is_ok());
    assert!(has_edge(&dt, [0.0, 0.0], [1.0, 1.0]));

    let hull = dt.hull_edges().unwrap();
    assert_eq!(*dt.mesh().org_point(hull.left).unwrap().coords(), [0.0, 0.0]);
    assert_eq!(*dt.mesh().org_point(hull.right).unwrap().coords(), [1.0, 1.0]);
    assert_eq!(hull.right, hull.left.sym());

    assert_eq!(dt.euler_characteristic().unwrap(), 2);
    assert_eq!(dt.spanning_tree().unwrap().len(), 1);
}

#[test]
fn counter_clockwise_triple_gives_one_triangle() {
    let dt = triangulate(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);

    assert_eq!(dt.number_of_edges(), 3);
    assert_eq!(dt.number_of_triangles(), 1);
    assert_eq!(dt.statistics().collinear_base_cases, 0);
    assert!(dt.is_valid().is_ok());
    assert!(dt.validate_delaunay().is_ok());
    assert_eq!(
        coords_of(&dt, &dt.convex_hull().unwrap()),
        vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]
    );
}

#[test]
fn clockwise_triple_gives_one_triangle() {
    // Sorted order (0,0), (1,1), (2,0) turns clockwise.
    let dt = triangulate(&[[2.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);

    assert_eq!(dt.number_of_edges(), 3);
    assert_eq!(dt.number_of_triangles(), 1);
    assert!(dt.is_valid().is_ok());
    assert_eq!(
        coords_of(&dt, &dt.convex_hull().unwrap()),
        vec![[0.0, 0.0], [2.0, 0.0], [1.0, 1.0]]
    );

    let face = dt.triangles().next().unwrap();
    let [a, b, c] = face.points(dt.mesh()).unwrap();
    assert!(dt.kernel().ccw(&a, &b, &c));
}

#[test]
fn input_order_does_not_matter() {
    let forward = triangulate(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
    let reversed = triangulate(&[[1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]);

    assert_eq!(
        coords_of(&forward, forward.sorted_vertices()),
        coords_of(&reversed, reversed.sorted_vertices())
    );
    assert_eq!(forward.number_of_triangles(), reversed.number_of_triangles());
    assert_eq!(
        coords_of(&forward, &forward.convex_hull().unwrap()),
        coords_of(&reversed, &reversed.convex_hull().unwrap())
    );
}

#[test]
fn collinear_triple_has_no_triangle() {
    let dt = triangulate(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);

    assert_eq!(dt.number_of_edges(), 2);
    assert_eq!(dt.number_of_triangles(), 0);
    assert_eq!(dt.statistics().collinear_base_cases, 1);
    assert!(has_edge(&dt, [0.0, 0.0], [1.0, 0.0]));
    assert!(has_edge(&dt, [1.0, 0.0], [2.0, 0.0]));
    assert!(!has_edge(&dt, [0.0, 0.0], [2.0, 0.0]));
    assert!(dt.is_valid().is_ok());

    assert_eq!(
        coords_of(&dt, &dt.convex_hull().unwrap()),
        vec![[0.0, 0.0], [2.0, 0.0]]
    );
    assert_eq!(dt.euler_characteristic().unwrap(), 2);
    assert_eq!(
        dt.validate_topology().unwrap().classification,
        TopologyClassification::Ball(1)
    );
}

#[test]
fn long_collinear_run_is_a_path() {
    let coords: Vec<[f64; 2]> = (0..9).map(|i| [f64::from(i), 2.0 * f64::from(i)]).collect();
    let dt = triangulate(&coords);

    assert_eq!(dt.number_of_edges(), 8);
    assert_eq!(dt.number_of_triangles(), 0);
    assert!(dt.is_valid().is_ok());
    assert_eq!(dt.spanning_tree().unwrap().len(), 8);
    assert_eq!(dt.euler_characteristic().unwrap(), 2);
}

// =============================================================================
// KNOWN TRIANGULATIONS
// =============================================================================

#[test]
fn quadrilateral_picks_the_delaunay_diagonal() {
    // The short diagonal (2,-1)-(2,1) is Delaunay; the long one is not.
    let dt = triangulate(&[[0.0, 0.0], [2.0, -1.0], [4.0, 0.0], [2.0, 1.0]]);

    assert_eq!(dt.number_of_edges(), 5);
    assert_eq!(dt.number_of_triangles(), 2);
    assert!(has_edge(&dt, [2.0, -1.0], [2.0, 1.0]));
    assert!(!has_edge(&dt, [0.0, 0.0], [4.0, 0.0]));
    assert!(dt.validate_delaunay().is_ok());
    assert_eq!(
        coords_of(&dt, &dt.convex_hull().unwrap()),
        vec![[0.0, 0.0], [2.0, -1.0], [4.0, 0.0], [2.0, 1.0]]
    );
}

#[test]
fn interior_point_fans_out_to_the_hull() {
    let dt = triangulate(&[[0.0, 0.0], [4.0, 0.0], [2.0, 4.0], [2.0, 1.0]]);

    assert_eq!(dt.number_of_triangles(), 3);
    assert_eq!(dt.number_of_edges(), 6);
    for corner in [[0.0, 0.0], [4.0, 0.0], [2.0, 4.0]] {
        assert!(has_edge(&dt, [2.0, 1.0], corner));
    }
    assert_eq!(dt.convex_hull().unwrap().len(), 3);
}

#[test]
fn regular_grid_satisfies_euler() {
    let dt = DelaunayTriangulationBuilder::grid_points(6, 1.0, [0.0, 0.0])
        .build()
        .unwrap();

    // A k × k grid: k² vertices, 2(k-1)² triangles, 3(k-1)² + 2(k-1) edges.
    assert_eq!(dt.number_of_vertices(), 36);
    assert_eq!(dt.number_of_triangles(), 50);
    assert_eq!(dt.number_of_edges(), 85);
    assert_eq!(dt.convex_hull().unwrap().len(), 20);
    assert_eq!(dt.euler_characteristic().unwrap(), 2);

    let check = dt.validate_topology().unwrap();
    assert!(check.is_valid());
    assert_eq!(check.classification, TopologyClassification::Ball(2));
}

#[test]
fn spanning_tree_has_one_edge_per_non_root_vertex() {
    let mut dt = DelaunayTriangulation::from_random_points(64, (-10.0, 10.0), 7).unwrap();
    dt.triangulate().unwrap();

    let tree = dt.spanning_tree().unwrap();
    assert_eq!(tree.len(), dt.number_of_vertices() - 1);
    assert_eq!(tree[0].from, dt.sorted_vertices()[0]);

    let reached: FastHashSet<VertexKey> = tree.iter().map(|e| e.to).collect();
    assert_eq!(reached.len(), dt.number_of_vertices() - 1);
    assert!(!reached.contains(&dt.sorted_vertices()[0]));
}

#[test]
fn fast_kernel_keeps_delaunay_edges_on_unit_square_input() {
    init_tracing();
    for seed in 0..64 {
        let points = generate_random_points_seeded::<f64>(30, (-1.0, 1.0), seed).unwrap();
        let mut dt = DelaunayTriangulation::new(&points).unwrap();
        dt.triangulate()
            .unwrap_or_else(|e| panic!("seed {seed}: triangulate failed: {e}"));
        assert!(dt.is_valid().is_ok(), "seed {seed}: invalid mesh");
        assert!(dt.validate_delaunay().is_ok(), "seed {seed}: not Delaunay");

        let h = dt.convex_hull().unwrap().len();
        assert_eq!(dt.number_of_triangles(), 2 * 30 - 2 - h, "seed {seed}");
    }
}

// =============================================================================
// INPUT HANDLING
// =============================================================================

#[test]
fn duplicates_are_dropped_before_triangulating() {
    let dt = triangulate(&[
        [0.0, 0.0],
        [1.0, 0.0],
        [0.0, 1.0],
        [1.0, 0.0],
        [0.0, 0.0],
    ]);
    assert_eq!(dt.number_of_vertices(), 3);
    assert_eq!(dt.duplicates_removed(), 2);
    assert_eq!(dt.number_of_triangles(), 1);
}

#[test]
fn degenerate_input_is_rejected() {
    init_tracing();
    assert!(matches!(
        DelaunayTriangulation::new(&[]),
        Err(TriangulationConstructionError::InsufficientVertices { actual: 0 })
    ));
    assert!(matches!(
        DelaunayTriangulation::new(&[Point::new([3.0, 3.0]); 4]),
        Err(TriangulationConstructionError::InsufficientVertices { actual: 1 })
    ));
    assert!(matches!(
        DelaunayTriangulation::new(&[Point::new([0.0, 0.0]), Point::new([f64::NAN, 1.0])]),
        Err(TriangulationConstructionError::InvalidCoordinate { index: 1, .. })
    ));
}

#[test]
fn operations_require_triangulation() {
    let points = [Point::new([0.0, 0.0]), Point::new([1.0, 0.0])];
    let mut dt = DelaunayTriangulation::new(&points).unwrap();

    assert_eq!(dt.spanning_tree(), Err(TriangulationError::NotTriangulated));
    assert_eq!(dt.convex_hull(), Err(TriangulationError::NotTriangulated));
    assert!(matches!(
        dt.compute_voronoi(),
        Err(TriangulationError::NotTriangulated)
    ));

    dt.triangulate().unwrap();
    assert_eq!(dt.triangulate(), Err(TriangulationError::AlreadyTriangulated));
}
