//! Convert an asset tree, then read the results back through the facade.

use gridcast::prelude::*;
use gridcast_test_utils::{gradient, noise_rgb, AssetTree};

#[test]
fn batch_output_loads_as_environments() {
    let dir = tempfile::tempdir().unwrap();
    let tree = AssetTree::new(dir.path());
    tree.image("collision_images", "noise", "noise.png", &noise_rgb(40, 20, 3));
    tree.image("objective_images", "ramp", "ramp.png", &gradient(40, 20));

    let converter =
        BatchConverter::new(BatchConfig::new(dir.path()), FsListing, ImageCrateLoader).unwrap();
    let report = converter.run().unwrap();
    assert!(report.all_completed());

    let config = converter.config();
    let collision = GridEnvironment::load(
        &converter.marker_path(Category::Collision, "noise"),
        "noise",
    )
    .unwrap();
    assert_eq!((collision.grid().rows(), collision.grid().cols()), (10, 20));
    assert!(collision.grid().data().iter().all(|&v| v == 0.0 || v == 1.0));

    let objective =
        GridEnvironment::open(config, Category::Objective, "ramp", FsListing, ImageCrateLoader)
            .unwrap();
    assert_eq!(objective.world_extent().width(), 2.0);
    // Dark left edge scores high, light right edge scores low.
    let left = objective.query(WorldCoord::new(0.5, 0.0), Sampling::Bilinear);
    let right = objective.query(WorldCoord::new(0.5, 2.0), Sampling::Bilinear);
    assert!(left > 0.9 && right < 0.1, "left {left}, right {right}");
}

#[test]
fn converted_grids_match_in_memory_transform() {
    let dir = tempfile::tempdir().unwrap();
    let tree = AssetTree::new(dir.path());
    let img = noise_rgb(17, 9, 11);
    tree.image("collision_images", "n", "n.png", &img);
    tree.image("objective_images", "n", "n.png", &img);

    let converter =
        BatchConverter::new(BatchConfig::new(dir.path()), FsListing, ImageCrateLoader).unwrap();
    converter.run().unwrap();

    let on_disk = |c| std::fs::read_to_string(converter.marker_path(c, "n")).unwrap();
    let collision = to_collision_grid(&img, 0.5).unwrap();
    assert_eq!(on_disk(Category::Collision), format_collision_grid(&collision));
    let objective = to_objective_grid(&img, 0.5).unwrap();
    assert_eq!(on_disk(Category::Objective), format_objective_grid(&objective));
}
