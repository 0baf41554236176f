mod common;

use approx::assert_relative_eq;
use image::{ColorType, Rgb};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use trackpair_data::{
    DataLoader, Dataset, PairwiseConfig, PairwiseDataset, RandomSampler, SequentialSampler, Subset,
    TrackPairError, VecDataset,
};

#[test]
fn pairs_from_disk_are_rgb_and_annotated() {
    common::init_logger();
    let temp = tempfile::tempdir().unwrap();
    let sequences = common::write_sequences(temp.path(), 20, 12);
    let config = PairwiseConfig::default()
        .with_frame_range(3)
        .with_return_index(true)
        .with_pairs_per_video(2);
    let dataset = PairwiseDataset::new(VecDataset::new(sequences), &config).unwrap();
    assert_eq!(dataset.len(), 2 * 10);

    let mut rng = StdRng::seed_from_u64(7);
    for i in 0..dataset.len() {
        let item = dataset.get_with_rng(i, &mut rng).unwrap();
        let pair = item.indices.unwrap();
        assert!(pair.z < 12 && pair.x < 12);
        assert_ne!(pair.z, pair.x);
        assert!(pair.gap() <= 3);

        assert_eq!(item.frame_z.color(), ColorType::Rgb8);
        assert_eq!(item.frame_x.color(), ColorType::Rgb8);
        let z = pair.z as u8;
        assert_eq!(item.frame_z.to_rgb8().get_pixel(2, 2), &Rgb([z, z, z]));

        assert_relative_eq!(item.box_z[1], pair.z as f32 + 0.25);
        assert_relative_eq!(item.box_x[1], pair.x as f32 + 0.25);
        assert_relative_eq!(item.box_z[0], item.box_x[0]);
        assert_relative_eq!(item.box_z[2], 16.0);
        // Training subset only serves the first 10 sequences
        assert!(item.box_z[0] < 10.0);
    }
}

#[test]
fn val_subset_walks_positionally_through_loader() {
    common::init_logger();
    let temp = tempfile::tempdir().unwrap();
    let sequences = common::write_sequences(temp.path(), 24, 6);
    let config = PairwiseConfig::default()
        .with_subset(Subset::Val)
        .with_train_ratio(0.5)
        .with_rand_choice(false)
        .with_frame_range(2);
    let dataset = PairwiseDataset::new(VecDataset::new(sequences), &config).unwrap();
    assert_eq!(dataset.indices(), &(12..24).collect::<Vec<usize>>()[..]);

    let loader = DataLoader::new(dataset, 5, SequentialSampler::new(), false, None);
    assert_eq!(loader.num_batches(), 3);
    let items: Vec<_> = loader.flat_map(|batch| batch.unwrap()).collect();
    assert_eq!(items.len(), 12);
    for (i, item) in items.iter().enumerate() {
        assert_relative_eq!(item.box_z[0], (12 + i) as f32 + 0.5);
        assert!(item.indices.is_none());
    }
}

#[test]
fn causal_pairs_through_random_loader() {
    common::init_logger();
    let temp = tempfile::tempdir().unwrap();
    let sequences = common::write_sequences(temp.path(), 20, 5);
    let config = PairwiseConfig::default()
        .with_causal(true)
        .with_frame_range(1)
        .with_return_index(true)
        .with_pairs_per_video(3);
    let dataset = PairwiseDataset::new(VecDataset::new(sequences), &config).unwrap();
    let loader = DataLoader::new(dataset, 4, RandomSampler::new(None).with_seed(11), true, None);

    let mut anchors = HashSet::new();
    let mut count = 0;
    for batch in loader {
        for item in batch.unwrap() {
            let pair = item.indices.unwrap();
            assert_eq!(pair.x, pair.z + 1);
            anchors.insert(pair.z);
            count += 1;
        }
    }
    assert_eq!(count, 28); // 30 items, last incomplete batch dropped
    assert!(!anchors.contains(&4));
}

#[test]
fn missing_frame_surfaces_as_load_error() {
    common::init_logger();
    let temp = tempfile::tempdir().unwrap();
    let sequences = common::write_sequences(temp.path(), 20, 3);
    std::fs::remove_dir_all(temp.path().join("seq000")).unwrap();
    let config = PairwiseConfig::default().with_rand_choice(false).with_frame_range(1);
    let dataset = PairwiseDataset::new(VecDataset::new(sequences), &config).unwrap();
    assert!(matches!(dataset.get(0), Err(TrackPairError::FrameLoad { .. })));
    assert!(dataset.get(1).is_ok());
}

#[test]
fn config_file_drives_dataset() {
    common::init_logger();
    let temp = tempfile::tempdir().unwrap();
    let sequences = common::write_sequences(temp.path(), 40, 4);
    let config_path = temp.path().join("pairwise.json");
    std::fs::write(
        &config_path,
        r#"{"subset": "val", "train_ratio": 0.75, "frame_range": 0, "return_index": true}"#,
    )
    .unwrap();

    let config = PairwiseConfig::from_json_file(&config_path).unwrap();
    let dataset = PairwiseDataset::new(VecDataset::new(sequences), &config).unwrap();
    assert_eq!(dataset.len(), 10);
    let item = dataset.get(3).unwrap();
    let pair = item.indices.unwrap();
    assert_eq!(pair.z, pair.x);
    assert_eq!(item.frame_z, item.frame_x);
}
