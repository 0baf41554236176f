// trackpair-core/src/sequence_test.rs

use super::*;

fn frames(n: usize) -> Vec<PathBuf> {
    (0..n).map(|i| PathBuf::from(format!("seq/{:08}.jpg", i + 1))).collect()
}

#[test]
fn test_sequence_new_matching_lengths() {
    let boxes = vec![[0.0, 0.0, 10.0, 10.0]; 3];
    let seq = Sequence::new(frames(3), boxes).unwrap();
    assert_eq!(seq.len(), 3);
    assert!(!seq.is_empty());
}

#[test]
fn test_sequence_new_shape_mismatch() {
    let boxes = vec![[0.0, 0.0, 10.0, 10.0]; 2];
    match Sequence::new(frames(3), boxes) {
        Err(TrackPairError::ShapeMismatch { frames, boxes }) => {
            assert_eq!(frames, 3);
            assert_eq!(boxes, 2);
        }
        other => panic!("Expected ShapeMismatch error, got {:?}", other),
    }
}

#[test]
fn test_sequence_frame_and_bbox_access() {
    let boxes = vec![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]];
    let seq = Sequence::new(frames(2), boxes).unwrap();
    assert_eq!(seq.frame(1).unwrap(), Path::new("seq/00000002.jpg"));
    assert_eq!(seq.bbox(0).unwrap(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(
        seq.bbox(2),
        Err(TrackPairError::IndexOutOfBounds { index: 2, len: 2 })
    );
    assert!(seq.frame(5).is_err());
}

#[test]
fn test_empty_sequence() {
    let seq = Sequence::new(vec![], vec![]).unwrap();
    assert!(seq.is_empty());
    assert_eq!(seq.frames().len(), 0);
    assert_eq!(seq.boxes().len(), 0);
}

#[test]
fn test_frame_pair_gap() {
    assert_eq!(FramePair::new(10, 4).gap(), 6);
    assert_eq!(FramePair::new(4, 10).gap(), 6);
    assert_eq!(FramePair::new(7, 7).gap(), 0);
}
