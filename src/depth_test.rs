use crate::depth::Depth;
use crate::rbtree::RbTree;

#[test]
fn test_depth_empty() {
    let depth = Depth::new();
    assert_eq!(depth.samples(), 0);
    assert_eq!(depth.mean(), 0);
    assert!(depth.percentiles().is_empty());
    assert!(depth.json().starts_with("{ \"samples\": 0,"));
}

#[test]
fn test_depth_sample() {
    let mut depth = Depth::new();
    for d in [3, 1, 2, 2].iter() {
        depth.sample(*d);
    }
    assert_eq!(depth.samples(), 4);
    assert_eq!((depth.min(), depth.mean(), depth.max()), (1, 2, 3));
    assert_eq!(depth.percentiles(), vec![(100, 3)]);

    let json = depth.json();
    assert!(json.contains("\"samples\": 4"), "{}", json);
    assert!(json.contains("\"percentiles\": { \"100\": 3 }"), "{}", json);
}

#[test]
fn test_depth_percentiles() {
    let mut depth = Depth::new();
    (0..90).for_each(|_| depth.sample(4));
    (0..5).for_each(|_| depth.sample(5));
    (0..5).for_each(|_| depth.sample(6));
    assert_eq!(depth.percentiles(), vec![(90, 4), (95, 5), (100, 6)]);
}

#[test]
fn test_depth_from_validate() {
    let index: RbTree<i64, i64> = (0..1023).map(|k| (k, k)).collect();
    let stats = index.validate().unwrap();
    let depths = stats.depths().unwrap();
    // every node contributes two boundaries minus the edge to each child.
    assert_eq!(depths.samples(), index.len() + 1);
    assert!(depths.min() >= 1);
    assert_eq!(depths.max(), index.height().unwrap() + 1);
    assert_eq!(depths.percentiles().last(), Some(&(100, depths.max())));
    depths.pretty_print("test ");
}
