use fixedlru::{Cache, CacheConfig, Error, LruCache, PutOutcome};

fn squares() -> LruCache<i32, i32> {
    let mut cache = LruCache::new(3).unwrap();
    cache.put(1, 1);
    cache.put(2, 4);
    cache.put(3, 9);
    cache
}

#[test]
fn empty_cache_misses() {
    let mut cache = LruCache::<i32, i32>::new(3).unwrap();
    for key in -5..5 {
        assert_eq!(cache.get(&key), None);
    }
    assert_eq!(cache.stats().misses(), 10);
}

#[test]
fn zero_capacity_rejected() {
    assert!(matches!(
        LruCache::<i32, i32>::new(0),
        Err(Error::InvalidCapacity(0))
    ));
    for capacity in 1..10 {
        let cache = LruCache::<i32, i32>::new(capacity).unwrap();
        assert!(cache.is_empty());
    }
}

#[test]
fn insertions_round_trip() {
    let mut cache = squares();

    assert_eq!(cache.get(&1), Some(&1));
    assert_eq!(cache.get(&2), Some(&4));
    assert_eq!(cache.get(&3), Some(&9));
    assert_eq!(cache.get(&5), None);
}

#[test]
fn single_overflow_evicts_least_recent() {
    let mut cache = squares();
    cache.get(&1);

    assert_eq!(cache.put(4, 16), PutOutcome::Evicted(2, 4));
    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&1), Some(&1));
    assert_eq!(cache.get(&3), Some(&9));
    assert_eq!(cache.get(&4), Some(&16));
}

#[test]
fn multiple_replacements() {
    let mut cache = squares();
    cache.put(1, 0);
    cache.get(&2);
    cache.get(&2);
    cache.put(4, 16);

    assert_eq!(cache.get(&3), None);
    assert_eq!(cache.get(&1), Some(&0));
    assert_eq!(cache.get(&2), Some(&4));
    assert_eq!(cache.get(&4), Some(&16));

    // Recency is now 1, 2, 4 (least to most)
    cache.put(5, 25);
    assert_eq!(cache.get(&1), None);
    cache.put(6, 0);
    cache.put(7, 0);
    cache.put(8, 0);
    for key in 0..=5 {
        assert_eq!(cache.get(&key), None);
    }
    assert_eq!(cache.len(), 3);
}

#[test]
fn capacity_one() {
    let mut cache = LruCache::new(1).unwrap();
    cache.put(0, 0);
    cache.put(1, 1);

    assert_eq!(cache.get(&0), None);
    assert_eq!(cache.get(&1), Some(&1));
}

#[test]
fn bounded_size_after_many_keys() {
    let mut cache = LruCache::new(5).unwrap();
    for key in 0..50 {
        cache.put(key, key * 2);
    }

    let present = (0..50).filter(|key| cache.peek(key).is_some()).count();
    assert_eq!(present, 5);
    assert_eq!(cache.free_space(), 0);
    let keys: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![45, 46, 47, 48, 49]);
}

#[test]
fn overwrite_keeps_one_entry() {
    let mut cache = LruCache::new(3).unwrap();
    cache.put("k", 1);
    cache.put("k", 2);

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.free_space(), 2);
    assert_eq!(cache.get(&"k"), Some(&2));
}

#[test]
fn reput_protects_from_eviction() {
    let mut cache = squares();
    cache.put(1, 1);
    cache.put(4, 16);

    assert!(cache.contains(&1));
    assert!(!cache.contains(&2));
}

#[test]
fn works_through_trait_and_config() {
    let config = CacheConfig::from_json(r#"{"capacity": 2}"#).unwrap();
    let mut lru = config.build::<String, usize>().unwrap();
    let cache: &mut dyn Cache<String, usize> = &mut lru;

    cache.put("a".to_string(), 1);
    cache.put("b".to_string(), 2);
    cache.put("c".to_string(), 3);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&"a".to_string()), None);
    assert_eq!(cache.get(&"c".to_string()), Some(&3));
}
