use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use fnv::FnvHashSet;
use log::{debug, info, warn};
use lru::LruCache;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::tiles::tile_params::TileKey;

pub const DEFAULT_CACHE_CAPACITY_BYTES: usize = 64 * 1024 * 1024;
pub const DEFAULT_ENCODED_CACHE_CAPACITY_BYTES: usize = 16 * 1024 * 1024;

/// A cacheable tile representation, weighed by the bytes it holds.
pub trait CachedTile {
    fn byte_size(&self) -> usize;
}

impl CachedTile for PixelBuffer {
    fn byte_size(&self) -> usize {
        self.buffer_size()
    }
}

// Encoded tiles.
impl CachedTile for Vec<u8> {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub renders: u64,
    pub evictions: u64,
    pub entries: usize,
    pub bytes: usize,
}

struct CacheState<T> {
    entries: LruCache<TileKey, Arc<T>>,
    in_flight: FnvHashSet<TileKey>,
    bytes: usize,
    hits: u64,
    misses: u64,
    renders: u64,
    evictions: u64,
}

/// Rendered tiles, bounded by total bytes and evicted least recently used first.
///
/// Concurrent misses for the same key render once: the first caller renders
/// while later callers wait for its result. Different keys render in parallel,
/// and hits never wait on a render in progress.
pub struct TileCache<T = PixelBuffer> {
    state: Mutex<CacheState<T>>,
    rendered: Condvar,
    capacity_bytes: usize,
}

impl<T: CachedTile> TileCache<T> {
    #[must_use]
    pub fn new(capacity_bytes: usize) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: LruCache::unbounded(),
                in_flight: FnvHashSet::default(),
                bytes: 0,
                hits: 0,
                misses: 0,
                renders: 0,
                evictions: 0,
            }),
            rendered: Condvar::new(),
            capacity_bytes,
        }
    }

    pub fn capacity_bytes(&self) -> usize {
        self.capacity_bytes
    }

    /// Returns the cached tile for `key`, calling `render` on a miss.
    ///
    /// A failed render is not cached and wakes any waiting callers, one of
    /// which then retries the render itself.
    pub fn get_or_render<F, E>(&self, key: TileKey, render: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        {
            let mut state = self.lock();

            loop {
                if let Some(tile) = state.entries.get(&key).map(Arc::clone) {
                    state.hits += 1;
                    debug!("tile cache hit for {}", key.address);
                    return Ok(tile);
                }

                if !state.in_flight.contains(&key) {
                    break;
                }

                state = self
                    .rendered
                    .wait(state)
                    .unwrap_or_else(PoisonError::into_inner);
            }

            state.misses += 1;
            state.in_flight.insert(key);
        }

        debug!("tile cache miss for {}", key.address);

        let _in_flight = InFlightGuard { cache: self, key };
        let start = Instant::now();
        let tile = Arc::new(render()?);

        debug!("rendered tile {} in {:?}", key.address, start.elapsed());
        self.store(key, Arc::clone(&tile));

        Ok(tile)
    }

    /// Drops every cached tile. Renders already in progress still store their result.
    pub fn clear(&self) {
        let mut state = self.lock();
        let entries = state.entries.len();

        state.entries.clear();
        state.bytes = 0;

        info!("cleared {} tiles from the tile cache", entries);
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();

        CacheStats {
            hits: state.hits,
            misses: state.misses,
            renders: state.renders,
            evictions: state.evictions,
            entries: state.entries.len(),
            bytes: state.bytes,
        }
    }

    fn store(&self, key: TileKey, tile: Arc<T>) {
        let size = tile.byte_size();
        let mut state = self.lock();

        state.renders += 1;

        if size > self.capacity_bytes {
            warn!(
                "tile {} is {} bytes, larger than the {} byte cache; not caching it",
                key.address, size, self.capacity_bytes
            );
            return;
        }

        if let Some(previous) = state.entries.put(key, tile) {
            state.bytes -= previous.byte_size();
        }
        state.bytes += size;

        while state.bytes > self.capacity_bytes {
            let Some((evicted_key, evicted)) = state.entries.pop_lru() else {
                break;
            };

            state.bytes -= evicted.byte_size();
            state.evictions += 1;
            debug!("evicted tile {} from the tile cache", evicted_key.address);
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: CachedTile> Default for TileCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY_BYTES)
    }
}

// Clears the in-flight mark when the render finishes, fails or panics.
struct InFlightGuard<'a, T: CachedTile> {
    cache: &'a TileCache<T>,
    key: TileKey,
}

impl<T: CachedTile> Drop for InFlightGuard<'_, T> {
    fn drop(&mut self) {
        self.cache.lock().in_flight.remove(&self.key);
        self.cache.rendered.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;
    use crate::core::tiles::tile_address::TileAddress;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Barrier};
    use std::thread;
    use std::time::Duration;

    // 2x2 RGB tiles are 12 bytes each.
    const SMALL_TILE_BYTES: usize = 12;

    fn key(x: u64) -> TileKey {
        TileKey {
            address: TileAddress::new(4, x, 0).unwrap(),
            params_hash: 7,
        }
    }

    fn small_tile(shade: u8) -> PixelBuffer {
        let mut pixel_buffer = PixelBuffer::new(PixelRect::with_size(2, 2).unwrap());
        pixel_buffer
            .set_pixel(Point { x: 0, y: 0 }, Colour::grey(f64::from(shade)))
            .unwrap();
        pixel_buffer
    }

    fn render_ok(shade: u8) -> Result<PixelBuffer, String> {
        Ok(small_tile(shade))
    }

    #[test]
    fn test_second_lookup_is_a_hit_without_rendering() {
        let cache = TileCache::default();
        let renders = AtomicUsize::new(0);
        let render = || {
            renders.fetch_add(1, Ordering::SeqCst);
            render_ok(10)
        };

        let first = cache.get_or_render(key(0), render).unwrap();
        let second = cache
            .get_or_render(key(0), || -> Result<PixelBuffer, String> {
                renders.fetch_add(1, Ordering::SeqCst);
                render_ok(99)
            })
            .unwrap();

        assert_eq!(renders.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                renders: 1,
                evictions: 0,
                entries: 1,
                bytes: SMALL_TILE_BYTES,
            }
        );
    }

    #[test]
    fn test_distinct_keys_render_separately() {
        let cache = TileCache::default();

        let first = cache.get_or_render(key(0), || render_ok(1)).unwrap();
        let second = cache.get_or_render(key(1), || render_ok(2)).unwrap();
        let other_params = TileKey {
            params_hash: 8,
            ..key(0)
        };
        let third = cache.get_or_render(other_params, || render_ok(3)).unwrap();

        assert_ne!(first, second);
        assert_ne!(first, third);
        assert_eq!(cache.stats().renders, 3);
    }

    #[test]
    fn test_failed_render_is_not_cached() {
        let cache = TileCache::default();

        let failed = cache.get_or_render(key(0), || -> Result<PixelBuffer, String> {
            Err("boom".to_owned())
        });
        let retried = cache.get_or_render(key(0), || render_ok(5));

        assert_eq!(failed, Err("boom".to_owned()));
        assert_eq!(*retried.unwrap(), small_tile(5));
        assert_eq!(cache.stats().entries, 1);
    }

    #[test]
    fn test_least_recently_used_tile_is_evicted_when_full() {
        let cache = TileCache::new(2 * SMALL_TILE_BYTES);

        cache.get_or_render(key(0), || render_ok(0)).unwrap();
        cache.get_or_render(key(1), || render_ok(1)).unwrap();
        // Touch key 0 so key 1 becomes the least recently used.
        cache.get_or_render(key(0), || render_ok(0)).unwrap();
        cache.get_or_render(key(2), || render_ok(2)).unwrap();

        let stats = cache.stats();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.bytes, 2 * SMALL_TILE_BYTES);
        assert_eq!(stats.evictions, 1);

        let renders_before = cache.stats().renders;
        cache.get_or_render(key(0), || render_ok(0)).unwrap();
        assert_eq!(cache.stats().renders, renders_before);

        cache.get_or_render(key(1), || render_ok(1)).unwrap();
        assert_eq!(cache.stats().renders, renders_before + 1);
    }

    #[test]
    fn test_tile_larger_than_capacity_is_returned_but_not_stored() {
        let cache = TileCache::new(SMALL_TILE_BYTES - 1);

        let tile = cache.get_or_render(key(0), || render_ok(3)).unwrap();

        assert_eq!(*tile, small_tile(3));
        assert_eq!(cache.stats().entries, 0);
        assert_eq!(cache.stats().bytes, 0);
    }

    #[test]
    fn test_clear_empties_the_cache() {
        let cache = TileCache::default();
        cache.get_or_render(key(0), || render_ok(0)).unwrap();
        cache.get_or_render(key(1), || render_ok(1)).unwrap();

        cache.clear();

        assert_eq!(cache.stats().entries, 0);
        assert_eq!(cache.stats().bytes, 0);

        cache.get_or_render(key(0), || render_ok(0)).unwrap();
        assert_eq!(cache.stats().renders, 3);
    }

    #[test]
    fn test_encoded_tiles_are_weighed_by_length() {
        let cache: TileCache<Vec<u8>> = TileCache::new(10);

        cache
            .get_or_render(key(0), || -> Result<Vec<u8>, String> { Ok(vec![1; 6]) })
            .unwrap();
        let second = cache
            .get_or_render(key(1), || -> Result<Vec<u8>, String> { Ok(vec![2; 4]) })
            .unwrap();

        assert_eq!(*second, vec![2; 4]);
        assert_eq!(cache.stats().bytes, 10);
        assert_eq!(cache.stats().evictions, 0);

        cache
            .get_or_render(key(2), || -> Result<Vec<u8>, String> { Ok(vec![3; 1]) })
            .unwrap();

        assert_eq!(cache.stats().entries, 2);
        assert_eq!(cache.stats().bytes, 5);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_render_in_progress_blocks_neither_hits_nor_other_keys() {
        let cache = TileCache::default();
        cache.get_or_render(key(1), || render_ok(1)).unwrap();

        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let cache = &cache;

        thread::scope(|scope| {
            let held = scope.spawn(move || {
                cache.get_or_render(key(0), || {
                    started_tx.send(()).unwrap();
                    // Finishes on its own if the other lookups stay blocked.
                    let _ = release_rx.recv_timeout(Duration::from_secs(5));
                    render_ok(0)
                })
            });

            started_rx.recv().unwrap();

            let hit = cache
                .get_or_render(key(1), || -> Result<PixelBuffer, String> {
                    Err("cached tile rendered again".to_owned())
                })
                .unwrap();
            let other = cache.get_or_render(key(2), || render_ok(2)).unwrap();

            assert!(!held.is_finished());
            assert_eq!(*hit, small_tile(1));
            assert_eq!(*other, small_tile(2));

            release_tx.send(()).unwrap();
            assert_eq!(*held.join().unwrap().unwrap(), small_tile(0));
        });

        assert_eq!(cache.stats().renders, 3);
    }

    #[test]
    fn test_concurrent_misses_for_one_key_render_once() {
        const THREADS: usize = 8;

        let cache = TileCache::default();
        let renders = AtomicUsize::new(0);
        let barrier = Barrier::new(THREADS);

        let tiles: Vec<Arc<PixelBuffer>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        cache
                            .get_or_render(key(0), || -> Result<PixelBuffer, String> {
                                renders.fetch_add(1, Ordering::SeqCst);
                                thread::sleep(Duration::from_millis(50));
                                render_ok(42)
                            })
                            .unwrap()
                    })
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(renders.load(Ordering::SeqCst), 1);
        assert!(tiles.iter().all(|tile| **tile == small_tile(42)));

        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, THREADS as u64 - 1);
    }

    #[test]
    fn test_waiters_retry_after_a_failed_render() {
        const THREADS: usize = 4;

        let cache = TileCache::default();
        let attempts = AtomicUsize::new(0);
        let barrier = Barrier::new(THREADS);

        let results: Vec<Result<Arc<PixelBuffer>, String>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        cache.get_or_render(key(0), || {
                            let attempt = attempts.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(Duration::from_millis(20));

                            if attempt == 0 {
                                Err("first attempt fails".to_owned())
                            } else {
                                render_ok(1)
                            }
                        })
                    })
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.iter().filter(|result| result.is_err()).count(), 1);
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}
