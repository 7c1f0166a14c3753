// std imports
use std::{
    mem::ManuallyDrop,
    ops::{Deref, DerefMut},
};

// third-party imports
use crossbeam_queue::SegQueue;
use once_cell::sync::Lazy;

// ---

/// Sorted, duplicate-free byte offsets at which a candidate match may end.
pub type Segments = Vec<usize>;

/// Checks out a cleared segment buffer able to hold at least `capacity` offsets without reallocation.
///
/// The buffer returns to its size class when the lease is dropped.
/// Requests above the largest size class get a fresh buffer which is simply freed afterwards.
#[inline]
pub(crate) fn acquire(capacity: usize) -> Leased<Segments, &'static SizedPool> {
    POOL.acquire(capacity)
}

// ---

pub(crate) trait Pool {
    type Item;

    fn check_out(&self) -> Self::Item;
    fn check_in(&self, item: Self::Item);
}

impl<P> Pool for &P
where
    P: Pool,
{
    type Item = P::Item;

    #[inline]
    fn check_out(&self) -> Self::Item {
        (*self).check_out()
    }

    #[inline]
    fn check_in(&self, item: Self::Item) {
        (*self).check_in(item)
    }
}

// ---

pub(crate) trait Factory {
    type Item;

    fn new(&self) -> Self::Item;
}

pub(crate) trait Recycler<T> {
    fn recycle(&self, item: T) -> T;
}

// ---

/// Constructs new items of type T using Factory F and recycles them using Recycler R on request.
pub(crate) struct SQPool<T, F, R>
where
    F: Factory<Item = T>,
    R: Recycler<T>,
{
    factory: F,
    recycler: R,
    recycled: SegQueue<T>,
}

impl<T, F, R> SQPool<T, F, R>
where
    F: Factory<Item = T>,
    R: Recycler<T>,
{
    #[inline]
    pub fn new(factory: F, recycler: R) -> Self {
        Self {
            factory,
            recycler,
            recycled: SegQueue::new(),
        }
    }

    #[inline]
    pub fn recycled(&self) -> usize {
        self.recycled.len()
    }
}

impl<T, F, R> Pool for SQPool<T, F, R>
where
    F: Factory<Item = T>,
    R: Recycler<T>,
{
    type Item = T;

    /// Returns a new or recycled T.
    #[inline]
    fn check_out(&self) -> T {
        match self.recycled.pop() {
            Some(item) => item,
            None => self.factory.new(),
        }
    }

    /// Recycles the given T.
    #[inline]
    fn check_in(&self, item: T) {
        self.recycled.push(self.recycler.recycle(item))
    }
}

// ---

#[derive(Clone, Copy)]
pub(crate) struct WithCapacity(usize);

impl Factory for WithCapacity {
    type Item = Segments;

    #[inline]
    fn new(&self) -> Segments {
        Vec::with_capacity(self.0)
    }
}

#[derive(Clone, Copy)]
pub(crate) struct Clear;

impl Recycler<Segments> for Clear {
    #[inline]
    fn recycle(&self, mut item: Segments) -> Segments {
        item.clear();
        item
    }
}

// ---

const MIN_CLASS: usize = 16;
const CLASSES: usize = 10;

static POOL: Lazy<SegmentsPool> = Lazy::new(SegmentsPool::new);

pub(crate) type SizedPool = SQPool<Segments, WithCapacity, Clear>;

/// Segment buffers grouped into power-of-two capacity classes.
pub(crate) struct SegmentsPool {
    classes: [SizedPool; CLASSES],
}

impl SegmentsPool {
    fn new() -> Self {
        Self {
            classes: std::array::from_fn(|i| SQPool::new(WithCapacity(MIN_CLASS << i), Clear)),
        }
    }

    #[inline]
    fn class(capacity: usize) -> Option<usize> {
        let rounded = capacity.max(MIN_CLASS).checked_next_power_of_two()?;
        let class = (rounded / MIN_CLASS).trailing_zeros() as usize;
        (class < CLASSES).then_some(class)
    }

    #[inline]
    pub fn acquire(&self, capacity: usize) -> Leased<Segments, &SizedPool> {
        match Self::class(capacity) {
            Some(class) => {
                let pool = &self.classes[class];
                Leased::new(pool.check_out(), Some(pool))
            }
            None => Leased::new(Vec::with_capacity(capacity), None),
        }
    }
}

// ---

/// An item checked out of a pool, returned to it on drop.
pub(crate) struct Leased<T, P>
where
    P: Pool<Item = T>,
{
    item: ManuallyDrop<T>,
    pool: Option<P>,
}

impl<T, P> Leased<T, P>
where
    P: Pool<Item = T>,
{
    #[inline]
    fn new(item: T, pool: Option<P>) -> Self {
        Self {
            item: ManuallyDrop::new(item),
            pool,
        }
    }
}

impl<T, P> Deref for Leased<T, P>
where
    P: Pool<Item = T>,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.item
    }
}

impl<T, P> DerefMut for Leased<T, P>
where
    P: Pool<Item = T>,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.item
    }
}

impl<T, P> Drop for Leased<T, P>
where
    P: Pool<Item = T>,
{
    #[inline]
    fn drop(&mut self) {
        // Safety: the item is taken exactly once, here, and never accessed afterwards.
        let item = unsafe { ManuallyDrop::take(&mut self.item) };
        if let Some(pool) = &self.pool {
            pool.check_in(item);
        }
    }
}
