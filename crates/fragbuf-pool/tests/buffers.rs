//! Integration test: interoperation between slot views and the other
//! buffer types through the shared capability traits.

use fragbuf_core::{ArrayBuffer, GenericBuffer, GenericBufferMut, OffsetBuffer};
use fragbuf_pool::{ChunkPool, PoolConfig};
use fragbuf_test_utils::{byte_pattern, MockBuffer};

fn fragmented_pool() -> (ChunkPool<u8>, fragbuf_core::SlotId) {
    let mut pool = ChunkPool::new(PoolConfig::new(16, 8)).unwrap();
    let a = pool.allocate(32).unwrap();
    let _b = pool.allocate(16).unwrap();
    pool.free(a);
    let slot = pool.allocate(64).unwrap();
    (pool, slot)
}

#[test]
fn array_into_slot_and_back() {
    let (mut pool, slot) = fragmented_pool();
    let mut source = byte_pattern(50);
    let wrapper = ArrayBuffer::from_slice(&mut source);

    pool.buffer_mut(slot).assign_buffer(&wrapper).unwrap();

    let mut out = [0u8; 64];
    let mut dst = ArrayBuffer::from_slice(&mut out);
    dst.assign_buffer(&pool.buffer(slot)).unwrap();
    assert_eq!(&out[..50], byte_pattern(50).as_slice());
}

#[test]
fn detached_array_copies_nothing() {
    let (mut pool, slot) = fragmented_pool();
    let empty: ArrayBuffer<'_, u8> = ArrayBuffer::detached(64);
    pool.buffer_mut(slot).fill(3);
    pool.buffer_mut(slot).assign_buffer(&empty).unwrap();
    assert!(pool.buffer(slot).to_vec().iter().all(|&v| v == 3));
}

#[test]
fn offset_view_writes_into_slot_tail() {
    let (mut pool, slot) = fragmented_pool();
    {
        let mut view = pool.buffer_mut(slot);
        let mut tail = OffsetBuffer::new(&mut view, 30);
        assert_eq!(tail.size(), 34);
        tail.assign(&[9; 34]).unwrap();
        assert!(tail.assign(&[9; 35]).is_err());
    }
    let data = pool.buffer(slot).to_vec();
    assert!(data[..30].iter().all(|&v| v == 0));
    assert!(data[30..].iter().all(|&v| v == 9));
}

#[test]
fn oversized_source_leaves_slot_untouched() {
    let (mut pool, slot) = fragmented_pool();
    let source = MockBuffer::from_vec(vec![1u8; 65]);
    assert!(pool.buffer_mut(slot).assign_buffer(&source).is_err());
    assert_eq!(source.reads(), 0);
    assert!(pool.buffer(slot).to_vec().iter().all(|&v| v == 0));
}

#[test]
fn slot_into_mock_reads_every_element_once() {
    let (mut pool, slot) = fragmented_pool();
    pool.buffer_mut(slot).assign(&byte_pattern(64)).unwrap();
    let mut sink: MockBuffer<u8> = MockBuffer::new(64);
    sink.assign_buffer(&pool.buffer(slot)).unwrap();
    assert_eq!(sink.writes(), 64);
    assert_eq!(sink.as_slice(), byte_pattern(64).as_slice());
}
