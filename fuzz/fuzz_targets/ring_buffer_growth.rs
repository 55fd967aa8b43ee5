#![no_main]

use std::collections::VecDeque;

use boxkit::ds::RingBuffer;
use libfuzzer_sys::fuzz_target;

// Fuzz RingBuffer growth under arbitrary push/pop interleavings and limits.
//
// Each byte is one op: high bit set = pop, otherwise push; every 16th op
// forces an explicit grow with a limit drawn from the byte.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let capacity = (data[0] as usize) % 9;
    let mut ring: RingBuffer<u8> = RingBuffer::with_capacity(capacity);
    let mut model: VecDeque<u8> = VecDeque::new();

    for (step, &byte) in data[1..].iter().enumerate() {
        if byte & 0x80 != 0 {
            assert_eq!(ring.pop_front(), model.pop_front());
        } else {
            ring.push_back(byte);
            model.push_back(byte);
        }

        if step % 16 == 15 {
            let before = ring.capacity();
            ring.grow(Some((byte as usize) % 32));
            assert!(ring.capacity() >= before);
            assert!(ring.capacity() >= ring.len());
        }

        ring.check_invariants().unwrap();
        assert_eq!(ring.len(), model.len());
        assert!(ring.iter().eq(model.iter()));
    }
});
