#![no_main]

use std::collections::VecDeque;

use boxkit::error::BoxError;
use boxkit::policy::fifo::FifoBox;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on FifoBox
//
// Mirrors every call on a VecDeque model and checks results, length and
// ring invariants after each step, including across growth and wrap-around.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // First byte: max size (0-15, 0 = unlimited); second: initial capacity (0-7)
    let max_size = (data[0] as usize) % 16;
    let capacity = (data[1] as usize) % 8;
    let mut queue: FifoBox<u8> = FifoBox::new(max_size, capacity);
    let mut model: VecDeque<u8> = VecDeque::new();

    let mut idx = 2;
    while idx + 1 < data.len() {
        let op = data[idx] % 4;
        let value = data[idx + 1];

        match op {
            0 => {
                let full = max_size > 0 && model.len() >= max_size;
                let result = queue.insert(value);
                if full {
                    assert_eq!(result, Err(BoxError::Full));
                } else {
                    assert_eq!(result, Ok(()));
                    model.push_back(value);
                }
            }
            1 => {
                assert_eq!(queue.remove().ok(), model.pop_front());
            }
            2 => {
                assert_eq!(queue.peek().ok(), model.front());
            }
            3 => {
                if value % 8 == 0 {
                    queue.clear();
                    model.clear();
                } else {
                    assert_eq!(queue.snapshot(), model.iter().copied().collect::<Vec<_>>());
                }
            }
            _ => unreachable!(),
        }

        queue.check_invariants().unwrap();
        assert_eq!(queue.len(), model.len());
        if max_size > 0 {
            assert!(queue.len() <= max_size);
            assert!(queue.capacity() <= max_size.max(capacity.max(1)).max(8));
        }

        idx += 2;
    }
});
