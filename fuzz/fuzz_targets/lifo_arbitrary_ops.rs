#![no_main]

use boxkit::error::BoxError;
use boxkit::policy::lifo::LifoBox;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on LifoBox against a Vec model.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let max_size = (data[0] as usize) % 16;
    let mut stack: LifoBox<u8> = LifoBox::new(max_size, 0);
    let mut model: Vec<u8> = Vec::new();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 4;
        let value = data[idx + 1];

        match op {
            0 => {
                let full = max_size > 0 && model.len() >= max_size;
                let result = stack.insert(value);
                if full {
                    assert_eq!(result, Err(BoxError::Full));
                } else {
                    assert_eq!(result, Ok(()));
                    model.push(value);
                }
            }
            1 => {
                assert_eq!(stack.remove().ok(), model.pop());
            }
            2 => {
                assert_eq!(stack.peek().ok(), model.last());
            }
            3 => {
                if value % 8 == 0 {
                    stack.clear();
                    model.clear();
                } else {
                    assert_eq!(stack.snapshot(), model);
                }
            }
            _ => unreachable!(),
        }

        stack.check_invariants().unwrap();
        assert_eq!(stack.len(), model.len());

        idx += 2;
    }
});
