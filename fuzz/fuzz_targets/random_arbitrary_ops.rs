#![no_main]

use boxkit::error::BoxError;
use boxkit::policy::random::RandomBox;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on RandomBox
//
// The model is a multiset (sorted Vec): every removed item must be live,
// and the live multiset must match after each operation.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let max_size = (data[0] as usize) % 16;
    let seed = u64::from(data[1]);
    let mut pool: RandomBox<u8> = RandomBox::new(max_size, 0, Some(seed));
    let mut model: Vec<u8> = Vec::new();

    let mut idx = 2;
    while idx + 1 < data.len() {
        let op = data[idx] % 4;
        let value = data[idx + 1];

        match op {
            0 => {
                let full = max_size > 0 && model.len() >= max_size;
                let result = pool.insert(value);
                if full {
                    assert_eq!(result, Err(BoxError::Full));
                } else {
                    assert_eq!(result, Ok(()));
                    model.push(value);
                }
            }
            1 => match pool.remove() {
                Ok(item) => {
                    let pos = model.iter().position(|&m| m == item).expect("removed item was live");
                    model.swap_remove(pos);
                }
                Err(err) => {
                    assert_eq!(err, BoxError::Empty);
                    assert!(model.is_empty());
                }
            },
            2 => match pool.peek() {
                Ok(item) => assert!(model.contains(item)),
                Err(_) => assert!(model.is_empty()),
            },
            3 => {
                pool.clear();
                model.clear();
            }
            _ => unreachable!(),
        }

        let mut live = pool.snapshot();
        let mut expected = model.clone();
        live.sort_unstable();
        expected.sort_unstable();
        assert_eq!(live, expected);
        pool.check_invariants().unwrap();

        idx += 2;
    }
});
