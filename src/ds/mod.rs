pub mod ring_buffer;

pub use ring_buffer::{DEFAULT_RING_CAPACITY, GROWTH_FACTOR, RingBuffer};
