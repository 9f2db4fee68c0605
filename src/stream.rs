use rand_core::{impls, Error};
use rand::RngCore;

const INCREMENT: u32 = 0x6d2b79f5;
const UNIT_SCALE: f64 = 4294967296.0;

/// mulberry32: a 32-bit counter pushed through an xorshift/multiply mix.
/// Reproducible, not secure.
#[derive(Clone, Debug)]
pub struct Stream {
  state: u32,
}

impl Stream {
  pub fn new(seed: u32) -> Self {
    Self { state: seed }
  }
}

impl RngCore for Stream {
  fn next_u32(&mut self) -> u32 {
    self.state = self.state.wrapping_add(INCREMENT);
    let mut t = self.state;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    t ^ (t >> 14)
  }
  fn next_u64(&mut self) -> u64 {
    impls::next_u64_via_u32(self)
  }
  fn fill_bytes(&mut self, dest: &mut [u8]) {
    impls::fill_bytes_via_next(self, dest)
  }
  fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
    self.fill_bytes(dest);
    Ok(())
  }
}

impl Iterator for Stream {
  type Item = f64;
  fn next(&mut self) -> Option<f64> {
    Some(unit(self))
  }
}

/// A draw in [0, 1) with 32 bits of resolution.
pub fn unit<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
  rng.next_u32() as f64 / UNIT_SCALE
}

#[test]
fn test_stream_golden() {
  let mut stream = Stream::new(0);
  assert_eq!(stream.next_u32(), 1144304738);
  assert_eq!(stream.next_u32(), 1416247);
  assert_eq!(stream.next_u32(), 958946056);

  let mut stream = Stream::new(crate::seed::hash("hello"));
  assert_eq!(stream.next_u32(), 2710968669);
  assert_eq!(stream.next_u32(), 3428883067);
  assert_eq!(stream.next_u32(), 1325549424);
}

#[test]
fn test_stream_is_reproducible() {
  let a: Vec<f64> = Stream::new(42).take(32).collect();
  let b: Vec<f64> = Stream::new(42).take(32).collect();
  assert_eq!(a, b);
  let c: Vec<f64> = Stream::new(43).take(32).collect();
  assert_ne!(a, c);
}

#[test]
fn test_unit_range() {
  assert!(Stream::new(7).take(10_000).all(|x| (0.0..1.0).contains(&x)));
  let mut max = rand::rngs::mock::StepRng::new(u32::MAX as u64, 0);
  assert!(unit(&mut max) < 1.0);
  let mut zero = rand::rngs::mock::StepRng::new(0, 0);
  assert_eq!(unit(&mut zero), 0.0);
}

#[test]
fn test_unit_matches_next_u32() {
  let mut a = Stream::new(99);
  let mut b = Stream::new(99);
  for _ in 0..8 {
    assert_eq!(unit(&mut a), b.next_u32() as f64 / 4294967296.0);
  }
}

#[test]
fn test_next_u64_consumes_two_draws() {
  let mut a = Stream::new(5);
  let mut b = Stream::new(5);
  let lo = b.next_u32() as u64;
  let hi = b.next_u32() as u64;
  assert_eq!(a.next_u64(), (hi << 32) | lo);
}
