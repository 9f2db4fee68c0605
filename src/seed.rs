use crate::stream::Stream;

const OFFSET_BASIS: u32 = 2166136261;
const FORK_STRIDE: u32 = 9973;

// FNV-1a variant: the prime multiply is spelled out as a sum of shifted copies.
pub fn hash(text: &str) -> u32 {
  text.chars().fold(OFFSET_BASIS, |acc, c| {
    let h = acc ^ c as u32;
    h.wrapping_add(h << 1)
      .wrapping_add(h << 4)
      .wrapping_add(h << 7)
      .wrapping_add(h << 8)
      .wrapping_add(h << 24)
  })
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Seed(u32);

impl Seed {
  pub fn new(text: &str) -> Self {
    Self(hash(text))
  }

  /// Seeds from the wall clock. Two calls rarely agree, so results are only
  /// reproducible within the batch they seed.
  pub fn from_clock() -> Self {
    let millis = chrono::Utc::now().timestamp_millis();
    tracing::warn!(millis, "no seed text given, seeding from the clock");
    Self::new(&millis.to_string())
  }

  /// Empty text selects the clock.
  pub fn resolve(text: &str) -> Self {
    if text.is_empty() {
      Self::from_clock()
    } else {
      Self::new(text)
    }
  }

  pub fn fork(self, index: u32) -> Self {
    Self(self.0.wrapping_add(index.wrapping_mul(FORK_STRIDE)))
  }

  pub fn stream(self) -> Stream {
    Stream::new(self.0)
  }

  pub fn value(self) -> u32 {
    self.0
  }
}

impl From<u32> for Seed {
  fn from(value: u32) -> Self {
    Self(value)
  }
}

#[test]
fn test_hash_golden() {
  assert_eq!(hash(""), 2166136261);
  assert_eq!(hash("a"), 3826002220);
  assert_eq!(hash("hello"), 1335831723);
  assert_eq!(hash("seed-42"), 3411273461);
}

#[test]
fn test_hash_uses_code_points() {
  assert_eq!(hash("가"), 73554207);
  assert_ne!(hash("가"), hash("\u{ea}\u{b0}\u{80}"));
}

#[test]
fn test_hash_is_order_sensitive() {
  assert_ne!(hash("ab"), hash("ba"));
}

#[test]
fn test_fork() {
  let seed = Seed::new("hello");
  assert_eq!(seed.fork(0), seed);
  assert_eq!(seed.fork(1).value(), 1335831723 + 9973);
  assert_eq!(seed.fork(2).value() - seed.fork(1).value(), 9973);
  assert_eq!(Seed::from(u32::MAX).fork(1), Seed::from(9972));
}

#[test]
fn test_resolve() {
  assert_eq!(Seed::resolve("hello"), Seed::new("hello"));
  let clock = Seed::resolve("");
  assert_ne!(clock, Seed::new(""));
}
