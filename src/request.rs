use crate::error::{RequestError, RequestResult};
use crate::group::GroupChoice;
use crate::tone::Tone;

pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 10;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationRequest {
  count: usize,
  group: GroupChoice,
  tone: Tone,
  seed_text: String,
}

impl GenerationRequest {
  pub fn new<S: Into<String>>(
    count: i64,
    group: GroupChoice,
    tone: Tone,
    seed_text: S,
  ) -> RequestResult<Self> {
    if count < MIN_COUNT as i64 || count > MAX_COUNT as i64 {
      return Err(RequestError::CountOutOfRange { count });
    }
    Ok(Self {
      count: count as usize,
      group,
      tone,
      seed_text: seed_text.into().trim().to_owned(),
    })
  }
  pub fn parse(count: &str, group: &str, tone: &str, seed_text: &str) -> RequestResult<Self> {
    Self::new(
      lenient_count(count),
      group.parse()?,
      tone.parse()?,
      seed_text,
    )
  }
  pub fn count(&self) -> usize {
    self.count
  }
  pub fn group(&self) -> GroupChoice {
    self.group
  }
  pub fn tone(&self) -> Tone {
    self.tone
  }
  pub fn seed_text(&self) -> &str {
    &self.seed_text
  }
}

/// Form-style count: unreadable or zero becomes 1, anything else is clamped
/// into range. A fraction rounds up, since the batch loop runs while the
/// index is below it.
pub fn lenient_count(raw: &str) -> i64 {
  let value = match raw.trim().parse::<f64>() {
    Ok(v) if !v.is_nan() && v != 0.0 => v,
    _ => 1.0,
  };
  value.max(MIN_COUNT as f64).min(MAX_COUNT as f64).ceil() as i64
}

#[test]
fn test_lenient_count() {
  assert_eq!(lenient_count("3"), 3);
  assert_eq!(lenient_count(" 7 "), 7);
  assert_eq!(lenient_count(""), 1);
  assert_eq!(lenient_count("abc"), 1);
  assert_eq!(lenient_count("0"), 1);
  assert_eq!(lenient_count("-4"), 1);
  assert_eq!(lenient_count("99"), 10);
  assert_eq!(lenient_count("Infinity"), 10);
  assert_eq!(lenient_count("3.2"), 4);
  assert_eq!(lenient_count("NaN"), 1);
}

#[test]
fn test_count_bounds() {
  assert!(GenerationRequest::new(1, GroupChoice::Random, Tone::Normal, "x").is_ok());
  assert!(GenerationRequest::new(10, GroupChoice::Random, Tone::Normal, "x").is_ok());
  assert_eq!(
    GenerationRequest::new(0, GroupChoice::Random, Tone::Normal, "x"),
    Err(RequestError::CountOutOfRange { count: 0 })
  );
  assert_eq!(
    GenerationRequest::new(-1, GroupChoice::Random, Tone::Normal, "x"),
    Err(RequestError::CountOutOfRange { count: -1 })
  );
}

#[test]
fn test_parse() {
  let request = GenerationRequest::parse("2", "4", "lucky", "  hello ").unwrap();
  assert_eq!(request.count(), 2);
  assert_eq!(request.group().to_string(), "4");
  assert_eq!(request.tone(), Tone::Lucky);
  assert_eq!(request.seed_text(), "hello");
  assert_eq!(
    GenerationRequest::parse("2", "random", "loud", ""),
    Err(RequestError::UnknownTone("loud".to_owned()))
  );
}
