use crate::group::{Group, GroupChoice};
use crate::request::GenerationRequest;
use crate::seed::Seed;
use crate::tone::{draw_number, Tone};
use serde::Serialize;
use tracing::{debug, trace};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Recommendation {
  pub group: Group,
  pub number: String,
}

pub fn generate(request: &GenerationRequest) -> Vec<Recommendation> {
  let seed = Seed::resolve(request.seed_text());
  generate_from(seed, request.count(), request.group(), request.tone())
}

/// Item `i` owns the stream forked at `i`. The group is drawn before the
/// digits, from the same stream.
pub fn generate_from(seed: Seed, count: usize, group: GroupChoice, tone: Tone) -> Vec<Recommendation> {
  debug!(seed = seed.value(), count, %group, %tone, "generating batch");
  (0..count)
    .map(|index| {
      let item_seed = seed.fork(index as u32);
      let mut stream = item_seed.stream();
      let group = group.resolve(&mut stream);
      let number = draw_number(&mut stream, tone);
      trace!(index, seed = item_seed.value(), %group, %number, "generated");
      Recommendation { group, number }
    })
    .collect()
}

#[cfg(test)]
fn numbers(batch: &[Recommendation]) -> Vec<&str> {
  batch.iter().map(|r| r.number.as_str()).collect()
}

#[cfg(test)]
fn groups(batch: &[Recommendation]) -> Vec<u8> {
  batch.iter().map(|r| r.group.get()).collect()
}

#[cfg(test)]
fn fixed(group: i64) -> GroupChoice {
  GroupChoice::Fixed(Group::new(group).unwrap())
}

#[test]
fn test_hello_golden() {
  let request = GenerationRequest::new(3, fixed(1), Tone::Normal, "hello").unwrap();
  let batch = generate(&request);
  assert_eq!(numbers(&batch), ["673404", "409352", "710227"]);
  assert_eq!(groups(&batch), [1, 1, 1]);
  assert_eq!(generate(&request), batch);
}

#[test]
fn test_tone_golden() {
  let seed = Seed::new("hello");
  let bold = generate_from(seed, 3, fixed(1), Tone::Bold);
  assert_eq!(numbers(&bold), ["128959", "954807", "265772"]);
  let lucky = generate_from(seed, 3, fixed(1), Tone::Lucky);
  assert_eq!(numbers(&lucky), ["373407", "109355", "410220"]);
  let spring = generate_from(Seed::new("2024 spring"), 4, fixed(3), Tone::Lucky);
  assert_eq!(numbers(&spring), ["813591", "966274", "337414", "815275"]);
  assert_eq!(groups(&spring), [3, 3, 3, 3]);
}

#[test]
fn test_random_group_golden() {
  let batch = generate_from(Seed::new("hello"), 5, GroupChoice::Random, Tone::Normal);
  assert_eq!(groups(&batch), [4, 3, 4, 5, 1]);
  assert_eq!(
    numbers(&batch),
    ["734040", "093523", "102279", "115085", "885350"]
  );
}

#[test]
fn test_group_is_drawn_before_digits() {
  // The random batch's digits are the fixed batch's digits shifted by one draw.
  let random = generate_from(Seed::new("hello"), 1, GroupChoice::Random, Tone::Normal);
  let plain = generate_from(Seed::new("hello"), 1, fixed(1), Tone::Normal);
  assert_eq!(&random[0].number[..5], &plain[0].number[1..]);
}

#[test]
fn test_count_bounds() {
  assert!(generate_from(Seed::new("hello"), 0, GroupChoice::Random, Tone::Normal).is_empty());
  let seed = Seed::new("ten");
  let batch = generate_from(seed, 10, GroupChoice::Random, Tone::Bold);
  assert_eq!(batch.len(), 10);
  for (index, item) in batch.iter().enumerate() {
    let alone = generate_from(seed.fork(index as u32), 1, GroupChoice::Random, Tone::Bold);
    assert_eq!(&alone[0], item);
  }
}

#[test]
fn test_numbers_are_six_digits() {
  for text in ["a", "b", "hello", "가나다", "2024 spring"].iter() {
    for tone in [Tone::Normal, Tone::Bold, Tone::Lucky].iter() {
      for item in generate_from(Seed::new(text), 10, GroupChoice::Random, *tone) {
        assert_eq!(item.number.len(), 6);
        assert!(item.number.bytes().all(|b| b.is_ascii_digit()));
        assert!((1..=5).contains(&item.group.get()));
      }
    }
  }
}

#[test]
fn test_fixed_group_everywhere() {
  for g in 1..=5 {
    let batch = generate_from(Seed::new("g"), 10, fixed(g), Tone::Normal);
    assert!(batch.iter().all(|r| r.group.get() as i64 == g));
  }
}

#[test]
fn test_clock_seed_batch() {
  let request = GenerationRequest::new(4, GroupChoice::Random, Tone::Normal, "").unwrap();
  assert_eq!(generate(&request).len(), 4);
}
