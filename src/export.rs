use crate::generate::Recommendation;
use itertools::Itertools;

pub const PLACEHOLDER: &str = "추천 번호를 생성하면 이곳에 표시됩니다.";

pub fn listing(batch: &[Recommendation]) -> String {
  if batch.is_empty() {
    return PLACEHOLDER.to_owned();
  }
  batch
    .iter()
    .enumerate()
    .map(|(index, item)| format!("{}세트: {}조 {}", index + 1, item.group, item.number))
    .join("\n")
}

pub fn status(batch: &[Recommendation]) -> String {
  format!("{}세트 생성 완료", batch.len())
}

pub fn json(batch: &[Recommendation]) -> serde_json::Result<String> {
  serde_json::to_string_pretty(batch)
}

#[cfg(test)]
fn sample() -> Vec<Recommendation> {
  use crate::group::GroupChoice;
  use crate::seed::Seed;
  use crate::tone::Tone;
  crate::generate::generate_from(Seed::new("hello"), 2, GroupChoice::Random, Tone::Normal)
}

#[test]
fn test_listing() {
  assert_eq!(listing(&sample()), "1세트: 4조 734040\n2세트: 3조 093523");
  assert_eq!(listing(&[]), PLACEHOLDER);
}

#[test]
fn test_status() {
  assert_eq!(status(&sample()), "2세트 생성 완료");
}

#[test]
fn test_json() {
  let value: serde_json::Value = serde_json::from_str(&json(&sample()).unwrap()).unwrap();
  assert_eq!(
    value,
    serde_json::json!([
      { "group": 4, "number": "734040" },
      { "group": 3, "number": "093523" },
    ])
  );
}
