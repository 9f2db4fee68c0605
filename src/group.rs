use crate::error::RequestError;
use crate::stream::unit;
use rand::RngCore;
use serde::Serialize;

pub const GROUPS: u8 = 5;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Group(u8);

impl Group {
  pub fn new(group: i64) -> Result<Self, RequestError> {
    if (1..=GROUPS as i64).contains(&group) {
      Ok(Self(group as u8))
    } else {
      Err(RequestError::GroupOutOfRange { group })
    }
  }
  pub fn get(self) -> u8 {
    self.0
  }
  pub fn draw<R: RngCore + ?Sized>(rng: &mut R) -> Self {
    Self(1 + (unit(rng) * GROUPS as f64) as u8)
  }
}

impl std::fmt::Display for Group {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GroupChoice {
  Random,
  Fixed(Group),
}

impl GroupChoice {
  /// Random draws consume one value from `rng`; fixed groups consume nothing.
  pub fn resolve<R: RngCore + ?Sized>(self, rng: &mut R) -> Group {
    match self {
      Self::Random => Group::draw(rng),
      Self::Fixed(group) => group,
    }
  }
}

impl Default for GroupChoice {
  fn default() -> Self {
    Self::Random
  }
}

impl std::str::FromStr for GroupChoice {
  type Err = RequestError;
  fn from_str(s: &str) -> Result<Self, RequestError> {
    if s == "random" {
      return Ok(Self::Random);
    }
    let group = s
      .trim()
      .parse::<i64>()
      .map_err(|_| RequestError::InvalidGroup(s.to_owned()))?;
    Ok(Self::Fixed(Group::new(group)?))
  }
}

impl std::fmt::Display for GroupChoice {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::Random => f.write_str("random"),
      Self::Fixed(group) => write!(f, "{}", group),
    }
  }
}

#[test]
fn test_group_bounds() {
  assert_eq!(Group::new(1).map(Group::get), Ok(1));
  assert_eq!(Group::new(5).map(Group::get), Ok(5));
  assert_eq!(Group::new(0), Err(RequestError::GroupOutOfRange { group: 0 }));
  assert_eq!(Group::new(6), Err(RequestError::GroupOutOfRange { group: 6 }));
}

#[test]
fn test_group_draw_edges() {
  use rand::rngs::mock::StepRng;
  assert_eq!(Group::draw(&mut StepRng::new(0, 0)).get(), 1);
  assert_eq!(Group::draw(&mut StepRng::new(u32::MAX as u64, 0)).get(), 5);
  // 0.6 lands in the fourth bucket
  assert_eq!(Group::draw(&mut StepRng::new(2576980378, 0)).get(), 4);
}

#[test]
fn test_fixed_consumes_nothing() {
  use crate::stream::Stream;
  let mut a = Stream::new(11);
  let mut b = Stream::new(11);
  let fixed = GroupChoice::Fixed(Group(2));
  assert_eq!(fixed.resolve(&mut a).get(), 2);
  assert_eq!(a.next_u32(), b.next_u32());
}

#[test]
fn test_group_choice_parse() {
  assert_eq!("random".parse::<GroupChoice>(), Ok(GroupChoice::Random));
  assert_eq!("3".parse::<GroupChoice>(), Ok(GroupChoice::Fixed(Group(3))));
  assert_eq!(
    "9".parse::<GroupChoice>(),
    Err(RequestError::GroupOutOfRange { group: 9 })
  );
  assert_eq!(
    "any".parse::<GroupChoice>(),
    Err(RequestError::InvalidGroup("any".to_owned()))
  );
}
