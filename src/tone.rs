use crate::error::RequestError;
use crate::stream::unit;
use itertools::Itertools;
use rand::RngCore;

pub const DIGITS: usize = 6;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tone {
  Normal,
  Bold,
  Lucky,
}

impl Tone {
  pub fn apply(self, digits: &mut [u8; DIGITS]) {
    match self {
      Self::Normal => {}
      Self::Bold => {
        for d in digits.iter_mut() {
          *d = (*d + 5) % 10;
        }
      }
      Self::Lucky => {
        digits[0] = (digits[0] + 7) % 10;
        digits[DIGITS - 1] = (digits[DIGITS - 1] + 3) % 10;
      }
    }
  }
}

impl Default for Tone {
  fn default() -> Self {
    Self::Normal
  }
}

impl std::str::FromStr for Tone {
  type Err = RequestError;
  fn from_str(s: &str) -> Result<Self, RequestError> {
    match s {
      "normal" => Ok(Self::Normal),
      "bold" => Ok(Self::Bold),
      "lucky" => Ok(Self::Lucky),
      _ => Err(RequestError::UnknownTone(s.to_owned())),
    }
  }
}

impl std::fmt::Display for Tone {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_str(match self {
      Self::Normal => "normal",
      Self::Bold => "bold",
      Self::Lucky => "lucky",
    })
  }
}

pub fn draw_digits<R: RngCore + ?Sized>(rng: &mut R) -> [u8; DIGITS] {
  let mut digits = [0; DIGITS];
  for d in digits.iter_mut() {
    *d = (unit(rng) * 10.0) as u8;
  }
  digits
}

pub fn format_digits(digits: &[u8]) -> String {
  format!("{:0>width$}", digits.iter().join(""), width = DIGITS)
}

/// Six draws, then the tone, then formatting. The tone sees the finished
/// digits, never the raw draws.
pub fn draw_number<R: RngCore + ?Sized>(rng: &mut R, tone: Tone) -> String {
  let mut digits = draw_digits(rng);
  tone.apply(&mut digits);
  format_digits(&digits)
}

#[test]
fn test_bold_twice_restores() {
  let original = [0, 1, 2, 7, 8, 9];
  let mut digits = original;
  Tone::Bold.apply(&mut digits);
  assert_eq!(digits, [5, 6, 7, 2, 3, 4]);
  Tone::Bold.apply(&mut digits);
  assert_eq!(digits, original);
}

#[test]
fn test_lucky_touches_ends_only() {
  let mut digits = [3, 1, 4, 1, 5, 9];
  Tone::Lucky.apply(&mut digits);
  assert_eq!(digits, [0, 1, 4, 1, 5, 2]);
}

#[test]
fn test_normal_is_identity() {
  let mut digits = [9, 9, 0, 0, 1, 2];
  Tone::Normal.apply(&mut digits);
  assert_eq!(digits, [9, 9, 0, 0, 1, 2]);
}

#[test]
fn test_draw_digits_with_fixed_draws() {
  use rand::rngs::mock::StepRng;
  // 0.5 on every draw
  let mut half = StepRng::new(1 << 31, 0);
  assert_eq!(draw_digits(&mut half), [5; DIGITS]);
  assert_eq!(draw_number(&mut half, Tone::Lucky), "255558");
  let mut top = StepRng::new(u32::MAX as u64, 0);
  assert_eq!(draw_number(&mut top, Tone::Normal), "999999");
}

#[test]
fn test_format_pads() {
  assert_eq!(format_digits(&[0, 0, 0, 0, 4, 2]), "000042");
  assert_eq!(format_digits(&[4, 2]), "000042");
}

#[test]
fn test_tone_parse() {
  assert_eq!("bold".parse::<Tone>(), Ok(Tone::Bold));
  assert_eq!(
    "BOLD".parse::<Tone>(),
    Err(RequestError::UnknownTone("BOLD".to_owned()))
  );
  for tone in [Tone::Normal, Tone::Bold, Tone::Lucky].iter() {
    assert_eq!(tone.to_string().parse::<Tone>(), Ok(*tone));
  }
}
