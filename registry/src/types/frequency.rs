//! ポーリング間隔
//!
//! `30s`, `1m30s`, `1.5h`, `500ms`のようなGo形式のduration文字列を扱う。
//! ストアには正規化した文字列（`Display`の出力）を保存する。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// 小数部として解釈する最大桁数（これ以降の桁は切り捨て）
const MAX_FRACTION_DIGITS: usize = 18;

/// duration文字列のパースエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFrequencyError {
    /// 空文字列
    #[error("empty duration")]
    Empty,
    /// 数値部分が読めない
    #[error("invalid duration {0:?}")]
    Invalid(String),
    /// 単位が付いていない
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    /// 未知の単位
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// 読み取った単位
        unit: String,
        /// 入力全体
        input: String,
    },
    /// 表現可能な範囲を超えた
    #[error("duration {0:?} out of range")]
    Overflow(String),
}

/// ポーリング間隔
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Frequency(Duration);

impl Frequency {
    /// Durationから作成
    pub const fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// 秒数から作成
    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// Durationとして取得
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    /// 0かどうか
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Duration> for Frequency {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3600 * NANOS_PER_SEC),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(len)
}

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseFrequencyError::Empty);
        }
        if s == "0" {
            return Ok(Self(Duration::ZERO));
        }

        let overflow = || ParseFrequencyError::Overflow(s.to_string());
        let mut rest = s;
        let mut total: u128 = 0;

        while !rest.is_empty() {
            let (int_part, after_int) = split_digits(rest);
            let (frac_part, after_number) = match after_int.strip_prefix('.') {
                Some(after_dot) => split_digits(after_dot),
                None => ("", after_int),
            };
            if int_part.is_empty() && frac_part.is_empty() {
                return Err(ParseFrequencyError::Invalid(s.to_string()));
            }

            let unit_len = after_number
                .find(|c: char| c.is_ascii_digit() || c == '.')
                .unwrap_or(after_number.len());
            let (unit, next) = after_number.split_at(unit_len);
            if unit.is_empty() {
                return Err(ParseFrequencyError::MissingUnit(s.to_string()));
            }
            let scale = unit_nanos(unit).ok_or_else(|| ParseFrequencyError::UnknownUnit {
                unit: unit.to_string(),
                input: s.to_string(),
            })?;

            let whole: u128 = if int_part.is_empty() {
                0
            } else {
                int_part.parse().map_err(|_| overflow())?
            };
            let mut nanos = whole.checked_mul(scale).ok_or_else(overflow)?;

            if !frac_part.is_empty() {
                let digits = &frac_part[..frac_part.len().min(MAX_FRACTION_DIGITS)];
                let fraction: u128 = digits
                    .parse()
                    .map_err(|_| ParseFrequencyError::Invalid(s.to_string()))?;
                let divisor = 10u128.pow(digits.len() as u32);
                nanos = nanos
                    .checked_add(fraction * scale / divisor)
                    .ok_or_else(overflow)?;
            }

            total = total.checked_add(nanos).ok_or_else(overflow)?;
            rest = next;
        }

        let nanos = u64::try_from(total).map_err(|_| overflow())?;
        Ok(Self(Duration::from_nanos(nanos)))
    }
}

/// `value / scale`を末尾の0を落とした小数表記にする
fn format_scaled(value: u128, scale: u128) -> String {
    let whole = value / scale;
    let remainder = value % scale;
    if remainder == 0 {
        return whole.to_string();
    }
    let width = scale.ilog10() as usize;
    let fraction = format!("{remainder:0width$}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0.as_nanos();
        if nanos == 0 {
            return f.write_str("0s");
        }

        if nanos < NANOS_PER_SEC {
            let (unit, scale) = if nanos < NANOS_PER_MICRO {
                ("ns", 1)
            } else if nanos < NANOS_PER_MILLI {
                ("µs", NANOS_PER_MICRO)
            } else {
                ("ms", NANOS_PER_MILLI)
            };
            return write!(f, "{}{}", format_scaled(nanos, scale), unit);
        }

        let total_secs = self.0.as_secs();
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let secs = u128::from(total_secs % 60) * NANOS_PER_SEC + u128::from(self.0.subsec_nanos());

        if hours > 0 {
            write!(f, "{hours}h")?;
        }
        if hours > 0 || minutes > 0 {
            write!(f, "{minutes}m")?;
        }
        write!(f, "{}s", format_scaled(secs, NANOS_PER_SEC))
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
