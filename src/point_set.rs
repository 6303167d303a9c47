use std::fmt::Display;
use std::path::Path;
use std::{fs, io::{self, BufRead}, time::Instant};

use anyhow::{bail, Context, Result};

use crate::sector::Point2D;

/// A set of fan centers, read from a whitespace separated text file.
#[derive(Debug, Clone)]
pub struct PointSet {
  /// Instance name (basename of the input file).
  pub instance_name: String,
  /// Time at which loading started.
  pub start_time: Instant,

  /// Centers, in input order. Coordinates are already projected to planar linear units.
  pub centers: Vec<Point2D>,
}

impl PointSet {
  /// Reads centers from `file`.
  pub fn from_file(file: &Path) -> Result<PointSet> {
    // Get basename from file path supplied
    let instance_name = file
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_else(|| file.display().to_string());

    let f = fs::File::open(file).with_context(|| format!("Failed to open input points {}", file.display()))?;
    PointSet::parse(instance_name, io::BufReader::new(f))
  }

  /// Parses one `x y` pair per line. Blank lines and lines starting with `#` are skipped, and
  /// columns after the second are ignored.
  pub fn parse<R: BufRead>(instance_name: String, reader: R) -> Result<PointSet> {
    // Record load start time
    let start_time = Instant::now();

    let mut centers = Vec::new();
    for (i, line) in reader.lines().enumerate() {
      let line_no = i + 1;
      let line = line.with_context(|| format!("{}: failed to read line {}", instance_name, line_no))?;
      let line = line.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }

      let mut parts = line.split_whitespace();
      let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
        bail!("{}:{}: expected `x y`, got {:?}", instance_name, line_no, line);
      };
      let x = x.parse::<f64>().with_context(|| format!("{}:{}: bad x coordinate {:?}", instance_name, line_no, x))?;
      let y = y.parse::<f64>().with_context(|| format!("{}:{}: bad y coordinate {:?}", instance_name, line_no, y))?;

      let center = Point2D::new(x, y);
      if !center.is_finite() {
        bail!("{}:{}: coordinates must be finite, got {}", instance_name, line_no, center);
      }
      centers.push(center);
    }

    log::debug!("Read {} centers from {}", centers.len(), instance_name);
    Ok(PointSet { instance_name, start_time, centers })
  }

  pub fn len(&self) -> usize {
    self.centers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.centers.is_empty()
  }
}

impl Display for PointSet {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "PointSet({}, {} centers)", self.instance_name, self.centers.len())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(text: &str) -> Result<PointSet> {
    PointSet::parse("test.txt".to_string(), text.as_bytes())
  }

  #[test]
  fn reads_points_in_order() {
    let set = parse("# x y\n1 2\n\n  -3.5   4e3 extra\n0 0\n").unwrap();
    assert_eq!(
      set.centers,
      vec![Point2D::new(1., 2.), Point2D::new(-3.5, 4000.), Point2D::new(0., 0.)]
    );
    assert_eq!(set.instance_name, "test.txt");
  }

  #[test]
  fn reports_line_of_bad_input() {
    let err = parse("1 2\n3\n").unwrap_err();
    assert!(err.to_string().contains("test.txt:2"), "{err}");

    let err = parse("1 2\n3 four\n").unwrap_err();
    assert!(err.to_string().contains("test.txt:2"), "{err}");

    let err = parse("nan 1\n").unwrap_err();
    assert!(err.to_string().contains("finite"), "{err}");
  }

  #[test]
  fn empty_input_is_empty_set() {
    assert!(parse("\n# nothing\n").unwrap().is_empty());
  }

  #[test]
  fn from_file_uses_basename() {
    let path = std::env::temp_dir().join(format!("range_fan_points_{}.txt", std::process::id()));
    fs::write(&path, "5 6\n7 8\n").unwrap();
    let set = PointSet::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(set.len(), 2);
    assert!(set.instance_name.starts_with("range_fan_points_"));
  }

  #[test]
  fn missing_file_is_an_error() {
    let path = std::env::temp_dir().join("range_fan_definitely_missing.txt");
    assert!(PointSet::from_file(&path).is_err());
  }
}
