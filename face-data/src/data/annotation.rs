use crate::{common::*, error::DataError};

/// One parsed line of an annotation file.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRecord {
    pub image_path: PathBuf,
    /// The face rectangle in `[x0, y0, x1, y1]` order.
    pub rect: [i64; 4],
    pub landmarks: Landmarks<f32>,
}

impl AnnotationRecord {
    /// Format the record back into an annotation line.
    pub fn to_line(&self) -> String {
        let path = self.image_path.display().to_string();
        let rect = self.rect.iter().map(|value| value.to_string());
        let landmarks = self.landmarks.as_flat().iter().map(|value| value.to_string());
        iter::once(path).chain(rect).chain(landmarks).join(" ")
    }
}

impl FromStr for AnnotationRecord {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_line(line)
    }
}

/// Parse an annotation line in the form of
/// `<image_path> <x0> <y0> <x1> <y1> <lm1_x> <lm1_y> ... <lmN_x> <lmN_y>`.
///
/// Rectangle values may be written as floats. They are truncated toward zero and must
/// fit in an `i32`.
pub fn parse_line(line: &str) -> Result<AnnotationRecord> {
    let mut tokens = line.split_whitespace();

    let image_path = tokens.next().ok_or_else(|| DataError::MalformedLine {
        reason: "the line is empty".into(),
    })?;

    let rect: Vec<i64> = tokens
        .by_ref()
        .take(4)
        .map(parse_rect_value)
        .try_collect()?;
    let rect: [i64; 4] = match rect.as_slice() {
        &[x0, y0, x1, y1] => [x0, y0, x1, y1],
        values => {
            return Err(DataError::MalformedLine {
                reason: format!(
                    "expect 4 rectangle values after the image path, but get {}",
                    values.len()
                ),
            }
            .into())
        }
    };

    let landmarks: Vec<f32> = tokens
        .map(|token| parse_number(token).map(|value| value as f32))
        .try_collect()?;
    if landmarks.len() % 2 != 0 {
        return Err(DataError::MalformedLine {
            reason: format!(
                "expect an even number of landmark values, but get {}",
                landmarks.len()
            ),
        }
        .into());
    }
    let landmarks = Landmarks::try_from_flat(landmarks)?;

    Ok(AnnotationRecord {
        image_path: PathBuf::from(image_path),
        rect,
        landmarks,
    })
}

fn parse_rect_value(token: &str) -> Result<i64> {
    let value = parse_number(token)?.trunc();
    ensure!(
        (i32::MIN as f64..=i32::MAX as f64).contains(&value),
        DataError::InvalidNumber {
            token: token.to_owned()
        }
    );
    Ok(value as i64)
}

fn parse_number(token: &str) -> Result<f64> {
    let value: f64 = token.parse().map_err(|_| DataError::InvalidNumber {
        token: token.to_owned(),
    })?;
    ensure!(
        value.is_finite(),
        DataError::InvalidNumber {
            token: token.to_owned()
        }
    );
    Ok(value)
}
