//! Encoded polyline format: each coordinate is a zig-zag signed delta from
//! the previous one, scaled by 1e5 and written in 5-bit chunks offset by 63,
//! with 0x20 as the continuation bit.

use thiserror::Error;

use crate::directions::Coordinate;

const PRECISION: f64 = 1e5;
const CHUNK_OFFSET: u8 = 63;
const CONTINUATION_BIT: i64 = 0x20;
const CHUNK_MASK: i64 = 0x1f;
const MAX_SHIFT: u32 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolylineError {
    #[error("Unterminated chunk at byte {0}")]
    Unterminated(usize),

    #[error("Invalid character {character:?} at byte {index}")]
    InvalidCharacter { index: usize, character: char },

    #[error("Value overflow at byte {0}")]
    Overflow(usize),
}

/// Decodes an encoded polyline. An empty string yields no points.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let start = index;
        lat = lat
            .checked_add(decode_value(bytes, &mut index)?)
            .ok_or(PolylineError::Overflow(start))?;
        lng = lng
            .checked_add(decode_value(bytes, &mut index)?)
            .ok_or(PolylineError::Overflow(start))?;

        points.push(Coordinate::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
    }

    Ok(points)
}

fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = *bytes.get(*index).ok_or(PolylineError::Unterminated(*index))?;
        if !(CHUNK_OFFSET..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                index: *index,
                character: byte as char,
            });
        }
        if shift > MAX_SHIFT {
            return Err(PolylineError::Overflow(*index));
        }

        let chunk = i64::from(byte - CHUNK_OFFSET);
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        *index += 1;

        if chunk < CONTINUATION_BIT {
            break;
        }
    }

    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

/// Encodes coordinates, rounding each one to 5 decimals.
pub fn encode(coordinates: &[Coordinate]) -> String {
    let mut encoded = String::new();
    let mut previous_lat: i64 = 0;
    let mut previous_lng: i64 = 0;

    for coordinate in coordinates {
        let lat = (coordinate.lat * PRECISION).round() as i64;
        let lng = (coordinate.lng * PRECISION).round() as i64;

        encode_value(lat - previous_lat, &mut encoded);
        encode_value(lng - previous_lng, &mut encoded);

        previous_lat = lat;
        previous_lng = lng;
    }

    encoded
}

fn encode_value(delta: i64, encoded: &mut String) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };

    while value >= CONTINUATION_BIT {
        encoded.push(char::from(((CONTINUATION_BIT | (value & CHUNK_MASK)) as u8) + CHUNK_OFFSET));
        value >>= 5;
    }

    encoded.push(char::from(value as u8 + CHUNK_OFFSET));
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    const COORD_DELTA: f64 = 0.000_01;

    #[test]
    fn test_decode_single_point() {
        let points = decode("_p~iF~ps|U").unwrap();

        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0].lat, 38.5, epsilon = COORD_DELTA);
        assert_abs_diff_eq!(points[0].lng, -120.2, epsilon = COORD_DELTA);
    }

    #[test]
    fn test_decode_multiple_points() {
        let points = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();

        assert_eq!(points.len(), 3);
        assert_abs_diff_eq!(points[0].lat, 38.5, epsilon = COORD_DELTA);
        assert_abs_diff_eq!(points[0].lng, -120.2, epsilon = COORD_DELTA);
        assert_abs_diff_eq!(points[1].lat, 40.7, epsilon = COORD_DELTA);
        assert_abs_diff_eq!(points[1].lng, -120.95, epsilon = COORD_DELTA);
        assert_abs_diff_eq!(points[2].lat, 43.252, epsilon = COORD_DELTA);
        assert_abs_diff_eq!(points[2].lng, -126.453, epsilon = COORD_DELTA);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_is_restartable() {
        let encoded = "_p~iF~ps|U_ulLnnqC";
        assert_eq!(decode(encoded).unwrap(), decode(encoded).unwrap());
    }

    #[test]
    fn test_decode_unterminated_longitude() {
        // A latitude without its longitude.
        assert_eq!(decode("_p~iF"), Err(PolylineError::Unterminated(5)));
    }

    #[test]
    fn test_decode_unterminated_chunk() {
        assert_eq!(decode("_p~i"), Err(PolylineError::Unterminated(4)));
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            decode("_p~iF ps|U"),
            Err(PolylineError::InvalidCharacter {
                index: 5,
                character: ' '
            })
        );
    }

    #[test]
    fn test_decode_overflow() {
        let encoded = "~".repeat(20);
        assert_eq!(decode(&encoded), Err(PolylineError::Overflow(13)));
    }

    #[test]
    fn test_encode_reference() {
        let coordinates = [
            Coordinate::new(38.5, -120.2),
            Coordinate::new(40.7, -120.95),
            Coordinate::new(43.252, -126.453),
        ];

        assert_eq!(encode(&coordinates), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(
            raw in prop::collection::vec((-90_00000i64..90_00000, -180_00000i64..180_00000), 0..50)
        ) {
            let coordinates: Vec<Coordinate> = raw
                .iter()
                .map(|&(lat, lng)| Coordinate::new(lat as f64 / 1e5, lng as f64 / 1e5))
                .collect();

            let decoded = decode(&encode(&coordinates)).unwrap();

            prop_assert_eq!(decoded, coordinates);
        }
    }
}
