//! Encoded polyline decoding.

/// Precision the routing backend encodes shapes with.
pub const SHAPE_PRECISION: u32 = 6;

/// Errors decoding an encoded polyline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolylineError {
    /// Input ended in the middle of a value
    #[error("polyline truncated")]
    Truncated,

    /// Byte outside the polyline alphabet
    #[error("invalid polyline byte {0:#04x}")]
    InvalidByte(u8),

    /// Value too large to decode
    #[error("polyline value overflow")]
    Overflow,
}

/// Decode a polyline into `[longitude, latitude]` pairs.
///
/// The encoding stores latitude first; the output is swapped to match the
/// rest of the route model.
pub fn decode(encoded: &str, precision: u32) -> Result<Vec<[f64; 2]>, PolylineError> {
    let factor = 10f64.powi(precision as i32);
    let bytes = encoded.as_bytes();

    let mut coordinates = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        lat = lat
            .checked_add(next_value(bytes, &mut index)?)
            .ok_or(PolylineError::Overflow)?;
        lng = lng
            .checked_add(next_value(bytes, &mut index)?)
            .ok_or(PolylineError::Overflow)?;
        coordinates.push([lng as f64 / factor, lat as f64 / factor]);
    }

    Ok(coordinates)
}

fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let byte = *bytes.get(*index).ok_or(PolylineError::Truncated)?;
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidByte(byte));
        }
        if shift > 55 {
            return Err(PolylineError::Overflow);
        }
        *index += 1;

        let chunk = i64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}
