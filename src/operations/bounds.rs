use std::io::Read;

use log::debug;

use crate::{components::Envelope, errors::Result, operations::read_to_end};

/// Reads a JSON line string from `reader` until end of stream and returns its envelope.
pub fn calculate_bounds(reader: impl Read) -> Result<Envelope> {
    let json = read_to_end(reader)?;
    debug!("read {} bytes of JSON", json.len());
    Envelope::from_slice(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RastertoolError;
    use rstest::rstest;

    #[rstest]
    fn envelope_from_stream() {
        let stream = br#"{"coordinates":[[0,0],[1,1],[2,0]]}"#;
        let envelope = calculate_bounds(&stream[..]).unwrap();
        assert_eq!((envelope.min_x, envelope.min_y), (0., 0.));
        assert_eq!((envelope.max_x, envelope.max_y), (2., 1.));
    }

    #[rstest]
    fn pretty_printed_stream() {
        let stream = b"{\n  \"coordinates\": [\n    [10.5, -3],\n    [-2, 4.25]\n  ]\n}\n";
        let envelope = calculate_bounds(&stream[..]).unwrap();
        assert_eq!(
            (envelope.min_x, envelope.min_y, envelope.max_x, envelope.max_y),
            (-2., -3., 10.5, 4.25)
        );
    }

    #[rstest]
    fn invalid_utf8_is_a_data_error() {
        let stream = b"{\"coordinates\":[[0,0]]}\xff\xfe";
        let error = calculate_bounds(&stream[..]).unwrap_err();
        assert!(matches!(error, RastertoolError::JsonError(_)));
        assert_eq!(error.exit_code(), crate::exitcode::DATAERR);
    }

    #[rstest]
    fn empty_stream() {
        assert!(matches!(
            calculate_bounds(&b""[..]),
            Err(RastertoolError::JsonError(_))
        ));
    }
}
