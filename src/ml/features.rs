// ============================================================
// Layer 5 — Feature Tensors
// ============================================================
// Stacks per-sample feature rows into a [batch, width] float
// tensor on the target device.
//
// Any primitive numeric type that widens losslessly to f64
// (u8, i16, i32, u32, f32, f64, ...) is accepted and cast to
// the backend's float element.
//
//   rows:  [[f11, f12, ...], [f21, f22, ...], ...]
//   flat:  [f11, f12, ..., f21, f22, ...]      → reshape [N, W]

use burn::prelude::*;

use crate::domain::error::SdmError;
use crate::domain::location::{LocEncoding, Location};

pub fn features_tensor<B, T>(rows: &[Vec<T>], device: &B::Device) -> Result<Tensor<B, 2>, SdmError>
where
    B: Backend,
    T: Copy + Into<f64>,
{
    let first = rows.first().ok_or(SdmError::EmptyBatch)?;
    let width = first.len();

    if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(SdmError::RaggedBatch { row, expected: width, found: bad.len() });
    }

    let flat: Vec<f32> = rows
        .iter()
        .flat_map(|r| r.iter().map(|&v| Into::<f64>::into(v) as f32))
        .collect();

    Ok(Tensor::<B, 1>::from_floats(flat.as_slice(), device).reshape([rows.len(), width]))
}

/// Encode each location and stack the results: [N, encoding.num_features()]
pub fn encode_locations<B: Backend>(
    locations: &[Location],
    encoding:  LocEncoding,
    device:    &B::Device,
) -> Result<Tensor<B, 2>, SdmError> {
    let rows: Vec<Vec<f32>> = locations.iter().map(|l| l.encode(encoding)).collect();
    features_tensor::<B, f32>(&rows, device)
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_integer_rows_become_floats() {
        let rows: Vec<Vec<i32>> = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let t = features_tensor::<TestBackend, _>(&rows, &Default::default()).unwrap();
        assert_eq!(t.dims(), [2, 3]);
        assert_eq!(
            t.into_data().to_vec::<f32>().unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let rows: Vec<Vec<f64>> = Vec::new();
        let err = features_tensor::<TestBackend, _>(&rows, &Default::default()).unwrap_err();
        assert_eq!(err, SdmError::EmptyBatch);
    }

    #[test]
    fn test_ragged_batch_reports_row() {
        let rows: Vec<Vec<f64>> = vec![vec![0.0; 4], vec![0.0; 4], vec![0.0; 3]];
        let err = features_tensor::<TestBackend, _>(&rows, &Default::default()).unwrap_err();
        assert_eq!(err, SdmError::RaggedBatch { row: 2, expected: 4, found: 3 });
    }

    #[test]
    fn test_encode_locations_shape() {
        let locs = vec![
            Location::new(10.0, 20.0).unwrap(),
            Location::new(-33.9, 151.2).unwrap(),
            Location::new(64.1, -21.9).unwrap(),
        ];
        let t = encode_locations::<TestBackend>(&locs, LocEncoding::Wrap, &Default::default()).unwrap();
        assert_eq!(t.dims(), [3, 4]);

        let t = encode_locations::<TestBackend>(&locs, LocEncoding::Raw, &Default::default()).unwrap();
        assert_eq!(t.dims(), [3, 2]);
    }
}
