//! The prebaked table and its assembler.

use crate::error::{PrebakeError, PrebakeResult, SinkError};

/// One bucket's stereo loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinauralSample {
    /// Left ear, L signed 8-bit samples.
    pub left: Vec<i8>,
    /// Right ear, L signed 8-bit samples.
    pub right: Vec<i8>,
}

impl BinauralSample {
    /// Samples per ear.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns true if the loop is empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Interleaves the ears as L, R, L, R, ...
    pub fn interleaved(&self) -> Vec<i8> {
        self.left
            .iter()
            .zip(&self.right)
            .flat_map(|(&l, &r)| [l, r])
            .collect()
    }
}

/// Collects buckets in table order and checks their shape.
#[derive(Debug)]
pub struct TableAssembler {
    loop_len: usize,
    bucket_count: usize,
    buckets: Vec<BinauralSample>,
}

impl TableAssembler {
    /// Starts an empty table of `bucket_count` loops of `loop_len` samples.
    pub fn new(loop_len: usize, bucket_count: usize) -> Self {
        Self {
            loop_len,
            bucket_count,
            buckets: Vec::with_capacity(bucket_count),
        }
    }

    /// Number of buckets pushed so far.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Appends the next bucket.
    pub fn push(&mut self, left: Vec<i8>, right: Vec<i8>) -> PrebakeResult<()> {
        let bucket = self.buckets.len();
        for found in [left.len(), right.len()] {
            if found != self.loop_len {
                return Err(PrebakeError::BufferLength {
                    bucket,
                    expected: self.loop_len,
                    found,
                });
            }
        }
        if bucket >= self.bucket_count {
            return Err(PrebakeError::BucketCount {
                expected: self.bucket_count,
                found: bucket + 1,
            });
        }
        self.buckets.push(BinauralSample { left, right });
        Ok(())
    }

    /// Seals the table. Fails unless exactly `bucket_count` buckets were pushed.
    pub fn finish(self) -> PrebakeResult<PrebakeTable> {
        if self.buckets.len() != self.bucket_count {
            return Err(PrebakeError::BucketCount {
                expected: self.bucket_count,
                found: self.buckets.len(),
            });
        }
        Ok(PrebakeTable {
            loop_len: self.loop_len,
            buckets: self.buckets,
        })
    }
}

/// Immutable table of binaural loops, indexed by bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrebakeTable {
    loop_len: usize,
    buckets: Vec<BinauralSample>,
}

impl PrebakeTable {
    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if the table has no buckets.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Samples per ear per bucket.
    pub fn loop_len(&self) -> usize {
        self.loop_len
    }

    /// Bucket `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&BinauralSample> {
        self.buckets.get(index)
    }

    /// Buckets in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, BinauralSample> {
        self.buckets.iter()
    }

    /// Flat byte image: bucket-major, each bucket's left loop then its right.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(2 * self.loop_len * self.buckets.len());
        for bucket in &self.buckets {
            bytes.extend(bucket.left.iter().map(|&s| s as u8));
            bytes.extend(bucket.right.iter().map(|&s| s as u8));
        }
        bytes
    }

    /// BLAKE3 hex digest of [`Self::to_bytes`].
    pub fn hash(&self) -> String {
        blake3::hash(&self.to_bytes()).to_hex().to_string()
    }
}

impl<'a> IntoIterator for &'a PrebakeTable {
    type Item = &'a BinauralSample;
    type IntoIter = std::slice::Iter<'a, BinauralSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Destination for a finished table.
pub trait TableSink {
    /// Writes the whole table.
    fn write_table(&mut self, table: &PrebakeTable) -> Result<(), SinkError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(value: i8, len: usize) -> Vec<i8> {
        vec![value; len]
    }

    #[test]
    fn test_assemble_and_index() {
        let mut asm = TableAssembler::new(4, 2);
        asm.push(filled(1, 4), filled(2, 4)).unwrap();
        asm.push(filled(3, 4), filled(-4, 4)).unwrap();
        let table = asm.finish().unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.loop_len(), 4);
        assert_eq!(table.get(1).unwrap().right, filled(-4, 4));
        assert!(table.get(2).is_none());
        assert_eq!(table.iter().count(), 2);
    }

    #[test]
    fn test_to_bytes_layout() {
        let mut asm = TableAssembler::new(2, 2);
        asm.push(vec![1, 2], vec![3, 4]).unwrap();
        asm.push(vec![-1, -2], vec![5, 6]).unwrap();
        let table = asm.finish().unwrap();
        assert_eq!(table.to_bytes(), vec![1, 2, 3, 4, 255, 254, 5, 6]);
        assert_eq!(table.hash().len(), 64);
    }

    #[test]
    fn test_interleaved() {
        let sample = BinauralSample {
            left: vec![1, 2],
            right: vec![-1, -2],
        };
        assert_eq!(sample.interleaved(), vec![1, -1, 2, -2]);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let mut asm = TableAssembler::new(4, 1);
        let err = asm.push(filled(0, 4), filled(0, 3)).unwrap_err();
        assert!(matches!(
            err,
            PrebakeError::BufferLength {
                bucket: 0,
                expected: 4,
                found: 3
            }
        ));
        assert!(asm.is_empty());
    }

    #[test]
    fn test_short_table_rejected() {
        let mut asm = TableAssembler::new(2, 3);
        asm.push(filled(0, 2), filled(0, 2)).unwrap();
        let err = asm.finish().unwrap_err();
        assert!(matches!(
            err,
            PrebakeError::BucketCount {
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn test_overfull_table_rejected() {
        let mut asm = TableAssembler::new(2, 1);
        asm.push(filled(0, 2), filled(0, 2)).unwrap();
        assert!(asm.push(filled(0, 2), filled(0, 2)).is_err());
        assert_eq!(asm.len(), 1);
    }
}
